//! # Variance - Declarative style variants for presentation primitives
//!
//! `variance` turns a small, declarative description of a component's visual
//! variants into the ordered token (class) sequence a rendering surface
//! attaches to a node.
//!
//! ## Concepts
//!
//! - An [`Axis`] is one dimension of variation (`size`, `variant`, ...), each
//!   value contributing a list of tokens.
//! - A [`Descriptor`] is a primitive's base tokens plus its ordered axes and
//!   their defaults, validated once when defined.
//! - A [`Selection`] picks values per axis at call time. It may be partial,
//!   and unknown values quietly fall back to the axis default.
//! - Overrides are extra tokens appended last, so they win under
//!   "last rule wins" styling.
//! - Forced values beat the selection, e.g. an input with an error message
//!   always renders its `error` variant.
//!
//! Output order is always: base tokens, then each axis in declaration order,
//! then overrides.
//!
//! ## Quick Start
//!
//! ```rust
//! use variance::{Axis, Descriptor, Selection};
//!
//! let button = Descriptor::builder()
//!     .base("btn")
//!     .axis(Axis::new("kind").value("default", "base-kind").value("destructive", "dest-kind"))
//!     .axis(Axis::new("size").value("sm", "pad-sm").value("lg", "pad-lg"))
//!     .default_value("kind", "default")
//!     .default_value("size", "sm")
//!     .build()
//!     .unwrap();
//!
//! let classes = button.resolve(&Selection::new().with("kind", "destructive"), &["custom-class"]);
//! assert_eq!(classes.to_string(), "btn dest-kind pad-sm custom-class");
//! ```
//!
//! ## Built-in Primitives
//!
//! Buttons, badges, cards and inputs ship ready to use, with typed props:
//!
//! ```rust
//! use variance::{Button, ButtonProps, ButtonSize, ButtonVariant, Primitive};
//!
//! let button = Button::descriptor().unwrap();
//! let classes = button.resolve_props(
//!     &ButtonProps::new()
//!         .variant(ButtonVariant::Outline)
//!         .size(ButtonSize::Lg)
//!         .class("w-full"),
//! );
//! assert!(classes.contains("border-2"));
//! assert_eq!(classes.tokens().last().unwrap(), "w-full");
//! ```
//!
//! ## Catalogs and Templates
//!
//! A [`Catalog`] holds descriptors by name. It can be loaded from YAML or
//! JSON (see [`Catalog::from_path`]) and handed to a [`Renderer`], which
//! exposes a `variants(...)` function to MiniJinja templates.

mod config;
mod identity;
mod primitives;
pub mod render;
mod util;
pub mod variant;

pub use config::CatalogError;
pub use identity::{ensure_identity, ensure_identity_with_prefix, DEFAULT_IDENTITY_PREFIX};
pub use primitives::{
    card_part_classes, Badge, BadgeProps, BadgeSize, BadgeVariant, Button, ButtonProps,
    ButtonSize, ButtonVariant, Card, CardPadding, CardPart, CardProps, CardVariant, Catalog,
    ErrorView, Input, InputProps, InputSize, InputVariant, InputView, LabelView, MessageView,
    Primitive, StatusIcon,
};
pub use render::Renderer;
pub use util::{join_tokens, split_tokens};
pub use variant::{
    resolve, Axis, AxisValue, ConfigurationError, Descriptor, DescriptorBuilder, IntoTokens,
    Selection, TokenList, VariantProps,
};
