//! Variant style resolution.
//!
//! This module provides the engine behind every presentation primitive:
//!
//! - [`Axis`]: A named dimension of variation and its values' tokens
//! - [`Descriptor`]: The validated variant space of one primitive
//! - [`Selection`]: Call-time axis choices (also used for forced values)
//! - [`resolve`]: The pure resolution function producing a [`TokenList`]
//! - [`ConfigurationError`]: Errors from descriptor definition
//!
//! Descriptors are validated once, when defined. Resolution itself never
//! fails: unknown selections degrade to the axis default.

mod axis;
mod descriptor;
mod error;
mod resolve;
mod selection;

pub use axis::{Axis, AxisValue, IntoTokens};
pub use descriptor::{Descriptor, DescriptorBuilder};
pub use error::ConfigurationError;
pub use resolve::{resolve, TokenList, VariantProps};
pub use selection::Selection;
