//! Built-in presentation primitives and the descriptor catalog.
//!
//! Each primitive defines its [`Descriptor`] once, exposes typed enums for
//! its axis values, and a props struct implementing [`VariantProps`]:
//!
//! | Primitive | Axes (output order) | Forced rule |
//! |-----------|---------------------|-------------|
//! | [`Button`] | `variant`, `size` | none |
//! | [`Badge`] | `variant`, `size` | none |
//! | [`Card`] | `variant`, `padding` | none |
//! | [`Input`] | `size`, `variant` | non-empty `error` forces `variant=error` |
//!
//! [`Catalog`] collects descriptors by name for generic lookup (templates,
//! the command line tool, configuration files).

use std::collections::BTreeMap;

use crate::variant::{ConfigurationError, Descriptor, Selection, TokenList, VariantProps};

/// Declares a typed enum mirroring one axis's value names.
macro_rules! axis_values {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The value name as declared in the descriptor.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod badge;
mod button;
mod card;
mod input;

pub use badge::{Badge, BadgeProps, BadgeSize, BadgeVariant};
pub use button::{Button, ButtonProps, ButtonSize, ButtonVariant};
pub use card::{card_part_classes, Card, CardPadding, CardPart, CardProps, CardVariant};
pub use input::{
    ErrorView, Input, InputProps, InputSize, InputVariant, InputView, LabelView, MessageView,
    StatusIcon,
};

/// A presentation primitive with a statically declared variant space.
pub trait Primitive {
    /// Registration name, e.g. `"button"`.
    const NAME: &'static str;

    /// Typed call-time input.
    type Props: VariantProps;

    /// Defines the primitive's descriptor.
    ///
    /// Called once at startup; a failure means the primitive must not be used.
    fn descriptor() -> Result<Descriptor, ConfigurationError>;
}

/// Descriptors by primitive name.
///
/// A catalog is populated once during initialization and only read
/// afterwards. It is `Send + Sync`; share it behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use variance::{Catalog, Selection};
///
/// let catalog = Catalog::builtin().unwrap();
/// let tokens = catalog
///     .resolve("badge", &Selection::new().with("variant", "success"), &["uppercase"], None)
///     .unwrap();
/// assert!(tokens.contains("bg-green-600"));
/// assert_eq!(tokens.tokens().last().unwrap(), "uppercase");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    descriptors: BTreeMap<String, Descriptor>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the four built-in primitives.
    ///
    /// # Errors
    ///
    /// Propagates the first descriptor that fails to define.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        let mut catalog = Self::new();
        catalog.register_primitive::<Button>()?;
        catalog.register_primitive::<Badge>()?;
        catalog.register_primitive::<Card>()?;
        catalog.register_primitive::<Input>()?;
        Ok(catalog)
    }

    /// Registers a descriptor under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicatePrimitive`] if the name is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        descriptor: Descriptor,
    ) -> Result<(), ConfigurationError> {
        let name = name.into();
        if self.descriptors.contains_key(&name) {
            return Err(ConfigurationError::DuplicatePrimitive { name });
        }
        tracing::debug!(primitive = %name, "registered descriptor");
        self.descriptors.insert(name, descriptor);
        Ok(())
    }

    /// Defines and registers a [`Primitive`] under its own name.
    pub fn register_primitive<P: Primitive>(&mut self) -> Result<(), ConfigurationError> {
        self.register(P::NAME, P::descriptor()?)
    }

    /// Chaining form of [`Catalog::register`].
    pub fn with(
        mut self,
        name: impl Into<String>,
        descriptor: Descriptor,
    ) -> Result<Self, ConfigurationError> {
        self.register(name, descriptor)?;
        Ok(self)
    }

    /// Adds every descriptor of `other`, replacing same-named entries.
    ///
    /// This is how a configuration file layers over the built-in primitives.
    pub fn overlay(&mut self, other: Catalog) {
        for (name, descriptor) in other.descriptors {
            if self.descriptors.insert(name.clone(), descriptor).is_some() {
                tracing::debug!(primitive = %name, "descriptor replaced by overlay");
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.descriptors.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Descriptor)> {
        self.descriptors.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Resolves the named primitive, or `None` if it isn't registered.
    pub fn resolve<S: AsRef<str>>(
        &self,
        name: &str,
        selection: &Selection,
        overrides: &[S],
        forced: Option<&Selection>,
    ) -> Option<TokenList> {
        self.get(name)
            .map(|d| crate::variant::resolve(d, selection, overrides, forced))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Axis;

    fn tiny() -> Descriptor {
        Descriptor::define("t", [Axis::new("size").value("sm", "s")], [("size", "sm")]).unwrap()
    }

    #[test]
    fn test_builtin_catalog_has_four_primitives() {
        let catalog = Catalog::builtin().unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["badge", "button", "card", "input"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut catalog = Catalog::new();
        catalog.register("tiny", tiny()).unwrap();
        assert_eq!(
            catalog.register("tiny", tiny()).unwrap_err(),
            ConfigurationError::DuplicatePrimitive {
                name: "tiny".into()
            }
        );
    }

    #[test]
    fn test_register_primitive_twice_fails() {
        let mut catalog = Catalog::builtin().unwrap();
        assert!(catalog.register_primitive::<Button>().is_err());
    }

    #[test]
    fn test_overlay_replaces_and_adds() {
        let mut catalog = Catalog::builtin().unwrap();
        let overlay = Catalog::new()
            .with("button", tiny())
            .unwrap()
            .with("tiny", tiny())
            .unwrap();
        catalog.overlay(overlay);

        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get("button").unwrap().base_tokens(), ["t"]);
    }

    #[test]
    fn test_resolve_unknown_primitive() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog
            .resolve::<&str>("slider", &Selection::new(), &[], None)
            .is_none());
    }

    #[test]
    fn test_catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
