//! Descriptor configuration errors.

use thiserror::Error;

/// Error returned when a descriptor (or a catalog of descriptors) is
/// inconsistent.
///
/// These are raised eagerly while defining a [`Descriptor`](super::Descriptor),
/// never during resolution. A primitive whose descriptor fails to define
/// must refuse to initialize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A descriptor was defined without any axes.
    #[error("descriptor declares no axes")]
    NoAxes,

    /// An axis declares zero values.
    #[error("axis '{axis}' has no values")]
    EmptyAxis { axis: String },

    /// Two axes share the same name.
    #[error("axis '{axis}' is declared more than once")]
    DuplicateAxis { axis: String },

    /// A value name appears twice within one axis.
    #[error("axis '{axis}' declares value '{value}' more than once")]
    DuplicateValue { axis: String, value: String },

    /// The defaults mapping has no entry for a declared axis.
    #[error("axis '{axis}' has no default value")]
    MissingDefault { axis: String },

    /// A default references a value the axis does not declare.
    #[error("default '{value}' for axis '{axis}' is not one of its values")]
    UnknownDefaultValue { axis: String, value: String },

    /// The defaults mapping names the same axis more than once.
    #[error("axis '{axis}' is given more than one default")]
    DuplicateDefault { axis: String },

    /// The defaults mapping names an axis the descriptor does not declare.
    #[error("default given for undeclared axis '{axis}'")]
    UnknownDefaultAxis { axis: String },

    /// A catalog already holds a descriptor under this name.
    #[error("primitive '{name}' is already registered")]
    DuplicatePrimitive { name: String },
}
