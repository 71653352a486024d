//! Variant descriptors: the validated, immutable configuration of one
//! presentation primitive.

use std::collections::{BTreeMap, HashSet};

use super::axis::{Axis, IntoTokens};
use super::error::ConfigurationError;

/// The static variant space of one presentation primitive.
///
/// A descriptor is built once, at startup, through [`Descriptor::define`] or
/// [`Descriptor::builder`]. Definition validates everything resolution
/// relies on, so a successfully defined descriptor can be resolved against
/// any selection without failing. Descriptors are never mutated afterwards
/// and can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    base: Vec<String>,
    axes: Vec<Axis>,
}

impl Descriptor {
    /// Defines a descriptor from base tokens, ordered axes and per-axis
    /// defaults.
    ///
    /// `defaults` must name every axis exactly once, and each default must
    /// be one of that axis's values.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::NoAxes`] if `axes` is empty
    /// - [`ConfigurationError::EmptyAxis`] if an axis has no values
    /// - [`ConfigurationError::DuplicateAxis`] if two axes share a name
    /// - [`ConfigurationError::DuplicateValue`] if an axis repeats a value name
    /// - [`ConfigurationError::DuplicateDefault`] if `defaults` names an axis twice
    /// - [`ConfigurationError::UnknownDefaultAxis`] if `defaults` names an undeclared axis
    /// - [`ConfigurationError::MissingDefault`] if an axis has no default
    /// - [`ConfigurationError::UnknownDefaultValue`] if a default is not a declared value
    ///
    /// # Example
    ///
    /// ```rust
    /// use variance::{Axis, Descriptor, Selection};
    ///
    /// let button = Descriptor::define(
    ///     "btn",
    ///     [
    ///         Axis::new("kind").value("default", "base-kind").value("destructive", "dest-kind"),
    ///         Axis::new("size").value("sm", "pad-sm").value("lg", "pad-lg"),
    ///     ],
    ///     [("kind", "default"), ("size", "sm")],
    /// )
    /// .unwrap();
    ///
    /// let tokens = button.resolve(&Selection::new().with("kind", "destructive"), &["custom-class"]);
    /// assert_eq!(tokens.to_string(), "btn dest-kind pad-sm custom-class");
    /// ```
    pub fn define<B, A, D, K, V>(base: B, axes: A, defaults: D) -> Result<Self, ConfigurationError>
    where
        B: IntoTokens,
        A: IntoIterator<Item = Axis>,
        D: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut axes: Vec<Axis> = axes.into_iter().collect();
        if axes.is_empty() {
            return Err(ConfigurationError::NoAxes);
        }

        {
            let mut seen_axes = HashSet::new();
            for axis in &axes {
                if axis.is_empty() {
                    return Err(ConfigurationError::EmptyAxis {
                        axis: axis.name().to_string(),
                    });
                }
                if !seen_axes.insert(axis.name()) {
                    return Err(ConfigurationError::DuplicateAxis {
                        axis: axis.name().to_string(),
                    });
                }
                let mut seen_values = HashSet::new();
                for value in axis.value_names() {
                    if !seen_values.insert(value) {
                        return Err(ConfigurationError::DuplicateValue {
                            axis: axis.name().to_string(),
                            value: value.to_string(),
                        });
                    }
                }
            }
        }

        let mut collected: BTreeMap<String, String> = BTreeMap::new();
        for (axis, value) in defaults {
            let axis = axis.into();
            if collected.contains_key(&axis) {
                return Err(ConfigurationError::DuplicateDefault { axis });
            }
            collected.insert(axis, value.into());
        }
        let defaults = collected;
        if let Some(axis) = defaults
            .keys()
            .find(|name| !axes.iter().any(|a| a.name() == name.as_str()))
        {
            return Err(ConfigurationError::UnknownDefaultAxis { axis: axis.clone() });
        }

        for axis in &mut axes {
            let value = defaults
                .get(axis.name())
                .ok_or_else(|| ConfigurationError::MissingDefault {
                    axis: axis.name().to_string(),
                })?;
            let index = axis
                .position(value)
                .ok_or_else(|| ConfigurationError::UnknownDefaultValue {
                    axis: axis.name().to_string(),
                    value: value.clone(),
                })?;
            axis.default = Some(index);
        }

        let descriptor = Self {
            base: base.into_tokens(),
            axes,
        };
        tracing::trace!(
            axes = descriptor.axes.len(),
            base_tokens = descriptor.base.len(),
            "defined variant descriptor"
        );
        Ok(descriptor)
    }

    /// Starts a fluent definition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use variance::{Axis, Descriptor};
    ///
    /// let card = Descriptor::builder()
    ///     .base("rounded-xl border")
    ///     .axis(Axis::new("padding").value("sm", "p-4").value("lg", "p-8"))
    ///     .default_value("padding", "sm")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(card.base_tokens(), ["rounded-xl", "border"]);
    /// ```
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::default()
    }

    /// Tokens applied unconditionally, first in every resolution.
    pub fn base_tokens(&self) -> &[String] {
        &self.base
    }

    /// Axes in declaration order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Looks up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|a| a.name() == name)
    }

    /// `(axis, default value)` pairs in axis declaration order.
    pub fn defaults(&self) -> impl Iterator<Item = (&str, &str)> {
        self.axes
            .iter()
            .filter_map(|a| a.default_value().map(|d| (a.name(), d)))
    }
}

/// Fluent front end for [`Descriptor::define`].
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    base: Vec<String>,
    axes: Vec<Axis>,
    defaults: Vec<(String, String)>,
}

impl DescriptorBuilder {
    /// Appends base tokens.
    pub fn base<T: IntoTokens>(mut self, tokens: T) -> Self {
        self.base.extend(tokens.into_tokens());
        self
    }

    /// Appends an axis. Order of calls is output order.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axes.push(axis);
        self
    }

    /// Sets the default value for an axis.
    pub fn default_value(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.push((axis.into(), value.into()));
        self
    }

    /// Validates and builds the descriptor.
    pub fn build(self) -> Result<Descriptor, ConfigurationError> {
        Descriptor::define(self.base, self.axes, self.defaults)
    }
}
