//! Call-time axis selections.

use std::collections::BTreeMap;

/// The caller's chosen value per axis.
///
/// A selection is partial: any axis may be omitted, in which case the axis
/// default applies. It may also name values (or axes) the descriptor does
/// not know; those are ignored during resolution rather than rejected.
///
/// The same type carries forced values, see [`Descriptor::resolve_forced`].
///
/// [`Descriptor::resolve_forced`]: super::Descriptor::resolve_forced
///
/// # Example
///
/// ```rust
/// use variance::Selection;
///
/// let selection = Selection::new()
///     .with("variant", "destructive")
///     .with("size", "lg");
///
/// assert_eq!(selection.get("size"), Some("lg"));
/// assert_eq!(selection.get("padding"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    values: BTreeMap<String, String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `value` for `axis`, returning the updated selection for chaining.
    pub fn with(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(axis, value);
        self
    }

    /// Selects `value` for `axis` if present, leaving the axis unset otherwise.
    ///
    /// Handy when mapping optional props.
    pub fn with_opt<V: Into<String>>(mut self, axis: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.set(axis, value);
        }
        self
    }

    /// Selects `value` for `axis`, replacing any previous choice.
    pub fn set(&mut self, axis: impl Into<String>, value: impl Into<String>) {
        self.values.insert(axis.into(), value.into());
    }

    /// Removes the choice for `axis`, returning it.
    pub fn remove(&mut self, axis: &str) -> Option<String> {
        self.values.remove(axis)
    }

    /// The chosen value for `axis`, if any.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.values.get(axis).map(String::as_str)
    }

    /// Iterates `(axis, value)` pairs in axis-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Selection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for (axis, value) in iter {
            selection.set(axis, value);
        }
        selection
    }
}
