//! Axes of visual variation and their token lists.

use crate::util::split_tokens;

/// Conversion into an ordered token list.
///
/// Values may be declared the way class strings are usually written: a
/// single whitespace-separated string, or a list of such strings. Every
/// entry is split on whitespace, so `["a b", "c"]` yields `a`, `b`, `c`.
pub trait IntoTokens {
    fn into_tokens(self) -> Vec<String>;
}

impl IntoTokens for &str {
    fn into_tokens(self) -> Vec<String> {
        split_tokens(self)
    }
}

impl IntoTokens for String {
    fn into_tokens(self) -> Vec<String> {
        split_tokens(&self)
    }
}

impl IntoTokens for &String {
    fn into_tokens(self) -> Vec<String> {
        split_tokens(self)
    }
}

impl IntoTokens for &[&str] {
    fn into_tokens(self) -> Vec<String> {
        self.iter().flat_map(|s| split_tokens(s)).collect()
    }
}

impl<const N: usize> IntoTokens for [&str; N] {
    fn into_tokens(self) -> Vec<String> {
        self.iter().flat_map(|s| split_tokens(s)).collect()
    }
}

impl IntoTokens for Vec<String> {
    fn into_tokens(self) -> Vec<String> {
        self.iter().flat_map(|s| split_tokens(s)).collect()
    }
}

impl IntoTokens for Vec<&str> {
    fn into_tokens(self) -> Vec<String> {
        self.as_slice().into_tokens()
    }
}

/// One named value of an axis and the tokens it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisValue {
    name: String,
    tokens: Vec<String>,
}

impl AxisValue {
    /// The value name, e.g. `"destructive"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tokens emitted when this value is in effect.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// A named dimension of visual variation, such as `size` or `variant`.
///
/// Values keep their declaration order. An axis built with [`Axis::new`]
/// has no default yet; the default is attached (and checked) when the axis
/// is handed to [`Descriptor::define`](super::Descriptor::define).
///
/// # Example
///
/// ```rust
/// use variance::Axis;
///
/// let size = Axis::new("size")
///     .value("sm", "h-8 px-3")
///     .value("lg", ["h-12 px-6", "text-base"]);
///
/// assert_eq!(size.tokens("lg").unwrap(), ["h-12", "px-6", "text-base"]);
/// assert!(size.default_value().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    name: String,
    values: Vec<AxisValue>,
    pub(crate) default: Option<usize>,
}

impl Axis {
    /// Creates an axis with no values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            default: None,
        }
    }

    /// Adds a value, returning the updated axis for chaining.
    ///
    /// Duplicate names are kept here and rejected at definition time.
    pub fn value<T: IntoTokens>(mut self, name: impl Into<String>, tokens: T) -> Self {
        self.values.push(AxisValue {
            name: name.into(),
            tokens: tokens.into_tokens(),
        });
        self
    }

    /// The axis name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values in declaration order.
    pub fn values(&self) -> &[AxisValue] {
        &self.values
    }

    /// Value names in declaration order.
    pub fn value_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.name.as_str())
    }

    /// Returns `true` if the axis declares a value with this name.
    pub fn has_value(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Tokens for the named value, or `None` if the axis doesn't declare it.
    pub fn tokens(&self, name: &str) -> Option<&[String]> {
        self.position(name).map(|i| self.values[i].tokens.as_slice())
    }

    /// The validated default value name.
    ///
    /// Always `Some` for axes owned by a [`Descriptor`](super::Descriptor).
    pub fn default_value(&self) -> Option<&str> {
        self.default.map(|i| self.values[i].name.as_str())
    }

    /// Tokens for the default value.
    pub fn default_tokens(&self) -> &[String] {
        match self.default {
            Some(i) => &self.values[i].tokens,
            None => &[],
        }
    }

    /// Number of declared values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no values are declared.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.values.iter().position(|v| v.name == name)
    }
}
