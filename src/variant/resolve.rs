//! The resolution algorithm.
//!
//! Resolution turns a [`Descriptor`], a partial [`Selection`], optional forced
//! values and a list of override tokens into one ordered [`TokenList`]:
//!
//! ```text
//! base tokens ++ axis tokens (declaration order) ++ overrides (caller order)
//! ```
//!
//! For each axis the effective value is, in order of precedence:
//!
//! 1. the forced value, if given and declared by the axis
//! 2. the selected value, if given and declared by the axis
//! 3. the axis default
//!
//! Unknown values never fail; they fall through to the next rule. Later
//! tokens are positioned to win under "last rule wins" semantics, so
//! overrides can always restyle anything an axis contributes.

use std::fmt;

use serde::Serialize;

use super::axis::Axis;
use super::descriptor::Descriptor;
use super::selection::Selection;
use crate::util::join_tokens;

/// An ordered token sequence, ready for a rendering surface.
///
/// Tokens are not deduplicated. [`Display`](fmt::Display) joins them with
/// single spaces, which is the form of a class attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    /// The tokens in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns `true` if any token equals `token`.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_tokens(&self.tokens))
    }
}

impl From<Vec<String>> for TokenList {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

impl From<TokenList> for Vec<String> {
    fn from(list: TokenList) -> Self {
        list.tokens
    }
}

impl IntoIterator for TokenList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Typed call-time input for one primitive.
///
/// Implementors translate their fields into the loosely keyed inputs of the
/// resolver. Only primitives with state-precedence rules override
/// [`VariantProps::forced`].
pub trait VariantProps {
    /// Chosen axis values.
    fn selection(&self) -> Selection;

    /// Extra tokens appended after all axis tokens.
    fn overrides(&self) -> Vec<String>;

    /// Axis values that win over both selection and default.
    fn forced(&self) -> Selection {
        Selection::new()
    }
}

/// Resolves a descriptor against call-time input.
///
/// This is a pure function: identical inputs always produce identical
/// output, and it is safe to call concurrently against shared descriptors.
///
/// # Example
///
/// ```rust
/// use variance::{resolve, Axis, Descriptor, Selection};
///
/// let input = Descriptor::define(
///     "field",
///     [Axis::new("variant").value("default", "ok").value("error", "bad").value("success", "good")],
///     [("variant", "default")],
/// )
/// .unwrap();
///
/// let selection = Selection::new().with("variant", "success");
/// let forced = Selection::new().with("variant", "error");
/// let tokens = resolve(&input, &selection, &[] as &[&str], Some(&forced));
/// assert_eq!(tokens.tokens(), ["field", "bad"]);
/// ```
pub fn resolve<S: AsRef<str>>(
    descriptor: &Descriptor,
    selection: &Selection,
    overrides: &[S],
    forced: Option<&Selection>,
) -> TokenList {
    let axis_len: usize = descriptor
        .axes()
        .iter()
        .map(|a| a.values().iter().map(|v| v.tokens().len()).max().unwrap_or(0))
        .sum();
    let mut tokens =
        Vec::with_capacity(descriptor.base_tokens().len() + axis_len + overrides.len());
    tokens.extend(descriptor.base_tokens().iter().cloned());

    for axis in descriptor.axes() {
        tokens.extend(effective_tokens(axis, selection, forced).iter().cloned());
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        for (axis, value) in selection.iter() {
            if descriptor.axis(axis).is_none() {
                tracing::debug!(axis, value, "ignoring selection for undeclared axis");
            }
        }
    }

    tokens.extend(overrides.iter().map(|t| t.as_ref().to_string()));
    TokenList { tokens }
}

fn effective_tokens<'a>(
    axis: &'a Axis,
    selection: &Selection,
    forced: Option<&Selection>,
) -> &'a [String] {
    if let Some(value) = forced.and_then(|f| f.get(axis.name())) {
        match axis.tokens(value) {
            Some(tokens) => return tokens,
            None => tracing::debug!(
                axis = axis.name(),
                value,
                "forced value is not declared, ignoring"
            ),
        }
    }

    if let Some(value) = selection.get(axis.name()) {
        match axis.tokens(value) {
            Some(tokens) => return tokens,
            None => tracing::debug!(
                axis = axis.name(),
                value,
                default = axis.default_value().unwrap_or_default(),
                "unknown selection, falling back to default"
            ),
        }
    }

    axis.default_tokens()
}

impl Descriptor {
    /// Resolves a selection plus overrides.
    ///
    /// Equivalent to [`resolve`] without forced values.
    pub fn resolve<S: AsRef<str>>(&self, selection: &Selection, overrides: &[S]) -> TokenList {
        resolve(self, selection, overrides, None)
    }

    /// Resolves with forced values taking precedence over the selection.
    pub fn resolve_forced<S: AsRef<str>>(
        &self,
        selection: &Selection,
        overrides: &[S],
        forced: &Selection,
    ) -> TokenList {
        resolve(self, selection, overrides, Some(forced))
    }

    /// Resolves typed props.
    pub fn resolve_props<P: VariantProps + ?Sized>(&self, props: &P) -> TokenList {
        let forced = props.forced();
        let forced = (!forced.is_empty()).then_some(&forced);
        resolve(self, &props.selection(), &props.overrides(), forced)
    }

    /// Tokens produced when nothing is selected and nothing is overridden.
    pub fn default_tokens(&self) -> TokenList {
        self.resolve::<&str>(&Selection::new(), &[])
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::Axis;
    use proptest::prelude::*;

    fn token() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,8}"
    }

    /// Descriptors with 1..4 axes of 1..4 values, axes named `a0..`, values `v0..`.
    fn descriptor() -> impl Strategy<Value = Descriptor> {
        (
            prop::collection::vec(token(), 0..4),
            prop::collection::vec(
                (prop::collection::vec(prop::collection::vec(token(), 0..3), 1..4), any::<prop::sample::Index>()),
                1..4,
            ),
        )
            .prop_map(|(base, axes)| {
                let mut defaults = Vec::new();
                let axes: Vec<Axis> = axes
                    .into_iter()
                    .enumerate()
                    .map(|(i, (values, default))| {
                        let name = format!("a{}", i);
                        defaults.push((name.clone(), format!("v{}", default.index(values.len()))));
                        values
                            .into_iter()
                            .enumerate()
                            .fold(Axis::new(name), |axis, (j, tokens)| {
                                axis.value(format!("v{}", j), tokens)
                            })
                    })
                    .collect();
                Descriptor::define(base, axes, defaults).unwrap()
            })
    }

    fn selection() -> impl Strategy<Value = Selection> {
        prop::collection::vec(("a[0-4]", "v[0-5]|nope"), 0..5)
            .prop_map(|pairs| pairs.into_iter().collect())
    }

    proptest! {
        #[test]
        fn resolution_is_deterministic(
            d in descriptor(),
            sel in selection(),
            overrides in prop::collection::vec(token(), 0..4),
        ) {
            prop_assert_eq!(d.resolve(&sel, &overrides), d.resolve(&sel, &overrides));
        }

        #[test]
        fn output_starts_with_base_tokens(d in descriptor(), sel in selection()) {
            let out = d.resolve::<&str>(&sel, &[]);
            prop_assert!(out.tokens().starts_with(d.base_tokens()));
        }

        #[test]
        fn output_ends_with_overrides(
            d in descriptor(),
            sel in selection(),
            overrides in prop::collection::vec(token(), 0..4),
        ) {
            let out = d.resolve(&sel, &overrides);
            prop_assert!(out.tokens().ends_with(&overrides));
        }

        #[test]
        fn empty_input_yields_defaults_in_axis_order(d in descriptor()) {
            let mut expected: Vec<String> = d.base_tokens().to_vec();
            for axis in d.axes() {
                expected.extend(axis.default_tokens().iter().cloned());
            }
            prop_assert_eq!(d.resolve::<&str>(&Selection::new(), &[]).into_vec(), expected);
        }

        #[test]
        fn unknown_values_behave_like_omitted(d in descriptor(), sel in selection()) {
            let mut cleaned = Selection::new();
            for (axis, value) in sel.iter() {
                if d.axis(axis).map(|a| a.has_value(value)).unwrap_or(false) {
                    cleaned.set(axis, value);
                }
            }
            prop_assert_eq!(d.resolve::<&str>(&sel, &[]), d.resolve::<&str>(&cleaned, &[]));
        }
    }
}
