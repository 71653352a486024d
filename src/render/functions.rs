//! MiniJinja function registration.

use std::sync::Arc;

use minijinja::value::{Kwargs, Value, ValueKind};
use minijinja::{Environment, Error, ErrorKind};

use crate::identity::ensure_identity;
use crate::primitives::Catalog;
use crate::util::split_tokens;
use crate::variant::Selection;

const CLASS_ARG: &str = "class";
const FORCE_ARG: &str = "force";

/// Registers the `variants` and `input_id` functions on an environment.
pub fn register_functions(env: &mut Environment<'static>, catalog: Arc<Catalog>) {
    env.add_function(
        "variants",
        move |primitive: String, kwargs: Kwargs| -> Result<String, Error> {
            variants(&catalog, &primitive, &kwargs)
        },
    );

    // Usage: {{ input_id(id) }} returns `id` when set, a fresh id otherwise
    env.add_function("input_id", |id: Option<String>| -> String {
        ensure_identity(id.as_deref())
    });
}

fn variants(catalog: &Catalog, primitive: &str, kwargs: &Kwargs) -> Result<String, Error> {
    let descriptor = catalog.get(primitive).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("unknown primitive '{}'", primitive),
        )
    })?;

    let mut selection = Selection::new();
    let mut forced = Selection::new();
    let mut overrides = Vec::new();

    let keys: Vec<String> = kwargs.args().map(str::to_string).collect();
    for key in keys {
        let value: Value = kwargs.get(&key)?;
        if value.is_none() || value.is_undefined() {
            continue;
        }
        match key.as_str() {
            CLASS_ARG => overrides.extend(class_tokens(&value)?),
            FORCE_ARG => forced = map_to_selection(&value)?,
            axis => selection.set(axis, axis_value(axis, &value)?),
        }
    }

    Ok(descriptor
        .resolve_forced(&selection, &overrides, &forced)
        .to_string())
}

fn map_to_selection(value: &Value) -> Result<Selection, Error> {
    if value.kind() != ValueKind::Map {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("'{}' expects a map of axis to value", FORCE_ARG),
        ));
    }
    let mut selection = Selection::new();
    for key in value.try_iter()? {
        let item = value.get_item(&key)?;
        if item.is_none() || item.is_undefined() {
            continue;
        }
        let axis = key.to_string();
        let value = axis_value(&axis, &item)?;
        selection.set(axis, value);
    }
    Ok(selection)
}

/// `class` accepts a class string or a list of class strings.
fn class_tokens(value: &Value) -> Result<Vec<String>, Error> {
    match value.kind() {
        ValueKind::String => Ok(split_tokens(value.as_str().unwrap_or_default())),
        ValueKind::Seq => {
            let mut tokens = Vec::new();
            for item in value.try_iter()? {
                if item.is_none() || item.is_undefined() {
                    continue;
                }
                match item.as_str() {
                    Some(s) => tokens.extend(split_tokens(s)),
                    None => {
                        return Err(Error::new(
                            ErrorKind::InvalidOperation,
                            format!("'{}' list items must be strings, got {}", CLASS_ARG, item.kind()),
                        ))
                    }
                }
            }
            Ok(tokens)
        }
        kind => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("'{}' expects a string or a list of strings, got {}", CLASS_ARG, kind),
        )),
    }
}

/// Axis values are names; numbers and booleans are accepted by their text.
fn axis_value(axis: &str, value: &Value) -> Result<String, Error> {
    match value.kind() {
        ValueKind::String => Ok(value.as_str().unwrap_or_default().to_string()),
        ValueKind::Number | ValueKind::Bool => Ok(value.to_string()),
        kind => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("value for axis '{}' must be a string, got {}", axis, kind),
        )),
    }
}
