//! Template rendering with resolved variant classes.
//!
//! The resolver stops at a token sequence; something still has to attach
//! it to markup. This module wires a [`Catalog`](crate::Catalog) into
//! MiniJinja so templates can ask for classes directly:
//!
//! ```jinja
//! <button class="{{ variants("button", variant="destructive", size=size, class="w-full") }}">
//! <input id="{{ input_id(id) }}" class="{{ variants("input", force={"variant": "error"} if error else none) }}">
//! ```
//!
//! Keyword arguments to `variants` name axes, except for `class` (override
//! tokens, appended last) and `force` (a map of forced axis values).

mod functions;
mod renderer;

pub use functions::register_functions;
pub use renderer::Renderer;
