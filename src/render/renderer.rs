//! Template renderer backed by a descriptor catalog.

use std::path::Path;
use std::sync::Arc;

use minijinja::{Environment, Error};
use serde::Serialize;

use super::functions::register_functions;
use crate::primitives::Catalog;
use crate::variant::ConfigurationError;

/// A renderer with pre-registered templates and catalog functions.
///
/// # Example
///
/// ```rust
/// use variance::Renderer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Action { kind: String }
///
/// let mut renderer = Renderer::builtin().unwrap();
/// renderer
///     .add_template("action", r#"{{ variants("badge", variant=kind, size="sm") }}"#)
///     .unwrap();
///
/// let out = renderer.render("action", &Action { kind: "warning".into() }).unwrap();
/// assert!(out.contains("bg-amber-500"));
/// assert!(out.contains("h-5"));
/// ```
pub struct Renderer {
    env: Environment<'static>,
    catalog: Arc<Catalog>,
}

impl Renderer {
    /// Creates a renderer for `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_shared(Arc::new(catalog))
    }

    /// Creates a renderer sharing an existing catalog.
    pub fn with_shared(catalog: Arc<Catalog>) -> Self {
        let mut env = Environment::new();
        register_functions(&mut env, Arc::clone(&catalog));
        Self { env, catalog }
    }

    /// Creates a renderer over the built-in primitives.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in descriptor fails to define.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Ok(Self::new(Catalog::builtin()?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Loads templates that aren't registered by name from `dir`.
    pub fn add_template_dir(&mut self, dir: impl AsRef<Path>) {
        self.env
            .set_loader(minijinja::path_loader(dir.as_ref().to_path_buf()));
    }

    /// Renders a registered (or loadable) template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails,
    /// including calls to `variants` with an unknown primitive.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    /// Renders a one-off template source.
    pub fn render_str<T: Serialize>(&self, source: &str, data: &T) -> Result<String, Error> {
        self.env.render_str(source, data)
    }
}
