//! Loading descriptor catalogs from YAML or JSON.
//!
//! Catalog files use the shape variant definitions are usually written in:
//! a map of primitive name to base tokens, variants, and default variants.
//!
//! ```yaml
//! chip:
//!   base: "inline-flex rounded-full"
//!   variants:
//!     tone:
//!       neutral: "bg-gray-100 text-gray-900"
//!       info: ["bg-blue-100", "text-blue-900"]
//!     size:
//!       sm: "px-2 text-xs"
//!       lg: "px-3 text-sm"
//!   defaultVariants:
//!     tone: neutral
//!     size: sm
//! ```
//!
//! Map order in the document is significant: axes resolve in the order
//! they appear under `variants`. Every entry goes through
//! [`Descriptor::define`], so a file with a missing or dangling default
//! fails to load as a whole.

use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use thiserror::Error;

use crate::primitives::Catalog;
use crate::variant::{Axis, ConfigurationError, Descriptor};

/// Error returned when a catalog file can't be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("primitive '{primitive}': {source}")]
    Configuration {
        primitive: String,
        #[source]
        source: ConfigurationError,
    },
}

/// A map that remembers the order its entries appeared in.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Ordered<T>(Vec<(String, T)>);

impl<T> Default for Ordered<T> {
    fn default() -> Self {
        Ordered(Vec::new())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Ordered<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedVisitor<T> {
            type Value = Ordered<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    entries.push((key, value));
                }
                Ok(Ordered(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

/// Tokens written as one class string or a list of class strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum TokenSpec {
    One(String),
    Many(Vec<String>),
}

impl TokenSpec {
    fn into_vec(self) -> Vec<String> {
        match self {
            TokenSpec::One(s) => vec![s],
            TokenSpec::Many(v) => v,
        }
    }
}

impl Default for TokenSpec {
    fn default() -> Self {
        TokenSpec::Many(Vec::new())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct PrimitiveConfig {
    #[serde(default)]
    base: TokenSpec,
    variants: Ordered<Ordered<TokenSpec>>,
    #[serde(default, rename = "defaultVariants", alias = "default_variants")]
    default_variants: Ordered<String>,
}

impl PrimitiveConfig {
    fn into_descriptor(self) -> Result<Descriptor, ConfigurationError> {
        let axes = self.variants.0.into_iter().map(|(name, values)| {
            values
                .0
                .into_iter()
                .fold(Axis::new(name), |axis, (value, tokens)| {
                    axis.value(value, tokens.into_vec())
                })
        });
        Descriptor::define(self.base.into_vec(), axes, self.default_variants.0)
    }
}

fn build_catalog(primitives: Ordered<PrimitiveConfig>) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();
    for (name, config) in primitives.0 {
        let descriptor = config
            .into_descriptor()
            .map_err(|source| CatalogError::Configuration {
                primitive: name.clone(),
                source,
            })?;
        catalog
            .register(name.clone(), descriptor)
            .map_err(|source| CatalogError::Configuration {
                primitive: name,
                source,
            })?;
    }
    tracing::info!(primitives = catalog.len(), "loaded catalog");
    Ok(catalog)
}

impl Catalog {
    /// Parses a YAML catalog.
    ///
    /// # Example
    ///
    /// ```rust
    /// use variance::Catalog;
    ///
    /// let catalog = Catalog::from_yaml_str(r#"
    /// chip:
    ///   base: rounded-full
    ///   variants:
    ///     tone: { neutral: bg-gray-100, info: bg-blue-100 }
    ///   defaultVariants: { tone: neutral }
    /// "#).unwrap();
    ///
    /// let chip = catalog.get("chip").unwrap();
    /// assert_eq!(chip.default_tokens().to_string(), "rounded-full bg-gray-100");
    /// ```
    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        build_catalog(serde_yaml::from_str(source)?)
    }

    /// Parses a JSON catalog.
    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        build_catalog(serde_json::from_str(source)?)
    }

    /// Reads a catalog file; `.json` files are parsed as JSON, anything
    /// else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "reading catalog");
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&source),
            _ => Self::from_yaml_str(&source),
        }
    }
}
