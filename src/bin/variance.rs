//! Command line front end: inspect catalogs, resolve class strings, and
//! render templates.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use console::style;
use tracing::Level;
use variance::{split_tokens, Catalog, Renderer, Selection};

#[derive(Debug, Parser)]
#[command(
    name = "variance",
    version,
    about = "Resolve style variants for presentation primitives"
)]
struct Cli {
    /// Catalog file (YAML, or JSON by extension) layered over the built-in primitives
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Start from an empty catalog instead of the built-in primitives
    #[arg(long, global = true)]
    no_builtin: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List primitives with their axes and values (defaults marked with *)
    List {
        /// Only show this primitive
        primitive: Option<String>,
    },

    /// Resolve a primitive to its class string
    Resolve {
        primitive: String,

        /// Select an axis value, e.g. --set size=lg (repeatable)
        #[arg(long = "set", value_name = "AXIS=VALUE", value_parser = parse_pair)]
        set: Vec<(String, String)>,

        /// Force an axis value over any selection (repeatable)
        #[arg(long = "force", value_name = "AXIS=VALUE", value_parser = parse_pair)]
        force: Vec<(String, String)>,

        /// Extra tokens appended after all variant tokens
        #[arg(long)]
        class: Option<String>,

        /// Print a JSON array instead of a class string
        #[arg(long)]
        json: bool,
    },

    /// Render a MiniJinja template with the `variants` and `input_id` functions
    Render {
        template: PathBuf,

        /// JSON file used as the template context
        #[arg(long, value_name = "PATH")]
        data: Option<PathBuf>,
    },
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected AXIS=VALUE, got '{}'", s))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = load_catalog(cli.catalog.as_deref(), cli.no_builtin)?;

    match cli.command {
        Command::List { primitive } => list(&catalog, primitive.as_deref()),
        Command::Resolve {
            primitive,
            set,
            force,
            class,
            json,
        } => {
            let descriptor = catalog
                .get(&primitive)
                .ok_or_else(|| anyhow!("unknown primitive '{}'", primitive))?;
            let selection: Selection = set.into_iter().collect();
            let forced: Selection = force.into_iter().collect();
            let overrides = class.as_deref().map(split_tokens).unwrap_or_default();

            let tokens = descriptor.resolve_forced(&selection, &overrides, &forced);
            if json {
                println!("{}", serde_json::to_string(&tokens)?);
            } else {
                println!("{}", tokens);
            }
            Ok(())
        }
        Command::Render { template, data } => render(catalog, &template, data.as_deref()),
    }
}

fn load_catalog(path: Option<&Path>, no_builtin: bool) -> Result<Catalog> {
    let mut catalog = if no_builtin {
        Catalog::new()
    } else {
        Catalog::builtin().context("built-in primitives failed to define")?
    };
    if let Some(path) = path {
        let overlay = Catalog::from_path(path)?;
        catalog.overlay(overlay);
    }
    if catalog.is_empty() {
        bail!("catalog is empty");
    }
    Ok(catalog)
}

fn list(catalog: &Catalog, only: Option<&str>) -> Result<()> {
    if let Some(name) = only {
        if !catalog.contains(name) {
            bail!("unknown primitive '{}'", name);
        }
    }

    for (name, descriptor) in catalog.iter() {
        if only.is_some_and(|o| o != name) {
            continue;
        }
        println!("{}", style(name).bold());
        for axis in descriptor.axes() {
            let values: Vec<String> = axis
                .value_names()
                .map(|v| {
                    if axis.default_value() == Some(v) {
                        style(format!("{}*", v)).green().to_string()
                    } else {
                        v.to_string()
                    }
                })
                .collect();
            println!("  {}: {}", style(axis.name()).cyan(), values.join(", "));
        }
    }
    Ok(())
}

fn render(catalog: Catalog, template: &Path, data: Option<&Path>) -> Result<()> {
    let source = fs::read_to_string(template)
        .with_context(|| format!("failed to read template '{}'", template.display()))?;
    let context: serde_json::Value = match data {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read data '{}'", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid JSON in '{}'", path.display()))?
        }
        None => serde_json::Value::Object(Default::default()),
    };

    let mut renderer = Renderer::new(catalog);
    if let Some(dir) = template.parent() {
        renderer.add_template_dir(dir);
    }
    print!("{}", renderer.render_str(&source, &context)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            parse_pair("size=lg").unwrap(),
            ("size".to_string(), "lg".to_string())
        );
        assert_eq!(
            parse_pair(" variant = ghost ").unwrap(),
            ("variant".to_string(), "ghost".to_string())
        );
        assert!(parse_pair("size").is_err());
        assert!(parse_pair("=lg").is_err());
    }

    #[test]
    fn test_cli_parses_resolve() {
        let cli = Cli::try_parse_from([
            "variance", "resolve", "button", "--set", "variant=destructive", "--set", "size=sm",
            "--class", "w-full", "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Resolve {
                primitive,
                set,
                json,
                ..
            } => {
                assert_eq!(primitive, "button");
                assert_eq!(set.len(), 2);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_load_catalog_overlay_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.yaml");
        fs::write(
            &path,
            "chip:\n  variants:\n    tone: { a: ta }\n  defaultVariants: { tone: a }\n",
        )
        .unwrap();

        let catalog = load_catalog(Some(&path), false).unwrap();
        assert!(catalog.contains("chip"));
        assert!(catalog.contains("button"));

        let only = load_catalog(Some(&path), true).unwrap();
        assert_eq!(only.len(), 1);
    }

    #[test]
    fn test_load_catalog_empty_fails() {
        assert!(load_catalog(None, true).is_err());
    }
}
