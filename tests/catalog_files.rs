//! Catalog loading from files and rendering templates against it.

use std::path::PathBuf;

use serde::Serialize;
use variance::{Catalog, CatalogError, ConfigurationError, Renderer, Selection};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_yaml_fixture_overlays_builtins() {
    let mut catalog = Catalog::builtin().unwrap();
    catalog.overlay(Catalog::from_path(fixture("catalog.yaml")).unwrap());

    assert!(catalog.contains("chip"));
    assert!(catalog.contains("button"));

    let badge = catalog.get("badge").unwrap();
    assert_eq!(badge.base_tokens(), ["inline-flex", "rounded"]);
    assert_eq!(
        badge
            .resolve::<&str>(&Selection::new().with("tone", "danger"), &[])
            .to_string(),
        "inline-flex rounded bg-red-100 text-red-900"
    );

    let chip = catalog.get("chip").unwrap();
    assert_eq!(
        chip.default_tokens().to_string(),
        "inline-flex items-center rounded-full h-8 px-3 text-sm bg-gray-100"
    );
}

#[test]
fn test_json_fixture_by_extension() {
    let catalog = Catalog::from_path(fixture("catalog.json")).unwrap();
    let tag = catalog.get("tag").unwrap();
    assert_eq!(tag.default_tokens().tokens(), ["tag", "tag-sm"]);
    assert_eq!(
        tag.resolve::<&str>(&Selection::new().with("tone", "loud").with("size", "lg"), &[])
            .to_string(),
        "tag tag-lg tag-loud uppercase"
    );
}

#[test]
fn test_invalid_file_reports_primitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yml");
    std::fs::write(
        &path,
        "ok:\n  variants:\n    a: { x: y }\n  defaultVariants: { a: x }\nbroken:\n  variants:\n    a: {}\n  defaultVariants: { a: x }\n",
    )
    .unwrap();

    match Catalog::from_path(&path).unwrap_err() {
        CatalogError::Configuration { primitive, .. } => assert_eq!(primitive, "broken"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_duplicate_axis_in_file_is_rejected() {
    let err = Catalog::from_json_str(
        r#"{"x": {"variants": {"a": {"v": "1"}, "a": {"v": "2"}}, "defaultVariants": {"a": "v"}}}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn test_repeated_default_in_file_is_rejected() {
    let err = Catalog::from_json_str(
        r#"{"x": {"variants": {"size": {"sm": "s", "lg": "l"}}, "defaultVariants": {"size": "sm", "size": "lg"}}}"#,
    )
    .unwrap_err();
    match err {
        CatalogError::Configuration { primitive, source } => {
            assert_eq!(primitive, "x");
            assert_eq!(
                source,
                ConfigurationError::DuplicateDefault {
                    axis: "size".to_string()
                }
            );
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[derive(Serialize)]
struct Form {
    kind: &'static str,
    field_id: Option<&'static str>,
    error: Option<&'static str>,
}

#[test]
fn test_template_fixture_renders() {
    let mut renderer = Renderer::builtin().unwrap();
    renderer.add_template_dir(fixture(""));

    let out = renderer
        .render(
            "form.html.j2",
            &Form {
                kind: "destructive",
                field_id: Some("email"),
                error: Some("required"),
            },
        )
        .unwrap();

    assert!(out.contains(r#"id="email""#));
    assert!(out.contains("from-red-600"));
    assert!(out.contains("h-12"));
    assert!(out.contains("w-full\""));
    assert!(out.contains("border-red-300"));
}

#[test]
fn test_template_fixture_generates_ids() {
    let mut renderer = Renderer::builtin().unwrap();
    renderer.add_template_dir(fixture(""));

    let out = renderer
        .render(
            "form.html.j2",
            &Form {
                kind: "default",
                field_id: None,
                error: None,
            },
        )
        .unwrap();

    assert!(out.contains(r#"id="input-"#));
    assert!(out.contains("border-gray-200"));
}
