use rust_roadmap::config::settings::{DEFAULT_API_ENDPOINT, DEFAULT_WORKSPACE};
use rust_roadmap::{RoadmapError, Settings};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_defaults_apply_when_no_course_file_exists() {
    let settings =
        Settings::load(Path::new("definitely-missing.toml"), None, None, false).unwrap();

    assert_eq!(settings.api_endpoint, DEFAULT_API_ENDPOINT);
    assert_eq!(settings.workspace, Path::new(DEFAULT_WORKSPACE));
    assert!(!settings.verbose);
}

#[test]
fn test_course_file_and_cli_flags_layer_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("course.toml");
    std::fs::write(
        &path,
        r#"
[course]
title = "Rust Evening Classes"

[run]
api_endpoint = "https://example.com/users/7"
workspace = "scratch"
"#,
    )
    .unwrap();

    // The file overrides the defaults
    let settings = Settings::load(&path, None, None, false).unwrap();
    assert_eq!(settings.course.title, "Rust Evening Classes");
    assert_eq!(settings.api_endpoint, "https://example.com/users/7");
    assert_eq!(settings.workspace, Path::new("scratch"));

    // CLI flags override the file
    let settings = Settings::load(
        &path,
        Some("elsewhere"),
        Some("https://example.com/users/8"),
        true,
    )
    .unwrap();
    assert_eq!(settings.workspace, Path::new("elsewhere"));
    assert_eq!(settings.api_endpoint, "https://example.com/users/8");
    assert!(settings.verbose);
}

#[test]
fn test_environment_variables_expand_inside_the_course_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("course.toml");
    std::fs::write(
        &path,
        r#"
[run]
api_endpoint = "${ROADMAP_LAYERING_TEST_ENDPOINT}"
"#,
    )
    .unwrap();

    std::env::set_var(
        "ROADMAP_LAYERING_TEST_ENDPOINT",
        "https://example.com/users/42",
    );
    let settings = Settings::load(&path, None, None, false).unwrap();
    std::env::remove_var("ROADMAP_LAYERING_TEST_ENDPOINT");

    assert_eq!(settings.api_endpoint, "https://example.com/users/42");
}

#[test]
fn test_invalid_endpoint_in_course_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("course.toml");
    std::fs::write(
        &path,
        r#"
[run]
api_endpoint = "not a url"
"#,
    )
    .unwrap();

    let result = Settings::load(&path, None, None, false);

    assert!(matches!(
        result,
        Err(RoadmapError::InvalidConfigValue { .. })
    ));
}

#[test]
fn test_unknown_keys_in_the_course_file_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("course.toml");
    std::fs::write(
        &path,
        r#"
[course]
titel = "A typo"
"#,
    )
    .unwrap();

    let result = Settings::load(&path, None, None, false);

    assert!(matches!(result, Err(RoadmapError::Toml(_))));
}
