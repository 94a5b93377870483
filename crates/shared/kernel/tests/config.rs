use dforge_domain::config::AppConfig;
use dforge_kernel::config::{ConfigError, load_config};
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

#[test]
#[serial]
fn explicit_file_is_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("run.toml");
    fs::write(
        &file,
        r#"
[generation]
contacts = 4
deals = 9
reference_span = 12

[report]
sample = 3
"#,
    )?;

    let cfg: AppConfig = load_config(Some(&file))?;
    assert_eq!(cfg.generation.contacts, 4);
    assert_eq!(cfg.generation.deals, 9);
    assert_eq!(cfg.generation.reference_span, 12);
    assert_eq!(cfg.report.sample, 3);
    // Unspecified knobs keep their defaults.
    assert!((cfg.generation.unlinked_ratio - 0.1).abs() < f64::EPSILON);

    Ok(())
}

#[test]
#[serial]
fn missing_explicit_file_is_an_error() {
    let result: Result<AppConfig, ConfigError> = load_config(Some("/nonexistent/dforge.toml"));
    assert!(matches!(result, Err(ConfigError::Config { .. })));
}

#[test]
#[serial]
fn missing_default_file_falls_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
    // Run from a directory guaranteed not to contain a `dforge.*` file.
    let dir = tempdir()?;
    let original = std::env::current_dir()?;
    std::env::set_current_dir(dir.path())?;

    let result: Result<AppConfig, ConfigError> = load_config(None::<&str>);

    std::env::set_current_dir(original)?;

    let cfg = result?;
    assert_eq!(cfg.generation.contacts, 100);
    assert_eq!(cfg.generation.deals, 100);
    assert_eq!(cfg.report.sample, 5);

    Ok(())
}
