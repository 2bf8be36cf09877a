// tests/config_loading.rs

use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;

use coalescer::config::{load_and_validate, load_from_path};
use coalescer::errors::CoalescerError;
use coalescer::trigger::{TriggerOptions, Window};
use coalescer_test_utils::builders::ConfigFileBuilder;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn full_config_is_loaded() {
    let file = config_file(
        r#"
[trigger]
pre_run_delay = true
pre_run_delay_secs = 1
quiet_period = true
quiet_period_secs = 3

[watch]
root = "src"
include = ["**/*.rs"]
exclude = ["**/generated/**"]

[command]
cmd = "cargo build"
workdir = "."
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(
        cfg.trigger().options(),
        TriggerOptions {
            pre_run_delay: Window::new(Duration::from_secs(1)),
            quiet_period: Window::new(Duration::from_secs(3)),
        }
    );
    assert_eq!(cfg.watch().include, vec!["**/*.rs".to_string()]);
    assert_eq!(cfg.watch().exclude, vec!["**/generated/**".to_string()]);
    assert_eq!(cfg.command().cmd, "cargo build");
    assert!(cfg.command().workdir.is_some());
}

#[test]
fn only_command_is_required() {
    let file = config_file(
        r#"
[command]
cmd = "make"
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.trigger().options(), TriggerOptions::default());
    assert!(cfg.watch().root.is_none());
    assert!(cfg.watch().include.is_empty());
}

#[test]
fn disabled_window_keeps_its_duration_but_never_waits() {
    let file = config_file(
        r#"
[trigger]
quiet_period = false
quiet_period_secs = 9

[command]
cmd = "make"
"#,
    );

    let options = load_and_validate(file.path()).unwrap().trigger().options();
    assert_eq!(options.quiet_period.duration, Duration::from_secs(9));
    assert_eq!(options.quiet_period.wait(), None);
}

#[test]
fn missing_command_section_is_a_toml_error() {
    let file = config_file(
        r#"
[trigger]
quiet_period = true
"#,
    );

    match load_from_path(file.path()) {
        Err(CoalescerError::TomlError(_)) => {}
        other => panic!("Expected TomlError, got: {:?}", other),
    }
}

#[test]
fn unknown_keys_are_rejected() {
    let file = config_file(
        r#"
[trigger]
quiet_perod = true

[command]
cmd = "make"
"#,
    );

    let result = load_and_validate(file.path());
    assert!(matches!(result, Err(CoalescerError::TomlError(_))));
}

#[test]
fn empty_command_returns_config_error() {
    let file = config_file(
        r#"
[command]
cmd = "   "
"#,
    );

    match load_and_validate(file.path()) {
        Err(CoalescerError::ConfigError(msg)) => {
            assert!(msg.contains("[command].cmd"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn invalid_glob_returns_glob_error() {
    let raw = ConfigFileBuilder::new("make").include("src/{a,b").raw();
    let result = coalescer::config::ConfigFile::try_from(raw);
    assert!(matches!(result, Err(CoalescerError::GlobError(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_and_validate(dir.path().join("Coalescer.toml"));
    assert!(matches!(result, Err(CoalescerError::IoError(_))));
}

#[test]
fn builder_config_maps_to_trigger_options() {
    let cfg = ConfigFileBuilder::new("make")
        .pre_run_delay(0)
        .quiet_period(2)
        .exclude("target/**")
        .build();

    let options = cfg.trigger().options();
    assert_eq!(options.pre_run_delay.wait(), Some(Duration::ZERO));
    assert_eq!(options.quiet_period.wait(), Some(Duration::from_secs(2)));
}
