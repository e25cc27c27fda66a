use super::load_config;
use super::settings::Settings;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Switches the working directory for the lifetime of the guard.
struct CwdGuard {
    orig: PathBuf,
}

impl CwdGuard {
    fn enter(dir: &TempDir) -> Self {
        let orig = env::current_dir().expect("current_dir");
        env::set_current_dir(dir.path()).expect("set current dir");
        Self { orig }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.orig);
    }
}

fn write_default_toml(contents: &str) {
    fs::create_dir_all("config").expect("create config dir");
    fs::write("config/default.toml", contents).expect("write config file");
}

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.output.path, "salida.txt");
    assert_eq!(settings.logging.level, "info");
}

#[test]
#[serial]
fn load_config_without_sources_uses_defaults() {
    let tmp = TempDir::new().expect("create tempdir");
    let _cwd = CwdGuard::enter(&tmp);

    temp_env::with_vars_unset(["EJERCICIOS_OUTPUT_PATH", "EJERCICIOS_LOGGING_LEVEL"], || {
        let cfg = load_config().expect("load_config failed");
        assert_eq!(cfg.output.path, "salida.txt");
        assert_eq!(cfg.logging.level, "info");
    });
}

#[test]
#[serial]
fn load_config_from_file_overrides_defaults() {
    let tmp = TempDir::new().expect("create tempdir");
    let _cwd = CwdGuard::enter(&tmp);
    write_default_toml(
        r#"
            [output]
            path = "otro.txt"

            [logging]
            level = "debug"
        "#,
    );

    temp_env::with_vars_unset(["EJERCICIOS_OUTPUT_PATH", "EJERCICIOS_LOGGING_LEVEL"], || {
        let cfg = load_config().expect("load_config failed");
        assert_eq!(cfg.output.path, "otro.txt");
        assert_eq!(cfg.logging.level, "debug");
    });
}

#[test]
#[serial]
fn load_config_partial_file_keeps_remaining_defaults() {
    let tmp = TempDir::new().expect("create tempdir");
    let _cwd = CwdGuard::enter(&tmp);
    write_default_toml(
        r#"
            [logging]
            level = "warn"
        "#,
    );

    temp_env::with_vars_unset(["EJERCICIOS_OUTPUT_PATH", "EJERCICIOS_LOGGING_LEVEL"], || {
        let cfg = load_config().expect("load_config failed");
        assert_eq!(cfg.output.path, "salida.txt");
        assert_eq!(cfg.logging.level, "warn");
    });
}

#[test]
#[serial]
fn load_config_env_overrides_file() {
    let tmp = TempDir::new().expect("create tempdir");
    let _cwd = CwdGuard::enter(&tmp);
    write_default_toml(
        r#"
            [output]
            path = "otro.txt"
        "#,
    );

    temp_env::with_vars(
        [
            ("EJERCICIOS_OUTPUT_PATH", Some("desde_env.txt")),
            ("EJERCICIOS_LOGGING_LEVEL", None),
        ],
        || {
            let cfg = load_config().expect("load_config failed");
            assert_eq!(cfg.output.path, "desde_env.txt");
            assert_eq!(cfg.logging.level, "info");
        },
    );
}

#[test]
#[serial]
fn load_config_rejects_malformed_file() {
    let tmp = TempDir::new().expect("create tempdir");
    let _cwd = CwdGuard::enter(&tmp);
    write_default_toml("[output\npath = ");

    assert!(load_config().is_err());
}
