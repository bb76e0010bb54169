use std::{fs, path::Path};

use marquee_config::{ConfigLoadError, ConfigLoader, ConfigSource};
use tempfile::TempDir;

const NO_VARS: [(&str, &str); 0] = [];

fn write(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create config dir");
    }
    fs::write(path, contents).expect("write config");
}

#[test]
fn empty_root_falls_back_to_defaults() {
    let dir = TempDir::new().expect("tempdir");

    let load = ConfigLoader::new()
        .with_root(dir.path())
        .with_vars(NO_VARS)
        .load()
        .expect("load");

    assert_eq!(load.source, ConfigSource::Default);
    assert_eq!(load.config.rows.len(), 5);
    // Only the missing key is worth mentioning.
    assert_eq!(load.warnings.items.len(), 1);
}

#[test]
fn default_toml_file_is_found() {
    let dir = TempDir::new().expect("tempdir");
    write(
        dir.path(),
        "config/marquee.toml",
        r#"
        row_cap = 3

        [[rows]]
        id = "picks"
        label = "Picks"
        searches = ["dune", "heat", "alien"]
        "#,
    );

    let load = ConfigLoader::new()
        .with_root(dir.path())
        .with_vars([("OMDB_API_KEY", "key")])
        .load()
        .expect("load");

    assert_eq!(
        load.source,
        ConfigSource::File(dir.path().join("config/marquee.toml"))
    );
    assert_eq!(load.config.row_cap, 3);
    assert_eq!(load.config.rows[0].id.as_str(), "picks");
    assert!(load.warnings.is_empty());
}

#[test]
fn root_file_wins_over_config_dir() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "marquee.json", r#"{"row_cap": 7}"#);
    write(dir.path(), "config/marquee.toml", "row_cap = 2");

    let load = ConfigLoader::new()
        .with_root(dir.path())
        .with_vars(NO_VARS)
        .load()
        .expect("load");

    assert_eq!(load.config.row_cap, 7);
}

#[test]
fn env_path_beats_inline_json_and_files() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "marquee.toml", "row_cap = 2");
    write(dir.path(), "custom.conf", r#"{"row_cap": 6}"#);
    let custom = dir.path().join("custom.conf");

    let load = ConfigLoader::new()
        .with_root(dir.path())
        .with_vars([
            ("MARQUEE_CONFIG_PATH", custom.to_string_lossy().into_owned()),
            ("MARQUEE_CONFIG_JSON", r#"{"row_cap": 9}"#.to_string()),
        ])
        .load()
        .expect("load");

    assert_eq!(load.source, ConfigSource::EnvPath(custom));
    // Unknown extension: TOML fails, JSON parses.
    assert_eq!(load.config.row_cap, 6);
}

#[test]
fn inline_json_beats_default_files() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "marquee.toml", "row_cap = 2");

    let load = ConfigLoader::new()
        .with_root(dir.path())
        .with_vars([(
            "MARQUEE_CONFIG_JSON",
            r#"{"hero": {"primary": "dark", "fallback": "ozark"}}"#,
        )])
        .load()
        .expect("load");

    assert_eq!(load.source, ConfigSource::EnvInline);
    assert_eq!(load.config.hero.primary.as_str(), "dark");
    assert_eq!(load.config.row_cap, 10);
}

#[test]
fn env_overrides_apply_on_top_of_file() {
    let dir = TempDir::new().expect("tempdir");
    write(
        dir.path(),
        "marquee.toml",
        r#"
        row_cap = 2

        [api]
        base_url = "http://file.invalid/"
        api_key = "from-file"
        "#,
    );

    let load = ConfigLoader::new()
        .with_root(dir.path())
        .with_vars([
            ("OMDB_API_KEY", "from-env"),
            ("OMDB_BASE_URL", "http://127.0.0.1:9000/"),
            ("MARQUEE_ROW_CAP", " 4 "),
        ])
        .load()
        .expect("load");

    assert_eq!(load.config.api.api_key, "from-env");
    assert_eq!(load.config.api.base_url, "http://127.0.0.1:9000/");
    assert_eq!(load.config.row_cap, 4);
}

#[test]
fn env_file_fills_missing_vars_only() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), ".env", "OMDB_API_KEY=dotenv-key\nMARQUEE_ROW_CAP=5\n");

    let load = ConfigLoader::new()
        .with_root(dir.path())
        .with_vars([("MARQUEE_ROW_CAP", "8")])
        .load()
        .expect("load");

    assert_eq!(load.config.api.api_key, "dotenv-key");
    assert_eq!(load.config.row_cap, 8);

    let skipped = ConfigLoader::new()
        .with_root(dir.path())
        .with_vars(NO_VARS)
        .without_dotenv()
        .load()
        .expect("load");
    assert!(skipped.config.api.api_key.is_empty());
}

#[test]
fn explicit_path_is_used_even_without_env() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "elsewhere.toml", "row_cap = 1");

    let load = ConfigLoader::new()
        .with_root(dir.path())
        .with_path(dir.path().join("elsewhere.toml"))
        .with_vars(NO_VARS)
        .load()
        .expect("load");

    assert_eq!(load.config.row_cap, 1);
    // Every default row now lists more terms than the cap.
    assert_eq!(load.warnings.items.len(), 6);
}

#[test]
fn bad_row_cap_override_is_an_error() {
    let dir = TempDir::new().expect("tempdir");

    let err = ConfigLoader::new()
        .with_root(dir.path())
        .with_vars([("MARQUEE_ROW_CAP", "ten")])
        .load()
        .expect_err("invalid cap");

    match err {
        ConfigLoadError::InvalidRowCap { value, .. } => assert_eq!(value, "ten"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn guard_rails_run_after_overrides() {
    let dir = TempDir::new().expect("tempdir");

    let err = ConfigLoader::new()
        .with_root(dir.path())
        .with_vars([("MARQUEE_ROW_CAP", "0")])
        .load()
        .expect_err("zero cap");

    assert!(matches!(err, ConfigLoadError::GuardRail(_)));
}

#[test]
fn unparseable_file_reports_both_formats() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "broken.cfg", "row_cap = [");

    let err = ConfigLoader::new()
        .with_root(dir.path())
        .with_path(dir.path().join("broken.cfg"))
        .with_vars(NO_VARS)
        .load()
        .expect_err("broken file");

    let ConfigLoadError::Catalog(inner) = err else {
        panic!("expected catalog error");
    };
    let message = inner.to_string();
    assert!(message.contains("toml error"), "{message}");
    assert!(message.contains("json error"), "{message}");
}
