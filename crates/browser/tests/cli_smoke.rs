use biocat_browser::{catalog_source, execute, Cli};
use biocat_catalog::CatalogSource;
use biocat_state::Settings;
use biocat_test_utils::{env_guard, sample_catalog_json, set_env_var, TestFixture};
use clap::Parser;
use serial_test::serial;

#[test]
#[serial]
fn catalog_source_precedence() {
    let _g = env_guard();
    let settings = Settings {
        data: Some("https://example.org/tools.json".into()),
        debounce_ms: None,
    };

    let _unset = set_env_var("BIOCAT_DATA", None);
    assert_eq!(
        catalog_source(None, &settings),
        CatalogSource::Url("https://example.org/tools.json".into())
    );
    assert_eq!(
        catalog_source(None, &Settings::default()),
        CatalogSource::Bundled
    );

    let _env = set_env_var("BIOCAT_DATA", Some("local.json"));
    assert_eq!(
        catalog_source(None, &settings),
        CatalogSource::File("local.json".into())
    );
    assert_eq!(
        catalog_source(Some("bundled".into()), &settings),
        CatalogSource::Bundled
    );
}

#[test]
#[serial]
fn commands_run_against_a_file_catalog() {
    let _g = env_guard();
    let fixture = TestFixture::new().unwrap();
    let _home = fixture.home_guard();
    let _data = set_env_var("BIOCAT_DATA", None);
    let path = fixture
        .write_catalog("data.json", &sample_catalog_json())
        .unwrap();
    let data = path.to_str().unwrap();

    for args in [
        vec!["biocat", "--data", data, "search", "kra"],
        vec!["biocat", "--data", data, "category", "Amplicon"],
        vec!["biocat", "--data", data, "--format", "json", "categories"],
        vec!["biocat", "--data", data, "recommend", "amplicon", "taxonomia", "--show-tools"],
        vec!["biocat", "--data", data, "doctor"],
    ] {
        let cli = Cli::try_parse_from(&args).unwrap();
        execute(cli).unwrap();
    }
}

#[test]
#[serial]
fn unreadable_catalog_is_not_a_failure() {
    let _g = env_guard();
    let fixture = TestFixture::new().unwrap();
    let _home = fixture.home_guard();
    let missing = fixture.home_path().join("missing.json");

    let cli =
        Cli::try_parse_from(["biocat", "--data", missing.to_str().unwrap(), "list"]).unwrap();
    execute(cli).unwrap();
}

#[test]
#[serial]
fn theme_toggle_writes_preferences() {
    let _g = env_guard();
    let fixture = TestFixture::new().unwrap();
    let _home = fixture.home_guard();
    let _prefs = set_env_var("BIOCAT_PREFERENCES", None);

    execute(Cli::try_parse_from(["biocat", "theme", "--toggle"]).unwrap()).unwrap();

    let raw = std::fs::read_to_string(fixture.biocat_dir.join("preferences.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["darkMode"], "enabled");
}
