use biocat_state::{JsonFilePreferences, PreferenceStore, Theme, DARK_MODE_KEY};
use biocat_test_utils::{env_guard, set_env_var, TestFixture};

#[test]
fn theme_survives_reopen_under_home() {
    let _g = env_guard();
    let fixture = TestFixture::new().unwrap();
    let _home = fixture.home_guard();
    let _prefs = set_env_var("BIOCAT_PREFERENCES", None);

    let mut store = JsonFilePreferences::open_default().unwrap();
    assert_eq!(store.path(), fixture.biocat_dir.join("preferences.json"));
    assert_eq!(Theme::toggle(&mut store).unwrap(), Theme::Dark);

    let reopened = JsonFilePreferences::open_default().unwrap();
    assert_eq!(reopened.get(DARK_MODE_KEY).as_deref(), Some("enabled"));
    assert_eq!(Theme::load(&reopened), Theme::Dark);
}

#[test]
fn preferences_path_honours_override() {
    let _g = env_guard();
    let fixture = TestFixture::new().unwrap();
    let custom = fixture.home_path().join("elsewhere/prefs.json");
    let _prefs = set_env_var("BIOCAT_PREFERENCES", custom.to_str());

    let mut store = JsonFilePreferences::open_default().unwrap();
    store.set(DARK_MODE_KEY, "disabled").unwrap();
    assert!(custom.exists());
    assert_eq!(Theme::load(&store), Theme::Light);
}
