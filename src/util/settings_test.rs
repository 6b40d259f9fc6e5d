use super::*;
use crate::util::storage::MemoryStore;

fn make_settings() -> (Settings, MemoryStore) {
    let memory = MemoryStore::new();
    (Settings::new(Arc::new(memory.clone())), memory)
}

// =============================================================
// userPreferences
// =============================================================

#[test]
fn preferences_default_when_missing() {
    let (settings, _) = make_settings();
    assert_eq!(settings.preferences(), UserPreferences::default());
}

#[test]
fn save_preferences_writes_camel_case_json() {
    let (settings, memory) = make_settings();
    settings.save_preferences(&UserPreferences { dark_mode: Some(true) }).unwrap();
    assert_eq!(memory.get("userPreferences").as_deref(), Some(r#"{"darkMode":true}"#));
    assert_eq!(settings.preferences().dark_mode, Some(true));
}

#[test]
fn preferences_default_when_stored_value_is_garbage() {
    let (settings, memory) = make_settings();
    memory.set("userPreferences", "not json").unwrap();
    assert_eq!(settings.preferences(), UserPreferences::default());
}

// =============================================================
// app_<key> settings
// =============================================================

#[test]
fn app_setting_is_namespaced() {
    let (settings, memory) = make_settings();
    settings.set_app_setting("sidebar", &serde_json::json!({"collapsed": true})).unwrap();
    assert_eq!(memory.get("app_sidebar").as_deref(), Some(r#"{"collapsed":true}"#));
    assert_eq!(memory.get("sidebar"), None);
}

#[test]
fn app_setting_reads_typed_value() {
    let (settings, _) = make_settings();
    settings.set_app_setting("pageSize", &25_u32).unwrap();
    assert_eq!(settings.app_setting::<u32>("pageSize"), Some(25));
}

#[test]
fn app_setting_with_changed_shape_reads_as_absent() {
    let (settings, _) = make_settings();
    settings.set_app_setting("pageSize", &"twenty").unwrap();
    assert_eq!(settings.app_setting::<u32>("pageSize"), None);
}

#[test]
fn remove_app_setting_clears_value() {
    let (settings, _) = make_settings();
    settings.set_app_setting("pageSize", &10_u32).unwrap();
    settings.remove_app_setting("pageSize").unwrap();
    assert_eq!(settings.app_setting::<u32>("pageSize"), None);
}
