//! Config persistence: explicit load/save with a defined default.

use tempfile::TempDir;

use sweep_engine::ConfigStore;
use sweep_model::{CleanerConfig, Criterion, MatchLogic};

#[test]
fn missing_file_loads_the_default_config() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));

    let config = store.load().unwrap();
    assert_eq!(config, CleanerConfig::default());
    assert!(!config.is_actionable());
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path().join("nested").join("config.json"));

    let config = CleanerConfig {
        form_id: "9".to_string(),
        criteria: vec![Criterion::new("3", "blank"), Criterion::new("5", "42")],
        logic: MatchLogic::Or,
    };
    store.save(&config).unwrap();
    assert_eq!(store.load().unwrap(), config);
}

#[test]
fn save_overwrites_previous_settings() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));

    let first = CleanerConfig {
        form_id: "9".to_string(),
        criteria: vec![Criterion::new("3", "blank")],
        logic: MatchLogic::And,
    };
    store.save(&first).unwrap();

    let second = CleanerConfig {
        form_id: "12".to_string(),
        criteria: vec![Criterion::new("7", "spam")],
        logic: MatchLogic::Or,
    };
    store.save(&second).unwrap();
    assert_eq!(store.load().unwrap(), second);
}
