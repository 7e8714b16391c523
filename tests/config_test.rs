// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证 JSON 配置文件的读取与生效
// ==========================================


use punch_attendance::config::{
    AnalysisConfigReader, ConfigManager, LogicalField, ShiftPolicy, CONFIG_PATH_ENV,
};
use punch_attendance::importer::ImportError;
use test_helpers::Workspace;

#[test]
fn test_load_from_json_file() {
    let ws = Workspace::new().unwrap();
    let path = ws
        .write_file(
            "config.json",
            r#"{
                "evening_start_hour": 14,
                "present_threshold_hours": 7.5,
                "window_days": 26,
                "locale": "ar",
                "include_idle_identities": false,
                "code_header_synonyms": ["matricule", "ID"]
            }"#,
        )
        .unwrap();

    let config = ConfigManager::from_file(&path).unwrap();

    assert_eq!(config.source(), Some(path.as_path()));

    let policy = config.get_shift_policy().unwrap();
    assert_eq!(policy.evening_start_hour, 14);
    assert_eq!(policy.present_threshold_hours, 7.5);
    assert_eq!(policy.morning_close_start_hour, ShiftPolicy::default().morning_close_start_hour);

    assert_eq!(config.get_window_days().unwrap(), 26);
    assert_eq!(config.get_locale().unwrap(), "ar");
    assert!(!config.get_include_idle_identities().unwrap());

    let synonyms = config.get_header_synonyms().unwrap();
    assert!(synonyms.matches(LogicalField::Code, "Matricule Employé"));
    assert!(synonyms.matches(LogicalField::Code, "الكود"));
}

#[test]
fn test_defaults_without_file() {
    let config = ConfigManager::new();

    assert_eq!(config.get_shift_policy().unwrap(), ShiftPolicy::default());
    assert_eq!(config.get_window_days().unwrap(), 30);
    assert_eq!(config.get_locale().unwrap(), "en");
    assert!(config.get_include_idle_identities().unwrap());
    assert!(config.source().is_none());
}

#[test]
fn test_invalid_policy_is_rejected() {
    let config = ConfigManager::from_map([
        ("morning_close_start_hour", "15"),
        ("morning_close_end_hour", "12"),
    ]);

    let result = config.get_shift_policy();
    assert!(matches!(result, Err(ImportError::ConfigValueError { .. })));
}

#[test]
fn test_malformed_json_is_config_error() {
    let ws = Workspace::new().unwrap();
    let path = ws.write_file("config.json", "{ not json").unwrap();

    let result = ConfigManager::from_file(&path);
    assert!(matches!(result, Err(ImportError::ConfigReadError { .. })));
}

#[test]
fn test_missing_config_file() {
    let result = ConfigManager::from_file("does/not/exist.json");
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}

#[test]
fn test_load_default_honors_env_var() {
    let ws = Workspace::new().unwrap();
    let path = ws.write_file("env_config.json", r#"{"window_days": 22}"#).unwrap();

    std::env::set_var(CONFIG_PATH_ENV, &path);
    let loaded = ConfigManager::load_default();
    std::env::remove_var(CONFIG_PATH_ENV);

    let config = loaded.unwrap();
    assert_eq!(config.get_window_days().unwrap(), 22);
}

#[test]
fn test_snapshot_reflects_effective_values() {
    let config = ConfigManager::from_map([("window_days", "28"), ("present_threshold_hours", "6")]);

    let snapshot = config.get_config_snapshot().unwrap();

    assert_eq!(snapshot["window_days"], 28);
    assert_eq!(snapshot["shift_policy"]["present_threshold_hours"], 6.0);
    assert_eq!(snapshot["shift_policy"]["evening_start_hour"], 15);
}
