// ==========================================
// AttendanceAnalyzer 集成测试
// ==========================================
// 测试目标: 文件 → 报告 的完整流程
// ==========================================


use punch_attendance::config::{config_keys, ConfigManager};
use punch_attendance::domain::{AttendanceStatus, CheckOut, ShiftKind, UNKNOWN_EMPLOYEE};
use punch_attendance::importer::ImportError;
use punch_attendance::logging;
use punch_attendance::AttendanceAnalyzer;
use std::sync::Arc;
use test_helpers::{at, Workspace};

fn default_analyzer() -> AttendanceAnalyzer<ConfigManager> {
    AttendanceAnalyzer::new(Arc::new(ConfigManager::new()))
}

#[test]
fn test_end_to_end_with_english_headers() {
    logging::init_test();
    let ws = Workspace::new().unwrap();

    let punches = ws
        .write_punches(&[
            (100, at(5, 8, 0)),
            (100, at(5, 16, 30)),
            (100, at(6, 9, 0)),
            (200, at(1, 16, 0)),
            (200, at(2, 0, 30)),
        ])
        .unwrap();
    let codes = ws
        .write_codes_csv(
            &["Emp Code", "Employee Name", "Department"],
            &[&["100", "Ahmed", "IT"], &["200", "Sara", "HR"], &["300", "Omar", "HR"]],
        )
        .unwrap();

    let report = default_analyzer().analyze_files(&punches, &codes).unwrap();

    // 明细
    assert_eq!(report.attendance_rows.len(), 3);
    let first = &report.attendance_rows[0];
    assert_eq!(first.name, "Ahmed");
    assert_eq!(first.shift.shift_kind, ShiftKind::Morning);
    assert_eq!(first.shift.worked_hours, 8.5);
    assert_eq!(first.shift.status, AttendanceStatus::Present);

    let single = &report.attendance_rows[1];
    assert_eq!(single.shift.check_out, CheckOut::NotRecorded);
    assert_eq!(single.shift.status, AttendanceStatus::Absent);

    let evening = &report.attendance_rows[2];
    assert_eq!(evening.name, "Sara");
    assert_eq!(evening.shift.shift_kind, ShiftKind::Evening);
    assert_eq!(evening.shift.date, at(1, 0, 0).date());

    // 汇总
    let ahmed = &report.summary_rows[0];
    assert_eq!(ahmed.days_present, 2);
    assert_eq!(ahmed.days_absent, 28);
    assert_eq!(ahmed.days_single_punch, 1);

    let omar = report
        .summary_rows
        .iter()
        .find(|s| s.employee_code == 300)
        .unwrap();
    assert_eq!(omar.days_present, 0);
    assert_eq!(omar.days_absent, 30);
    assert!(report.attendance_rows.iter().all(|r| r.shift.employee_code != 300));

    assert_eq!(report.totals.total_present_days, 3);
    assert_eq!(report.totals.employees_with_single_punch, 1);
    assert_eq!(report.punch_stats.parsed, 5);
    assert_eq!(report.identity_stats.total_rows, 3);
}

#[test]
fn test_arabic_headers_and_unknown_employee() {
    let ws = Workspace::new().unwrap();

    let punches = ws
        .write_punches(&[(100, at(5, 8, 0)), (100, at(5, 13, 0)), (555, at(5, 9, 0))])
        .unwrap();
    let codes = ws
        .write_codes_csv(&["الكود", "الاسم"], &[&["100", "أحمد"]])
        .unwrap();

    let report = default_analyzer().analyze_files(&punches, &codes).unwrap();

    assert_eq!(report.attendance_rows[0].name, "أحمد");
    assert_eq!(report.attendance_rows[0].shift.worked_hours, 5.0);
    assert_eq!(report.attendance_rows[0].shift.status, AttendanceStatus::Absent);
    assert_eq!(report.attendance_rows[1].name, UNKNOWN_EMPLOYEE);
}

#[test]
fn test_missing_columns_fails_with_schema_error() {
    let ws = Workspace::new().unwrap();

    let punches = ws.write_punches(&[(100, at(5, 8, 0))]).unwrap();
    let codes = ws
        .write_codes_csv(&["Department", "Title"], &[&["IT", "Engineer"]])
        .unwrap();

    let err = default_analyzer().analyze_files(&punches, &codes).unwrap_err();

    assert!(err.is_schema_error());
    match err {
        ImportError::SchemaError { missing, .. } => assert_eq!(missing, vec!["code", "name"]),
        other => panic!("expected SchemaError, got {:?}", other),
    }
}

#[test]
fn test_schema_error_reported_even_when_punch_file_missing() {
    let ws = Workspace::new().unwrap();
    let codes = ws.write_codes_csv(&["Dept"], &[&["IT"]]).unwrap();

    let err = default_analyzer()
        .analyze_files(ws.path().join("missing.dat"), &codes)
        .unwrap_err();

    assert!(err.is_schema_error());
}

#[test]
fn test_malformed_punch_lines_are_counted() {
    let ws = Workspace::new().unwrap();
    let punches = ws
        .write_file(
            "punches.dat",
            "100 2025-01-05 08:00:00\n\
             100 2025-01-05\n\
             XYZ 2025-01-05 09:00:00\n\
             100 2025-01-05 16:30:00\n",
        )
        .unwrap();
    let codes = ws.write_codes_csv(&["Code", "Name"], &[&["100", "Ahmed"]]).unwrap();

    let report = default_analyzer().analyze_files(&punches, &codes).unwrap();

    assert_eq!(report.punch_stats.parsed, 2);
    assert_eq!(report.punch_stats.dropped(), 2);
    assert_eq!(report.attendance_rows.len(), 1);
}

#[test]
fn test_configured_window_and_chinese_headers() {
    let ws = Workspace::new().unwrap();
    let punches = ws.write_punches(&[(7, at(3, 8, 0)), (7, at(3, 16, 0))]).unwrap();
    let codes = ws.write_codes_csv(&["员工工号", "姓名"], &[&["7", "张三"]]).unwrap();

    let config = ConfigManager::from_map([
        (config_keys::HEADER_LOCALES, "zh-CN"),
        (config_keys::WINDOW_DAYS, "31"),
    ]);
    let report = AttendanceAnalyzer::new(Arc::new(config))
        .analyze_files(&punches, &codes)
        .unwrap();

    assert_eq!(report.window_days, 31);
    assert_eq!(report.summary_rows[0].name, "张三");
    assert_eq!(report.summary_rows[0].days_absent, 30);
    assert_eq!(report.config_snapshot["window_days"], 31);
}
