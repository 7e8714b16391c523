// ==========================================
// 考勤打卡分析 - CSV 导出
// ==========================================
// 输出: Processed_Attendance.csv（班次明细）
//       Attendance_Analysis.csv（员工汇总）
// 表头与枚举值按当前 locale 本地化
// ==========================================

use crate::domain::attendance::{AttendanceReport, AttendanceRow, CheckOut, EmployeeSummary};
use crate::export::error::{ExportError, ExportResult};
use crate::i18n::t;
use csv::Writer;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const ATTENDANCE_FILE_NAME: &str = "Processed_Attendance.csv";
pub const SUMMARY_FILE_NAME: &str = "Attendance_Analysis.csv";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

const ATTENDANCE_HEADER_KEYS: &[&str] = &[
    "export.attendance.code",
    "export.attendance.name",
    "export.attendance.date",
    "export.attendance.check_in",
    "export.attendance.check_out",
    "export.attendance.shift",
    "export.attendance.worked_hours",
    "export.attendance.status",
];

const SUMMARY_HEADER_KEYS: &[&str] = &[
    "export.summary.code",
    "export.summary.name",
    "export.summary.days_present",
    "export.summary.days_absent",
    "export.summary.days_single_punch",
];

/// 写出的文件路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExportPaths {
    pub attendance: PathBuf,
    pub summary: PathBuf,
}

pub struct CsvExporter;

impl CsvExporter {
    /// 写出两张表到 out_dir（目录不存在时创建）
    pub fn export(&self, report: &AttendanceReport, out_dir: &Path) -> ExportResult<CsvExportPaths> {
        fs::create_dir_all(out_dir)
            .map_err(|e| ExportError::OutputDirError(format!("{}: {}", out_dir.display(), e)))?;

        let paths = CsvExportPaths {
            attendance: out_dir.join(ATTENDANCE_FILE_NAME),
            summary: out_dir.join(SUMMARY_FILE_NAME),
        };

        self.write_attendance(&report.attendance_rows, fs::File::create(&paths.attendance)?)?;
        self.write_summary(&report.summary_rows, fs::File::create(&paths.summary)?)?;

        info!(
            attendance = %paths.attendance.display(),
            summary = %paths.summary.display(),
            "CSV 导出完成"
        );
        Ok(paths)
    }

    /// 班次明细
    pub fn write_attendance<W: Write>(&self, rows: &[AttendanceRow], writer: W) -> ExportResult<()> {
        let mut wtr = Writer::from_writer(writer);
        wtr.write_record(localized(ATTENDANCE_HEADER_KEYS))?;

        for row in rows {
            let shift = &row.shift;
            let check_out = match shift.check_out {
                CheckOut::Recorded(ts) => ts.format(TIME_FORMAT).to_string(),
                CheckOut::NotRecorded => t("attendance.not_recorded"),
            };

            wtr.write_record([
                shift.employee_code.to_string(),
                row.name.clone(),
                shift.date.format(DATE_FORMAT).to_string(),
                shift.check_in.format(TIME_FORMAT).to_string(),
                check_out,
                t(shift.shift_kind.label_key()),
                format!("{:.2}", shift.worked_hours),
                t(shift.status.label_key()),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// 员工汇总
    pub fn write_summary<W: Write>(&self, rows: &[EmployeeSummary], writer: W) -> ExportResult<()> {
        let mut wtr = Writer::from_writer(writer);
        wtr.write_record(localized(SUMMARY_HEADER_KEYS))?;

        for summary in rows {
            wtr.write_record([
                summary.employee_code.to_string(),
                summary.name.clone(),
                summary.days_present.to_string(),
                summary.days_absent.to_string(),
                summary.days_single_punch.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

fn localized(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|key| t(key)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attendance::ShiftRecord;
    use crate::domain::types::{AttendanceStatus, ShiftKind};
    use crate::i18n::{set_locale, LOCALE_TEST_LOCK};
    use chrono::NaiveDate;

    fn row(closed: bool) -> AttendanceRow {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        AttendanceRow {
            name: "Ahmed".to_string(),
            shift: ShiftRecord {
                employee_code: 100,
                date,
                check_in: date.and_hms_opt(8, 0, 0).unwrap(),
                check_out: if closed {
                    CheckOut::Recorded(date.and_hms_opt(16, 30, 0).unwrap())
                } else {
                    CheckOut::NotRecorded
                },
                shift_kind: ShiftKind::Morning,
                worked_hours: if closed { 8.5 } else { 0.0 },
                status: if closed {
                    AttendanceStatus::Present
                } else {
                    AttendanceStatus::Absent
                },
            },
        }
    }

    #[test]
    fn test_write_attendance_english() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_locale("en");

        let mut buf = Vec::new();
        CsvExporter.write_attendance(&[row(true), row(false)], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Code,Name,Date,Check-in,Check-out,Shift,Worked Hours,Status"
        );
        assert_eq!(lines[1], "100,Ahmed,2025-01-05,08:00:00,16:30:00,Morning,8.50,Present");
        assert_eq!(lines[2], "100,Ahmed,2025-01-05,08:00:00,not recorded,Morning,0.00,Absent");
    }

    #[test]
    fn test_write_summary_arabic_headers() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_locale("ar");

        let summary = EmployeeSummary {
            employee_code: 100,
            name: "أحمد".to_string(),
            days_present: 21,
            days_absent: 9,
            days_single_punch: 1,
        };
        let mut buf = Vec::new();
        let result = CsvExporter.write_summary(&[summary], &mut buf);
        set_locale("en");
        result.unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("الكود,الاسم"));
        assert_eq!(lines[1], "100,أحمد,21,9,1");
    }
}
