// ==========================================
// 考勤打卡分析 - 导出层
// ==========================================
// 职责: AttendanceReport → CSV / JSON 文件
// ==========================================

pub mod csv_exporter;
pub mod error;
pub mod json_exporter;

pub use csv_exporter::{CsvExportPaths, CsvExporter, ATTENDANCE_FILE_NAME, SUMMARY_FILE_NAME};
pub use error::{ExportError, ExportResult};
pub use json_exporter::{JsonExporter, REPORT_FILE_NAME};
