// ==========================================
// 考勤打卡分析 - JSON 导出
// ==========================================
// 输出: 完整 AttendanceReport（含运行号与配置快照）
// ==========================================

use crate::domain::attendance::AttendanceReport;
use crate::export::error::{ExportError, ExportResult};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const REPORT_FILE_NAME: &str = "attendance_report.json";

pub struct JsonExporter;

impl JsonExporter {
    pub fn export(&self, report: &AttendanceReport, out_dir: &Path) -> ExportResult<PathBuf> {
        fs::create_dir_all(out_dir)
            .map_err(|e| ExportError::OutputDirError(format!("{}: {}", out_dir.display(), e)))?;

        let path = out_dir.join(REPORT_FILE_NAME);
        let mut writer = BufWriter::new(fs::File::create(&path)?);
        self.write(report, &mut writer)?;
        writer.flush()?;

        info!(path = %path.display(), run_id = %report.run_id, "JSON 报告导出完成");
        Ok(path)
    }

    pub fn write<W: Write>(&self, report: &AttendanceReport, writer: W) -> ExportResult<()> {
        serde_json::to_writer_pretty(writer, report)?;
        Ok(())
    }
}
