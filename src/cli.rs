//! 命令行参数定义

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// 结果文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Processed_Attendance.csv + Attendance_Analysis.csv
    Csv,
    /// attendance_report.json
    Json,
    /// CSV 与 JSON 都写出
    Both,
}

impl ExportFormat {
    pub fn wants_csv(&self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::Both)
    }

    pub fn wants_json(&self) -> bool {
        matches!(self, ExportFormat::Json | ExportFormat::Both)
    }
}

#[derive(Parser, Debug)]
#[command(name = "punch-attendance")]
#[command(version)]
#[command(about = "Turn punch-clock logs into shifts, worked hours and attendance summaries", long_about = None)]
pub struct Cli {
    /// Punch log exported by the attendance device (.dat)
    #[arg(short = 'p', long = "punches", value_name = "FILE")]
    pub punches: PathBuf,

    /// Employee reference table (.xlsx, .xls or .csv)
    #[arg(short = 'c', long = "codes", value_name = "FILE")]
    pub codes: PathBuf,

    /// Directory for result files
    #[arg(short = 'o', long = "out-dir", value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Result file format
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// JSON config file (overrides PUNCH_ATTENDANCE_CONFIG and the default location)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output language: en, ar or zh-CN (overrides the config value)
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Log filter, e.g. debug or punch_attendance=trace (overrides RUST_LOG)
    #[arg(long = "log-level", value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long = "log-json")]
    pub log_json: bool,
}
