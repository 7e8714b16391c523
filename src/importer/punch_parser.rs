// ==========================================
// 考勤打卡分析 - 打卡日志解析器
// ==========================================
// 输入: 考勤机导出的 .dat 文本
// 行格式: <工号> <日期> <时间> [其他字段...]（空白分隔）
// 红线: 坏行只丢弃并计数，不中止解析
// ==========================================

use crate::domain::punch::{ParsedPunches, PunchEvent, PunchParseStats};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

/// 一行至少需要的字段数
pub const MIN_FIELDS: usize = 3;

pub struct PunchLogParser {
    cleaner: DataCleaner,
}

impl Default for PunchLogParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PunchLogParser {
    pub fn new() -> Self {
        Self {
            cleaner: DataCleaner,
        }
    }

    /// 读取并解析打卡文件
    #[instrument(skip(self, file_path), fields(path = %file_path.as_ref().display()))]
    pub fn parse_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ParsedPunches> {
        let path = file_path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 考勤机导出偶有非 UTF-8 字节，按有损方式读取
        let bytes = fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes);

        let parsed = self.parse_str(&content);
        info!(
            total_lines = parsed.stats.total_lines,
            parsed = parsed.stats.parsed,
            dropped = parsed.stats.dropped(),
            "打卡日志解析完成"
        );
        Ok(parsed)
    }

    /// 解析打卡文本
    pub fn parse_str(&self, content: &str) -> ParsedPunches {
        let mut stats = PunchParseStats::default();
        let mut events = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            stats.total_lines += 1;

            match self.parse_line(trimmed) {
                Ok(event) => {
                    stats.parsed += 1;
                    events.push(event);
                }
                Err(reason) => {
                    debug!(line_number = idx + 1, reason = reason.as_str(), "丢弃打卡行");
                    match reason {
                        LineRejection::TooFewFields => stats.too_few_fields += 1,
                        LineRejection::BadCode => stats.bad_code += 1,
                        LineRejection::BadTimestamp => stats.bad_timestamp += 1,
                    }
                }
            }
        }

        ParsedPunches { events, stats }
    }

    /// 解析单行（已 trim）
    pub fn parse_line(&self, line: &str) -> Result<PunchEvent, LineRejection> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < MIN_FIELDS {
            return Err(LineRejection::TooFewFields);
        }

        let employee_code = self
            .cleaner
            .parse_leading_integer(parts[0])
            .ok_or(LineRejection::BadCode)?;

        let timestamp = self
            .cleaner
            .parse_punch_timestamp(parts[1], parts[2])
            .ok_or(LineRejection::BadTimestamp)?;

        Ok(PunchEvent::new(employee_code, timestamp))
    }
}

// ==========================================
// LineRejection - 坏行原因
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRejection {
    TooFewFields,
    BadCode,
    BadTimestamp,
}

impl LineRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineRejection::TooFewFields => "too_few_fields",
            LineRejection::BadCode => "bad_code",
            LineRejection::BadTimestamp => "bad_timestamp",
        }
    }
}
