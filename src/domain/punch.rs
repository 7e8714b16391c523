// ==========================================
// 考勤打卡分析 - 打卡事件模型
// ==========================================
// 来源: 考勤机导出的 .dat 文本，每行一条打卡
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 员工工号（考勤机内的数字编号）
pub type EmployeeCode = i64;

// ==========================================
// PunchEvent - 单次打卡
// ==========================================
// 解析后不可变；精度到秒，不做时区换算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PunchEvent {
    pub employee_code: EmployeeCode,
    pub timestamp: NaiveDateTime,
}

impl PunchEvent {
    pub fn new(employee_code: EmployeeCode, timestamp: NaiveDateTime) -> Self {
        Self {
            employee_code,
            timestamp,
        }
    }
}

// ==========================================
// PunchParseStats - 打卡日志解析统计
// ==========================================
// 丢弃的行只计数，不单独上报
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchParseStats {
    pub total_lines: usize,   // 非空行数
    pub parsed: usize,        // 成功解析
    pub too_few_fields: usize, // 字段不足 3 个
    pub bad_code: usize,      // 工号无法解析
    pub bad_timestamp: usize, // 日期/时间无法解析
}

impl PunchParseStats {
    /// 被丢弃的行数
    pub fn dropped(&self) -> usize {
        self.too_few_fields + self.bad_code + self.bad_timestamp
    }
}

// ==========================================
// ParsedPunches - 解析结果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ParsedPunches {
    pub events: Vec<PunchEvent>,
    pub stats: PunchParseStats,
}
