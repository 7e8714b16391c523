// ==========================================
// 考勤打卡分析 - 考勤结果模型
// ==========================================
// ShiftRecord: 每人每班次一条（分组引擎输出）
// EmployeeSummary: 每人一条（汇总引擎输出）
// AttendanceReport: 一次运行的完整结果集
// ==========================================

use crate::domain::identity::IdentityParseStats;
use crate::domain::punch::{EmployeeCode, PunchParseStats};
use crate::domain::types::{AttendanceStatus, ShiftKind};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// CheckOut - 下班打卡
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOut {
    Recorded(NaiveDateTime),
    NotRecorded, // 缺卡
}

impl CheckOut {
    pub fn is_recorded(&self) -> bool {
        matches!(self, CheckOut::Recorded(_))
    }

    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            CheckOut::Recorded(ts) => Some(*ts),
            CheckOut::NotRecorded => None,
        }
    }
}

// ==========================================
// ShiftRecord - 班次记录
// ==========================================
// date 始终取开班打卡的自然日（跨零点的晚班不回溯）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub employee_code: EmployeeCode,
    pub date: NaiveDate,
    pub check_in: NaiveDateTime,
    pub check_out: CheckOut,
    pub shift_kind: ShiftKind,
    pub worked_hours: f64, // >= 0，两位小数
    pub status: AttendanceStatus,
}

impl ShiftRecord {
    pub fn is_single_punch(&self) -> bool {
        !self.check_out.is_recorded()
    }
}

// ==========================================
// AttendanceRow - 明细行（带姓名）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRow {
    pub name: String,
    #[serde(flatten)]
    pub shift: ShiftRecord,
}

// ==========================================
// EmployeeSummary - 员工汇总
// ==========================================
// days_absent = window_days - days_present（固定窗口口径，可为负）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub employee_code: EmployeeCode,
    pub name: String,
    pub days_present: u32,
    pub days_absent: i64,
    pub days_single_punch: u32,
}

// ==========================================
// AttendanceTotals - 全员合计
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceTotals {
    pub total_present_days: u64,
    pub total_absent_days: i64,
    pub total_single_punch_days: u64,
    pub employees_with_single_punch: usize,

    // 按明细行状态计数
    pub present_shifts: usize,
    pub absent_shifts: usize,
}

// ==========================================
// AttendanceReport - 运行结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceReport {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub window_days: i64,
    pub attendance_rows: Vec<AttendanceRow>,
    pub summary_rows: Vec<EmployeeSummary>,
    pub totals: AttendanceTotals,
    pub daily_counts: BTreeMap<NaiveDate, usize>, // 每日明细行数
    pub punch_stats: PunchParseStats,
    pub identity_stats: IdentityParseStats,
    pub config_snapshot: serde_json::Value,
}
