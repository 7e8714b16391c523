// ==========================================
// 考勤打卡分析 - 领域类型定义
// ==========================================
// 班次类型 / 出勤状态
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 班次类型 (Shift Kind)
// ==========================================
// 由开班打卡的小时数判定（阈值见 ShiftPolicy）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftKind {
    Morning, // 早班
    Evening, // 晚班（可跨零点）
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftKind::Morning => write!(f, "MORNING"),
            ShiftKind::Evening => write!(f, "EVENING"),
        }
    }
}

impl ShiftKind {
    /// i18n 键（导出/展示用）
    pub fn label_key(&self) -> &'static str {
        match self {
            ShiftKind::Morning => "shift.morning",
            ShiftKind::Evening => "shift.evening",
        }
    }
}

// ==========================================
// 出勤状态 (Attendance Status)
// ==========================================
// 红线: 工时 >= 阈值 才算出勤，缺卡一律缺勤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Present, // 出勤
    Absent,  // 缺勤
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "PRESENT"),
            AttendanceStatus::Absent => write!(f, "ABSENT"),
        }
    }
}

impl AttendanceStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "status.present",
            AttendanceStatus::Absent => "status.absent",
        }
    }
}
