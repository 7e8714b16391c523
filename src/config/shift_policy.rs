// ==========================================
// 考勤打卡分析 - 班次边界策略
// ==========================================
// 职责: 班次判定/收班窗口/出勤阈值等启发式参数
// 红线: 分组算法只通过本对象读取小时阈值，不得硬编码
// ==========================================

use crate::domain::types::{AttendanceStatus, ShiftKind};
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// 晚班起始小时（>= 该小时开班即为晚班）
pub const DEFAULT_EVENING_START_HOUR: u32 = 15;

/// 早班收班窗口 [start, end)
pub const DEFAULT_MORNING_CLOSE_START_HOUR: u32 = 12;
pub const DEFAULT_MORNING_CLOSE_END_HOUR: u32 = 15;

/// 晚班同日收班须早于该小时（即零点之后）
pub const DEFAULT_EVENING_CLOSE_BEFORE_HOUR: u32 = 5;

/// 工时 >= 该值判定为出勤
pub const DEFAULT_PRESENT_THRESHOLD_HOURS: f64 = 8.0;

// ==========================================
// ShiftPolicy
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftPolicy {
    #[serde(default = "default_evening_start_hour")]
    pub evening_start_hour: u32,

    #[serde(default = "default_morning_close_start_hour")]
    pub morning_close_start_hour: u32,

    #[serde(default = "default_morning_close_end_hour")]
    pub morning_close_end_hour: u32,

    #[serde(default = "default_evening_close_before_hour")]
    pub evening_close_before_hour: u32,

    #[serde(default = "default_present_threshold_hours")]
    pub present_threshold_hours: f64,
}

fn default_evening_start_hour() -> u32 {
    DEFAULT_EVENING_START_HOUR
}

fn default_morning_close_start_hour() -> u32 {
    DEFAULT_MORNING_CLOSE_START_HOUR
}

fn default_morning_close_end_hour() -> u32 {
    DEFAULT_MORNING_CLOSE_END_HOUR
}

fn default_evening_close_before_hour() -> u32 {
    DEFAULT_EVENING_CLOSE_BEFORE_HOUR
}

fn default_present_threshold_hours() -> f64 {
    DEFAULT_PRESENT_THRESHOLD_HOURS
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        Self {
            evening_start_hour: DEFAULT_EVENING_START_HOUR,
            morning_close_start_hour: DEFAULT_MORNING_CLOSE_START_HOUR,
            morning_close_end_hour: DEFAULT_MORNING_CLOSE_END_HOUR,
            evening_close_before_hour: DEFAULT_EVENING_CLOSE_BEFORE_HOUR,
            present_threshold_hours: DEFAULT_PRESENT_THRESHOLD_HOURS,
        }
    }
}

impl ShiftPolicy {
    /// 按开班打卡的小时数判定班次
    pub fn classify(&self, punch: &NaiveDateTime) -> ShiftKind {
        if punch.hour() < self.evening_start_hour {
            ShiftKind::Morning
        } else {
            ShiftKind::Evening
        }
    }

    /// 是否落在早班收班窗口内（调用方保证同一自然日）
    pub fn in_morning_close_window(&self, candidate: &NaiveDateTime) -> bool {
        let hour = candidate.hour();
        hour >= self.morning_close_start_hour && hour < self.morning_close_end_hour
    }

    /// 早班晚退：窗口内没有打卡时，窗口起点之后的同日打卡也可收班
    pub fn is_late_morning_checkout(&self, candidate: &NaiveDateTime) -> bool {
        candidate.hour() >= self.morning_close_start_hour
    }

    /// 该打卡是否开启一个跨零点的晚班（次日凌晨的下一打卡即其收班）
    ///
    /// 早班晚退查找不得越过这样的打卡
    pub fn opens_overnight_shift(&self, candidate: &NaiveDateTime, next: &NaiveDateTime) -> bool {
        self.classify(candidate) == ShiftKind::Evening
            && candidate.date().succ_opt() == Some(next.date())
            && next.hour() < self.evening_close_before_hour
    }

    /// 晚班收班：跨日打卡，或同日且早于 evening_close_before_hour
    pub fn is_evening_close(&self, open: &NaiveDateTime, candidate: &NaiveDateTime) -> bool {
        candidate.date() != open.date() || candidate.hour() < self.evening_close_before_hour
    }

    pub fn status_for(&self, worked_hours: f64) -> AttendanceStatus {
        if worked_hours >= self.present_threshold_hours {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Absent
        }
    }

    /// 参数自洽检查；不通过时返回说明
    pub fn validate(&self) -> Result<(), String> {
        if self.evening_start_hour > 24 {
            return Err(format!("evening_start_hour 超出范围: {}", self.evening_start_hour));
        }
        if self.morning_close_start_hour >= self.morning_close_end_hour {
            return Err(format!(
                "早班收班窗口无效: [{}, {})",
                self.morning_close_start_hour, self.morning_close_end_hour
            ));
        }
        if self.evening_close_before_hour > 24 {
            return Err(format!(
                "evening_close_before_hour 超出范围: {}",
                self.evening_close_before_hour
            ));
        }
        if !self.present_threshold_hours.is_finite() || self.present_threshold_hours < 0.0 {
            return Err(format!(
                "present_threshold_hours 无效: {}",
                self.present_threshold_hours
            ));
        }
        Ok(())
    }
}
