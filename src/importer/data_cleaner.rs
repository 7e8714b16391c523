// ==========================================
// 考勤打卡分析 - 数据清洗器
// ==========================================
// 职责: TRIM / NULL 标准化 / 宽松整数解析 / 打卡日期时间解析
// ==========================================

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// 打卡日期可接受格式
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// 打卡时间可接受格式
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

pub struct DataCleaner;

impl DataCleaner {
    /// 空白串视为缺失
    pub fn normalize_null(&self, value: Option<&str>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 宽松整数解析：取开头的整数部分（"100.0" → 100，"12abc" → 12）
    ///
    /// 开头不是数字（可带正负号）或溢出时返回 None
    pub fn parse_leading_integer(&self, value: &str) -> Option<i64> {
        let trimmed = value.trim_start();
        let (sign_len, digits_from) = match trimmed.as_bytes().first() {
            Some(b'+') | Some(b'-') => (1, 1),
            _ => (0, 0),
        };

        let digit_len = trimmed[digits_from..]
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digit_len == 0 {
            return None;
        }

        trimmed[..sign_len + digit_len].parse::<i64>().ok()
    }

    pub fn parse_punch_date(&self, token: &str) -> Option<NaiveDate> {
        let token = token.trim();
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
    }

    pub fn parse_punch_time(&self, token: &str) -> Option<NaiveTime> {
        let token = token.trim();
        TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(token, fmt).ok())
    }

    /// 日期 + 时间 → 打卡时刻（秒精度）
    pub fn parse_punch_timestamp(&self, date_token: &str, time_token: &str) -> Option<NaiveDateTime> {
        let date = self.parse_punch_date(date_token)?;
        let time = self.parse_punch_time(time_token)?;
        Some(date.and_time(time))
    }
}
