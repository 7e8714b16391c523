// ==========================================
// 考勤打卡分析 - 考勤汇总引擎
// ==========================================
// 职责: 班次记录 → 员工汇总 / 全员合计 / 每日计数
// 口径: 出勤天数 = 有记录的不同日期数（不看 status）
// 口径: 缺勤天数 = 固定窗口 - 出勤天数（可为负）
// ==========================================

use crate::domain::attendance::{AttendanceTotals, EmployeeSummary, ShiftRecord};
use crate::domain::punch::EmployeeCode;
use crate::domain::types::AttendanceStatus;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

pub struct AttendanceAggregator {
    window_days: i64,
}

impl AttendanceAggregator {
    pub fn new(window_days: i64) -> Self {
        Self { window_days }
    }

    /// 单个员工汇总
    ///
    /// # 参数
    /// - records: 该员工的全部班次记录
    pub fn summarize(
        &self,
        employee_code: EmployeeCode,
        name: &str,
        records: &[ShiftRecord],
    ) -> EmployeeSummary {
        let present_dates: BTreeSet<NaiveDate> = records.iter().map(|r| r.date).collect();
        let single_punch_dates: BTreeSet<NaiveDate> = records
            .iter()
            .filter(|r| r.is_single_punch())
            .map(|r| r.date)
            .collect();

        let days_present = present_dates.len() as u32;

        EmployeeSummary {
            employee_code,
            name: name.to_string(),
            days_present,
            days_absent: self.window_days - i64::from(days_present),
            days_single_punch: single_punch_dates.len() as u32,
        }
    }

    /// 对照表中有、打卡日志中无的员工
    pub fn summarize_idle(&self, employee_code: EmployeeCode, name: &str) -> EmployeeSummary {
        self.summarize(employee_code, name, &[])
    }

    /// 全员合计
    pub fn totals(&self, summaries: &[EmployeeSummary], records: &[ShiftRecord]) -> AttendanceTotals {
        let present_shifts = records
            .iter()
            .filter(|r| r.status == AttendanceStatus::Present)
            .count();

        AttendanceTotals {
            total_present_days: summaries.iter().map(|s| u64::from(s.days_present)).sum(),
            total_absent_days: summaries.iter().map(|s| s.days_absent).sum(),
            total_single_punch_days: summaries
                .iter()
                .map(|s| u64::from(s.days_single_punch))
                .sum(),
            employees_with_single_punch: summaries
                .iter()
                .filter(|s| s.days_single_punch > 0)
                .count(),
            present_shifts,
            absent_shifts: records.len() - present_shifts,
        }
    }

    /// 每日明细行数
    pub fn daily_counts(&self, records: &[ShiftRecord]) -> BTreeMap<NaiveDate, usize> {
        let mut counts = BTreeMap::new();
        for record in records {
            *counts.entry(record.date).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attendance::CheckOut;
    use crate::domain::types::ShiftKind;

    fn record(day: u32, closed: bool, hours: f64) -> ShiftRecord {
        let date = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
        let check_in = date.and_hms_opt(8, 0, 0).unwrap();
        ShiftRecord {
            employee_code: 100,
            date,
            check_in,
            check_out: if closed {
                CheckOut::Recorded(date.and_hms_opt(16, 0, 0).unwrap())
            } else {
                CheckOut::NotRecorded
            },
            shift_kind: ShiftKind::Morning,
            worked_hours: hours,
            status: if hours >= 8.0 {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::Absent
            },
        }
    }

    #[test]
    fn test_summary_counts_distinct_dates() {
        let aggregator = AttendanceAggregator::new(30);
        let records: Vec<ShiftRecord> = (1..=20)
            .map(|day| record(day, true, 8.0))
            .chain([record(21, false, 0.0), record(21, false, 0.0)])
            .collect();

        let summary = aggregator.summarize(100, "Ahmed", &records);

        assert_eq!(summary.days_present, 21);
        assert_eq!(summary.days_absent, 9);
        assert_eq!(summary.days_single_punch, 1);
        assert!(summary.days_single_punch <= summary.days_present);
    }

    #[test]
    fn test_absent_days_can_go_negative() {
        let aggregator = AttendanceAggregator::new(30);
        let records: Vec<ShiftRecord> = (1..=31).map(|day| record(day, true, 9.0)).collect();

        let summary = aggregator.summarize(100, "Ahmed", &records);

        assert_eq!(summary.days_present, 31);
        assert_eq!(summary.days_absent, -1);
    }

    #[test]
    fn test_idle_summary() {
        let summary = AttendanceAggregator::new(30).summarize_idle(7, "Sara");
        assert_eq!(summary.days_present, 0);
        assert_eq!(summary.days_absent, 30);
        assert_eq!(summary.days_single_punch, 0);
    }

    #[test]
    fn test_totals_and_daily_counts() {
        let aggregator = AttendanceAggregator::new(30);
        let records = vec![record(1, true, 8.5), record(1, false, 0.0), record(2, true, 5.0)];
        let summaries = vec![
            aggregator.summarize(100, "Ahmed", &records),
            aggregator.summarize_idle(200, "Sara"),
        ];

        let totals = aggregator.totals(&summaries, &records);

        assert_eq!(totals.total_present_days, 2);
        assert_eq!(totals.total_absent_days, 28 + 30);
        assert_eq!(totals.total_single_punch_days, 1);
        assert_eq!(totals.employees_with_single_punch, 1);
        assert_eq!(totals.present_shifts, 1);
        assert_eq!(totals.absent_shifts, 2);

        let daily = aggregator.daily_counts(&records);
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[&NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()], 2);
    }
}
