// ==========================================
// 考勤打卡分析 - 打卡分组引擎
// ==========================================
// 职责: 按员工分组 → 按时间排序 → 游标扫描切分班次
// 输入: PunchEvent 列表
// 输出: 每员工的 ShiftRecord 列表 + 缺卡日期
// ==========================================
// 红线: 游标是对不可变有序切片的下标，每一步返回新位置
// 红线: 一个打卡最多被一个班次消费（开班或收班）
// ==========================================

use crate::config::shift_policy::ShiftPolicy;
use crate::domain::attendance::{CheckOut, ShiftRecord};
use crate::domain::punch::{EmployeeCode, PunchEvent};
use crate::domain::types::{AttendanceStatus, ShiftKind};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::{debug, instrument};

// ==========================================
// EmployeeShifts - 单个员工的分组结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeShifts {
    pub employee_code: EmployeeCode,
    pub records: Vec<ShiftRecord>,
    pub single_punch_dates: BTreeSet<NaiveDate>, // 有缺卡班次的日期
}

// ==========================================
// ScanStep - 单步扫描结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
enum ScanStep {
    /// 同日同类班次已收班，当前打卡视为重复/游离
    Skipped { next: usize },
    /// 找到收班打卡，游标越过收班打卡
    Closed { record: ShiftRecord, next: usize },
    /// 无收班打卡，只消费开班打卡
    Unclosed { record: ShiftRecord, next: usize },
}

impl ScanStep {
    fn next(&self) -> usize {
        match self {
            ScanStep::Skipped { next }
            | ScanStep::Closed { next, .. }
            | ScanStep::Unclosed { next, .. } => *next,
        }
    }
}

/// 已收班的 (日期, 班次) 集合
type ClosedShifts = HashSet<(NaiveDate, ShiftKind)>;

// ==========================================
// PunchGrouper - 打卡分组引擎
// ==========================================
pub struct PunchGrouper {
    policy: ShiftPolicy,
}

impl PunchGrouper {
    pub fn new(policy: ShiftPolicy) -> Self {
        Self { policy }
    }

    /// 按员工分组，组内按时间升序
    pub fn group_by_employee(
        &self,
        punches: &[PunchEvent],
    ) -> BTreeMap<EmployeeCode, Vec<NaiveDateTime>> {
        let mut grouped: BTreeMap<EmployeeCode, Vec<NaiveDateTime>> = BTreeMap::new();
        for punch in punches {
            grouped
                .entry(punch.employee_code)
                .or_default()
                .push(punch.timestamp);
        }
        for timestamps in grouped.values_mut() {
            timestamps.sort_unstable();
        }
        grouped
    }

    /// 全量分组（按工号升序输出）
    #[instrument(skip(self, punches), fields(punches = punches.len()))]
    pub fn group(&self, punches: &[PunchEvent]) -> Vec<EmployeeShifts> {
        let grouped = self.group_by_employee(punches);
        debug!(employees = grouped.len(), "打卡分组完成");

        grouped
            .iter()
            .map(|(&code, timestamps)| self.segment_employee(code, timestamps))
            .collect()
    }

    /// 对单个员工的有序打卡切分班次
    ///
    /// # 参数
    /// - sorted: 已按时间升序排列的打卡时刻（由 group_by_employee 保证）
    fn segment_employee(
        &self,
        employee_code: EmployeeCode,
        sorted: &[NaiveDateTime],
    ) -> EmployeeShifts {
        debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let mut records = Vec::new();
        let mut single_punch_dates = BTreeSet::new();
        let mut closed = ClosedShifts::new();

        let mut cursor = 0;
        while cursor < sorted.len() {
            let step = self.step(employee_code, sorted, cursor, &closed);
            cursor = step.next();

            match step {
                ScanStep::Skipped { .. } => {}
                ScanStep::Closed { record, .. } => {
                    closed.insert((record.date, record.shift_kind));
                    records.push(record);
                }
                ScanStep::Unclosed { record, .. } => {
                    single_punch_dates.insert(record.date);
                    records.push(record);
                }
            }
        }

        debug!(
            employee_code,
            shifts = records.len(),
            single_punch_days = single_punch_dates.len(),
            "班次切分完成"
        );

        EmployeeShifts {
            employee_code,
            records,
            single_punch_dates,
        }
    }

    /// 从 cursor 处的开班打卡走一步（cursor < sorted.len()）
    fn step(
        &self,
        employee_code: EmployeeCode,
        sorted: &[NaiveDateTime],
        cursor: usize,
        closed: &ClosedShifts,
    ) -> ScanStep {
        let open = sorted[cursor];
        let date = open.date();
        let shift_kind = self.policy.classify(&open);

        if closed.contains(&(date, shift_kind)) {
            return ScanStep::Skipped { next: cursor + 1 };
        }

        match self.find_close(sorted, cursor, shift_kind) {
            Some(close_idx) => {
                let close = sorted[close_idx];
                let hours = worked_hours(&open, &close);
                ScanStep::Closed {
                    record: ShiftRecord {
                        employee_code,
                        date,
                        check_in: open,
                        check_out: CheckOut::Recorded(close),
                        shift_kind,
                        worked_hours: hours,
                        status: self.policy.status_for(hours),
                    },
                    next: close_idx + 1,
                }
            }
            None => ScanStep::Unclosed {
                record: ShiftRecord {
                    employee_code,
                    date,
                    check_in: open,
                    check_out: CheckOut::NotRecorded,
                    shift_kind,
                    worked_hours: 0.0,
                    status: AttendanceStatus::Absent,
                },
                next: cursor + 1,
            },
        }
    }

    /// 查找收班打卡的下标
    fn find_close(&self, sorted: &[NaiveDateTime], open_idx: usize, kind: ShiftKind) -> Option<usize> {
        match kind {
            ShiftKind::Morning => self.find_morning_close(sorted, open_idx),
            ShiftKind::Evening => self.find_evening_close(sorted, open_idx),
        }
    }

    /// 早班: 同日第一个落在收班窗口的打卡；窗口内没有时取同日最后一个晚退打卡
    ///
    /// 晚退查找止于下一个跨零点晚班的开班打卡
    fn find_morning_close(&self, sorted: &[NaiveDateTime], open_idx: usize) -> Option<usize> {
        let day = sorted[open_idx].date();
        let mut late_checkout = None;

        for (idx, candidate) in sorted.iter().enumerate().skip(open_idx + 1) {
            if candidate.date() != day {
                break;
            }
            if self.policy.in_morning_close_window(candidate) {
                return Some(idx);
            }
            if self.policy.is_late_morning_checkout(candidate) {
                let opens_night = sorted
                    .get(idx + 1)
                    .is_some_and(|next| self.policy.opens_overnight_shift(candidate, next));
                if opens_night {
                    break;
                }
                late_checkout = Some(idx);
            }
        }

        late_checkout
    }

    /// 晚班: 之后第一个跨日（或同日凌晨）的打卡
    fn find_evening_close(&self, sorted: &[NaiveDateTime], open_idx: usize) -> Option<usize> {
        let open = &sorted[open_idx];
        sorted
            .iter()
            .enumerate()
            .skip(open_idx + 1)
            .find(|(_, candidate)| self.policy.is_evening_close(open, candidate))
            .map(|(idx, _)| idx)
    }
}

/// 工时（小时，两位小数，取绝对值）
pub fn worked_hours(open: &NaiveDateTime, close: &NaiveDateTime) -> f64 {
    let seconds = (*close - *open).num_seconds().abs();
    round_hours(seconds as f64 / 3600.0)
}

fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}
