// ==========================================
// 考勤打卡分析 - 分析编排器
// ==========================================
// 用途: 协调 导入 → 分组 → 汇总 的执行顺序
// 红线: 对照表列定位失败时，不做任何分组计算
// ==========================================

use crate::config::AnalysisConfigReader;
use crate::domain::attendance::{AttendanceReport, AttendanceRow, EmployeeSummary, ShiftRecord};
use crate::domain::identity::IdentityDirectory;
use crate::domain::punch::{EmployeeCode, ParsedPunches};
use crate::engine::{AttendanceAggregator, PunchGrouper};
use crate::importer::{
    ImportResult, IdentityResolver, PunchLogParser, RawTable, ResolvedIdentities,
    UniversalFileParser,
};
use chrono::Utc;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// AttendanceAnalyzer - 分析编排器
// ==========================================
pub struct AttendanceAnalyzer<C>
where
    C: AnalysisConfigReader,
{
    config: Arc<C>,
}

impl<C> AttendanceAnalyzer<C>
where
    C: AnalysisConfigReader,
{
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - config: 配置读取器
    pub fn new(config: Arc<C>) -> Self {
        Self { config }
    }

    /// 从文件运行完整分析
    ///
    /// # 参数
    /// - punch_path: 打卡日志 (.dat)
    /// - reference_path: 员工对照表 (.xlsx/.xls/.csv)
    #[instrument(skip(self, punch_path, reference_path), fields(
        punches = %punch_path.as_ref().display(),
        reference = %reference_path.as_ref().display(),
    ))]
    pub fn analyze_files<P, R>(&self, punch_path: P, reference_path: R) -> ImportResult<AttendanceReport>
    where
        P: AsRef<Path>,
        R: AsRef<Path>,
    {
        let table = UniversalFileParser.parse(reference_path.as_ref())?;
        let resolved = self.resolve_identities(&table)?;

        let punches = PunchLogParser::new().parse_file(punch_path.as_ref())?;
        self.build_report(resolved, punches)
    }

    /// 对已加载的数据运行分析
    pub fn analyze(&self, reference: &RawTable, punches: ParsedPunches) -> ImportResult<AttendanceReport> {
        let resolved = self.resolve_identities(reference)?;
        self.build_report(resolved, punches)
    }

    fn resolve_identities(&self, table: &RawTable) -> ImportResult<ResolvedIdentities> {
        let synonyms = self.config.get_header_synonyms()?;
        IdentityResolver::new(synonyms).resolve(table)
    }

    fn build_report(
        &self,
        resolved: ResolvedIdentities,
        punches: ParsedPunches,
    ) -> ImportResult<AttendanceReport> {
        let policy = self.config.get_shift_policy()?;
        let window_days = self.config.get_window_days()?;
        let include_idle = self.config.get_include_idle_identities()?;
        let config_snapshot = self.config.get_config_snapshot()?;

        let identity_stats = resolved.stats;
        let directory = IdentityDirectory::new(resolved.identities);
        if directory.is_empty() {
            warn!("员工对照表没有数据行，所有员工显示为未知");
        } else {
            debug!(identities = directory.len(), "员工对照表已载入");
        }
        let grouper = PunchGrouper::new(policy);
        let aggregator = AttendanceAggregator::new(window_days);

        // ===== 分组 =====
        let grouped = grouper.group(&punches.events);

        let mut attendance_rows = Vec::new();
        let mut all_records: Vec<ShiftRecord> = Vec::new();
        let mut summary_rows: Vec<EmployeeSummary> = Vec::with_capacity(grouped.len());
        let mut seen: BTreeSet<EmployeeCode> = BTreeSet::new();

        for shifts in grouped {
            let name = directory.display_name(shifts.employee_code);
            summary_rows.push(aggregator.summarize(shifts.employee_code, name, &shifts.records));
            seen.insert(shifts.employee_code);

            for record in shifts.records {
                all_records.push(record.clone());
                attendance_rows.push(AttendanceRow {
                    name: name.to_string(),
                    shift: record,
                });
            }
        }

        // ===== 无打卡员工 =====
        if include_idle {
            for code in directory.known_codes() {
                if seen.insert(code) {
                    debug!(employee_code = code, "对照表员工无打卡记录");
                    summary_rows.push(aggregator.summarize_idle(code, directory.display_name(code)));
                }
            }
            summary_rows.sort_by_key(|s| s.employee_code);
        }

        // ===== 汇总 =====
        let totals = aggregator.totals(&summary_rows, &all_records);
        let daily_counts = aggregator.daily_counts(&all_records);

        let report = AttendanceReport {
            run_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            window_days,
            attendance_rows,
            summary_rows,
            totals,
            daily_counts,
            punch_stats: punches.stats,
            identity_stats,
            config_snapshot,
        };

        info!(
            run_id = %report.run_id,
            shifts = report.attendance_rows.len(),
            employees = report.summary_rows.len(),
            present_shifts = report.totals.present_shifts,
            single_punch_days = report.totals.total_single_punch_days,
            "考勤分析完成"
        );

        Ok(report)
    }
}
