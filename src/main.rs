// ==========================================
// 考勤打卡分析 - 命令行入口
// ==========================================
// 流程: 加载配置 → 解析对照表/打卡日志 → 分组汇总 → 导出
// 退出码: 0 成功；2 对照表缺列；1 其他错误
// ==========================================

use anyhow::{Context, Result};
use clap::Parser;
use punch_attendance::cli::Cli;
use punch_attendance::config::{AnalysisConfigReader, ConfigManager};
use punch_attendance::domain::AttendanceReport;
use punch_attendance::export::{CsvExporter, JsonExporter};
use punch_attendance::i18n::{self, t, t_with_args};
use punch_attendance::importer::ImportError;
use punch_attendance::logging::{self, LogFormat};
use punch_attendance::AttendanceAnalyzer;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    logging::init_with(cli.log_level.as_deref(), log_format);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ImportError>() {
            Some(import_err) => {
                eprintln!("{}", import_err.user_message());
                if import_err.is_schema_error() {
                    ExitCode::from(2)
                } else {
                    ExitCode::FAILURE
                }
            }
            None => {
                eprintln!("{:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    tracing::info!("{} v{}", punch_attendance::APP_NAME, punch_attendance::VERSION);

    // ===== 配置 =====
    let config = match &cli.config {
        Some(path) => ConfigManager::from_file(path)?,
        None => ConfigManager::load_default()?,
    };
    if let Some(source) = config.source() {
        tracing::info!(path = %source.display(), "已加载配置文件");
    }

    // ===== 语言 =====
    let locale = match &cli.locale {
        Some(locale) => locale.clone(),
        None => config.get_locale()?,
    };
    if i18n::is_supported(&locale) {
        i18n::set_locale(&locale);
    } else {
        tracing::warn!(locale = %locale, "不支持的语言，使用 en");
        i18n::set_locale("en");
    }

    // ===== 分析 =====
    let analyzer = AttendanceAnalyzer::new(Arc::new(config));
    let report = analyzer.analyze_files(&cli.punches, &cli.codes)?;

    print_summary(&report);

    // ===== 导出 =====
    if cli.format.wants_csv() {
        let paths = CsvExporter
            .export(&report, &cli.out_dir)
            .context("CSV export failed")?;
        println!("{}", t_with_args("run.written", &[("path", &paths.attendance.display().to_string())]));
        println!("{}", t_with_args("run.written", &[("path", &paths.summary.display().to_string())]));
    }
    if cli.format.wants_json() {
        let path = JsonExporter
            .export(&report, &cli.out_dir)
            .context("JSON export failed")?;
        println!("{}", t_with_args("run.written", &[("path", &path.display().to_string())]));
    }

    Ok(())
}

fn print_summary(report: &AttendanceReport) {
    let totals = &report.totals;

    println!("{} ({})", t("run.title"), report.run_id);
    println!(
        "{}",
        t_with_args(
            "run.punches",
            &[
                ("parsed", &report.punch_stats.parsed.to_string()),
                ("dropped", &report.punch_stats.dropped().to_string()),
            ],
        )
    );
    println!(
        "{}",
        t_with_args(
            "run.identities",
            &[
                ("rows", &report.identity_stats.total_rows.to_string()),
                ("unknown_code", &report.identity_stats.unknown_code.to_string()),
                ("unknown_name", &report.identity_stats.unknown_name.to_string()),
            ],
        )
    );
    println!(
        "{}",
        t_with_args(
            "run.shifts",
            &[
                ("shifts", &report.attendance_rows.len().to_string()),
                ("present", &totals.present_shifts.to_string()),
                ("absent", &totals.absent_shifts.to_string()),
            ],
        )
    );
    println!(
        "{}",
        t_with_args(
            "run.employees",
            &[
                ("employees", &report.summary_rows.len().to_string()),
                ("single", &totals.employees_with_single_punch.to_string()),
            ],
        )
    );
    println!(
        "{}",
        t_with_args(
            "run.totals",
            &[
                ("present", &totals.total_present_days.to_string()),
                ("absent", &totals.total_absent_days.to_string()),
                ("single", &totals.total_single_punch_days.to_string()),
            ],
        )
    );
}
