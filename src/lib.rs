// ==========================================
// 考勤打卡分析 - 核心库
// ==========================================
// 输入: 考勤机打卡日志 (.dat) + 员工对照表 (Excel/CSV)
// 输出: 班次明细 / 员工汇总 / 全员合计
// 系统定位: 离线批处理（无数据库、无界面）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 分组与汇总
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 导出层 - 结果文件
pub mod export;

// 配置层 - 班次策略与表头同义词
pub mod config;

// 命令行参数
pub mod cli;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AttendanceStatus, ShiftKind};

// 领域实体
pub use domain::{
    AttendanceReport, AttendanceRow, AttendanceTotals, CheckOut, EmployeeSummary, Identity,
    IdentityCode, PunchEvent, ShiftRecord,
};

// 引擎
pub use engine::{AttendanceAggregator, AttendanceAnalyzer, PunchGrouper};

// 配置
pub use config::{AnalysisConfigReader, ConfigManager, ShiftPolicy};

// 导出
pub use export::{CsvExporter, ExportError, JsonExporter};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "punch-attendance";
