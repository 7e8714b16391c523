// ==========================================
// 考勤打卡分析 - 导入层
// ==========================================
// 职责: 外部文件 → 打卡事件 / 员工身份
// 支持: .dat 打卡日志, Excel / CSV 对照表
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod file_parser;
pub mod identity_resolver;
pub mod importer_trait;
pub mod punch_parser;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use identity_resolver::{IdentityResolver, ResolvedColumns, ResolvedIdentities};
pub use importer_trait::{FileParser, RawTable};
pub use punch_parser::{LineRejection, PunchLogParser};
