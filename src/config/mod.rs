// ==========================================
// 考勤打卡分析 - 配置层
// ==========================================
// 职责: 班次策略、表头同义词、汇总窗口等配置
// 存储: 可选 JSON 键值文件
// ==========================================

pub mod analysis_config_trait;
pub mod config_manager;
pub mod header_synonyms;
pub mod shift_policy;

// 重导出核心配置管理器
pub use analysis_config_trait::{AnalysisConfigReader, DEFAULT_WINDOW_DAYS};
pub use config_manager::{config_keys, default_config_path, ConfigManager, CONFIG_PATH_ENV};
pub use header_synonyms::{HeaderLocale, HeaderSynonyms, LogicalField};
pub use shift_policy::ShiftPolicy;
