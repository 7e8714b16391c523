// ==========================================
// 考勤打卡分析 - 分析配置读取 Trait
// ==========================================
// 职责: 定义引擎所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::header_synonyms::HeaderSynonyms;
use crate::config::shift_policy::ShiftPolicy;
use crate::importer::error::{ImportError, ImportResult};
use serde_json::{json, Value};

/// 缺勤天数统计窗口（天）
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

// ==========================================
// AnalysisConfigReader Trait
// ==========================================
// 实现者: ConfigManager（键值配置）；测试中可自行实现
pub trait AnalysisConfigReader {
    /// 获取班次边界策略
    ///
    /// # 默认值
    /// - 晚班起点 15 点，早班收班窗口 [12, 15)，晚班同日收班早于 5 点，出勤阈值 8 小时
    fn get_shift_policy(&self) -> ImportResult<ShiftPolicy>;

    /// 获取对照表表头同义词
    ///
    /// # 默认值
    /// - 英文 + 阿拉伯文预置，再追加配置中的 code/name 同义词
    fn get_header_synonyms(&self) -> ImportResult<HeaderSynonyms>;

    /// 获取缺勤统计窗口天数
    ///
    /// # 默认值
    /// - 30（固定窗口，不按实际月份天数计算）
    fn get_window_days(&self) -> ImportResult<i64>;

    /// 获取界面语言
    ///
    /// # 默认值
    /// - "en"
    fn get_locale(&self) -> ImportResult<String>;

    /// 对照表中没有任何打卡的员工是否输出汇总行
    ///
    /// # 默认值
    /// - true
    fn get_include_idle_identities(&self) -> ImportResult<bool>;

    /// 生效配置快照（写入报告，便于复现）
    fn get_config_snapshot(&self) -> ImportResult<Value> {
        let policy = serde_json::to_value(self.get_shift_policy()?)
            .map_err(|e| ImportError::InternalError(e.to_string()))?;
        Ok(json!({
            "shift_policy": policy,
            "window_days": self.get_window_days()?,
            "locale": self.get_locale()?,
            "include_idle_identities": self.get_include_idle_identities()?,
        }))
    }
}
