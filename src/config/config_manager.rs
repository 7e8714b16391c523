// ==========================================
// 考勤打卡分析 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、默认值回退
// 存储: JSON 键值文件（可选），缺省键一律使用默认值
// ==========================================

use crate::config::analysis_config_trait::{AnalysisConfigReader, DEFAULT_WINDOW_DAYS};
use crate::config::header_synonyms::{HeaderLocale, HeaderSynonyms, LogicalField};
use crate::config::shift_policy::{
    ShiftPolicy, DEFAULT_EVENING_CLOSE_BEFORE_HOUR, DEFAULT_EVENING_START_HOUR,
    DEFAULT_MORNING_CLOSE_END_HOUR, DEFAULT_MORNING_CLOSE_START_HOUR,
    DEFAULT_PRESENT_THRESHOLD_HOURS,
};
use crate::importer::error::{ImportError, ImportResult};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// 显式指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "PUNCH_ATTENDANCE_CONFIG";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: BTreeMap<String, String>,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 创建空配置（全部使用默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已有键值创建
    pub fn from_map<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            source: None,
        }
    }

    /// 从 JSON 文件加载
    ///
    /// # 文件格式
    /// 顶层对象；值可为字符串/数字/布尔/字符串数组（数组以逗号拼接）
    pub fn from_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let raw = fs::read_to_string(path)?;
        let mut manager = Self::from_json_str(&raw)?;
        manager.source = Some(path.to_path_buf());

        info!(path = %path.display(), keys = manager.values.len(), "配置文件已加载");
        Ok(manager)
    }

    /// 从 JSON 文本解析
    pub fn from_json_str(raw: &str) -> ImportResult<Self> {
        let parsed: Value = serde_json::from_str(raw).map_err(|e| ImportError::ConfigReadError {
            key: "<root>".to_string(),
            message: e.to_string(),
        })?;

        let object = match parsed {
            Value::Object(map) => map,
            other => {
                return Err(ImportError::ConfigValueError {
                    key: "<root>".to_string(),
                    value: other.to_string(),
                    message: "config root must be a JSON object".to_string(),
                })
            }
        };

        let mut values = BTreeMap::new();
        for (key, value) in object {
            match flatten_value(&key, value)? {
                Some(text) => {
                    values.insert(key, text);
                }
                None => debug!(key = %key, "配置值为 null，忽略"),
            }
        }

        Ok(Self {
            values,
            source: None,
        })
    }

    /// 按默认位置加载
    ///
    /// 顺序: 环境变量 PUNCH_ATTENDANCE_CONFIG → 用户配置目录 → 全默认
    pub fn load_default() -> ImportResult<Self> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Self::from_file(trimmed);
            }
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => {
                debug!("未找到配置文件，使用默认配置");
                Ok(Self::new())
            }
        }
    }

    /// 覆写单个配置项
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// 配置来源文件（若有）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key).unwrap_or(default).to_string()
    }

    /// 解析数值配置；格式错误时告警并回退默认值
    fn get_parsed_or_default<T>(&self, key: &str, default: T) -> T
    where
        T: FromStr + Copy,
    {
        match self.get_config_value(key) {
            None => default,
            Some(raw) => raw.parse::<T>().unwrap_or_else(|_| {
                warn!(config_key = key, raw_value = %raw, "配置值格式错误，使用默认值");
                default
            }),
        }
    }

    fn get_list(&self, key: &str) -> Vec<String> {
        self.get_config_value(key)
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// 将 JSON 值展平为字符串配置值
fn flatten_value(key: &str, value: Value) -> ImportResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => parts.push(s),
                    Value::Number(n) => parts.push(n.to_string()),
                    other => {
                        return Err(ImportError::ConfigValueError {
                            key: key.to_string(),
                            value: other.to_string(),
                            message: "array items must be strings or numbers".to_string(),
                        })
                    }
                }
            }
            Ok(Some(parts.join(",")))
        }
        Value::Object(_) => Err(ImportError::ConfigValueError {
            key: key.to_string(),
            value: value.to_string(),
            message: "nested objects are not supported".to_string(),
        }),
    }
}

/// 默认配置文件位置（用户配置目录）
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("punch-attendance").join("config.json"))
}

// ==========================================
// AnalysisConfigReader Trait 实现
// ==========================================
impl AnalysisConfigReader for ConfigManager {
    fn get_shift_policy(&self) -> ImportResult<ShiftPolicy> {
        let policy = ShiftPolicy {
            evening_start_hour: self
                .get_parsed_or_default(config_keys::EVENING_START_HOUR, DEFAULT_EVENING_START_HOUR),
            morning_close_start_hour: self.get_parsed_or_default(
                config_keys::MORNING_CLOSE_START_HOUR,
                DEFAULT_MORNING_CLOSE_START_HOUR,
            ),
            morning_close_end_hour: self.get_parsed_or_default(
                config_keys::MORNING_CLOSE_END_HOUR,
                DEFAULT_MORNING_CLOSE_END_HOUR,
            ),
            evening_close_before_hour: self.get_parsed_or_default(
                config_keys::EVENING_CLOSE_BEFORE_HOUR,
                DEFAULT_EVENING_CLOSE_BEFORE_HOUR,
            ),
            present_threshold_hours: self.get_parsed_or_default(
                config_keys::PRESENT_THRESHOLD_HOURS,
                DEFAULT_PRESENT_THRESHOLD_HOURS,
            ),
        };

        policy
            .validate()
            .map_err(|message| ImportError::ConfigValueError {
                key: config_keys::SHIFT_POLICY.to_string(),
                value: format!("{:?}", policy),
                message,
            })?;

        Ok(policy)
    }

    fn get_header_synonyms(&self) -> ImportResult<HeaderSynonyms> {
        let locale_codes = self.get_config_or_default(config_keys::HEADER_LOCALES, "en,ar");

        let mut locales = Vec::new();
        for code in locale_codes.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match HeaderLocale::from_locale_code(code) {
                Some(locale) => locales.push(locale),
                None => warn!(config_key = config_keys::HEADER_LOCALES, locale = code, "不支持的表头语言，忽略"),
            }
        }

        let mut synonyms = HeaderSynonyms::from_locales(&locales);
        synonyms.extend(LogicalField::Code, self.get_list(config_keys::CODE_HEADER_SYNONYMS));
        synonyms.extend(LogicalField::Name, self.get_list(config_keys::NAME_HEADER_SYNONYMS));

        for field in [LogicalField::Code, LogicalField::Name] {
            if synonyms.synonyms(field).is_empty() {
                return Err(ImportError::ConfigValueError {
                    key: config_keys::HEADER_LOCALES.to_string(),
                    value: locale_codes.clone(),
                    message: format!("no header synonyms configured for field '{}'", field),
                });
            }
        }

        Ok(synonyms)
    }

    fn get_window_days(&self) -> ImportResult<i64> {
        let days = self.get_parsed_or_default(config_keys::WINDOW_DAYS, DEFAULT_WINDOW_DAYS);
        if days <= 0 {
            return Err(ImportError::ConfigValueError {
                key: config_keys::WINDOW_DAYS.to_string(),
                value: days.to_string(),
                message: "window must be at least one day".to_string(),
            });
        }
        Ok(days)
    }

    fn get_locale(&self) -> ImportResult<String> {
        Ok(self.get_config_or_default(config_keys::LOCALE, "en"))
    }

    fn get_include_idle_identities(&self) -> ImportResult<bool> {
        let value = self.get_config_or_default(config_keys::INCLUDE_IDLE_IDENTITIES, "true");
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => {
                warn!(config_key = config_keys::INCLUDE_IDLE_IDENTITIES, raw_value = %value, "配置值格式错误，使用默认值");
                Ok(true)
            }
        }
    }

    /// 原始键值 + 生效值（覆盖同名键）
    fn get_config_snapshot(&self) -> ImportResult<Value> {
        let policy = self.get_shift_policy()?;
        let synonyms = self.get_header_synonyms()?;

        let mut snapshot = serde_json::Map::new();
        for (key, value) in &self.values {
            snapshot.insert(key.clone(), Value::String(value.clone()));
        }

        snapshot.insert(
            config_keys::SHIFT_POLICY.to_string(),
            serde_json::to_value(policy).map_err(|e| ImportError::InternalError(e.to_string()))?,
        );
        snapshot.insert(
            config_keys::CODE_HEADER_SYNONYMS.to_string(),
            Value::from(synonyms.synonyms(LogicalField::Code).to_vec()),
        );
        snapshot.insert(
            config_keys::NAME_HEADER_SYNONYMS.to_string(),
            Value::from(synonyms.synonyms(LogicalField::Name).to_vec()),
        );
        snapshot.insert(
            config_keys::WINDOW_DAYS.to_string(),
            Value::from(self.get_window_days()?),
        );
        snapshot.insert(
            config_keys::LOCALE.to_string(),
            Value::from(self.get_locale()?),
        );
        snapshot.insert(
            config_keys::INCLUDE_IDLE_IDENTITIES.to_string(),
            Value::from(self.get_include_idle_identities()?),
        );

        Ok(Value::Object(snapshot))
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 班次边界
    pub const EVENING_START_HOUR: &str = "evening_start_hour";
    pub const MORNING_CLOSE_START_HOUR: &str = "morning_close_start_hour";
    pub const MORNING_CLOSE_END_HOUR: &str = "morning_close_end_hour";
    pub const EVENING_CLOSE_BEFORE_HOUR: &str = "evening_close_before_hour";
    pub const PRESENT_THRESHOLD_HOURS: &str = "present_threshold_hours";
    pub const SHIFT_POLICY: &str = "shift_policy"; // 仅用于快照/报错

    // 汇总窗口
    pub const WINDOW_DAYS: &str = "window_days";
    pub const INCLUDE_IDLE_IDENTITIES: &str = "include_idle_identities";

    // 表头匹配
    pub const HEADER_LOCALES: &str = "header_locales";
    pub const CODE_HEADER_SYNONYMS: &str = "code_header_synonyms";
    pub const NAME_HEADER_SYNONYMS: &str = "name_header_synonyms";

    // 界面
    pub const LOCALE: &str = "locale";
}
