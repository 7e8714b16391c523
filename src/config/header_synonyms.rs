// ==========================================
// 考勤打卡分析 - 表头同义词
// ==========================================
// 职责: 对照表列名模糊匹配（不区分大小写的子串匹配）
// 每个逻辑字段一组同义词，按语言预置，可由配置追加
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// LogicalField - 对照表中需要定位的逻辑列
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalField {
    Code, // 工号
    Name, // 姓名
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalField::Code => write!(f, "code"),
            LogicalField::Name => write!(f, "name"),
        }
    }
}

// ==========================================
// HeaderLocale - 预置语言
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderLocale {
    English,
    Arabic,
    Chinese,
}

impl HeaderLocale {
    /// 该语言下各逻辑字段的关键词
    pub fn keywords(&self, field: LogicalField) -> &'static [&'static str] {
        match (self, field) {
            (HeaderLocale::English, LogicalField::Code) => &["code"],
            (HeaderLocale::English, LogicalField::Name) => &["name"],
            (HeaderLocale::Arabic, LogicalField::Code) => &["كود"],
            (HeaderLocale::Arabic, LogicalField::Name) => &["اسم"],
            (HeaderLocale::Chinese, LogicalField::Code) => &["工号", "编号"],
            (HeaderLocale::Chinese, LogicalField::Name) => &["姓名"],
        }
    }

    /// 从语言代码解析（"en" / "ar" / "zh-CN" ...）
    pub fn from_locale_code(code: &str) -> Option<Self> {
        let lower = code.trim().to_lowercase();
        let primary = lower.split(|c| c == '-' || c == '_').next().unwrap_or("");
        match primary {
            "en" => Some(HeaderLocale::English),
            "ar" => Some(HeaderLocale::Arabic),
            "zh" => Some(HeaderLocale::Chinese),
            _ => None,
        }
    }
}

// ==========================================
// HeaderSynonyms
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSynonyms {
    code: Vec<String>,
    name: Vec<String>,
}

impl Default for HeaderSynonyms {
    /// 默认同时接受英文与阿拉伯文表头
    fn default() -> Self {
        Self::from_locales(&[HeaderLocale::English, HeaderLocale::Arabic])
    }
}

impl HeaderSynonyms {
    fn empty() -> Self {
        Self {
            code: Vec::new(),
            name: Vec::new(),
        }
    }

    pub fn from_locales(locales: &[HeaderLocale]) -> Self {
        let mut synonyms = Self::empty();
        for locale in locales {
            for field in [LogicalField::Code, LogicalField::Name] {
                synonyms.extend(field, locale.keywords(field).iter().copied());
            }
        }
        synonyms
    }

    /// 追加同义词（去空白、去重，保持顺序）
    pub fn extend<I, S>(&mut self, field: LogicalField, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = self.list_mut(field);
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let lowered = word.to_lowercase();
            if !list.iter().any(|existing| *existing == lowered) {
                list.push(lowered);
            }
        }
    }

    pub fn synonyms(&self, field: LogicalField) -> &[String] {
        match field {
            LogicalField::Code => &self.code,
            LogicalField::Name => &self.name,
        }
    }

    fn list_mut(&mut self, field: LogicalField) -> &mut Vec<String> {
        match field {
            LogicalField::Code => &mut self.code,
            LogicalField::Name => &mut self.name,
        }
    }

    /// 表头是否命中某逻辑字段
    pub fn matches(&self, field: LogicalField, header: &str) -> bool {
        let header = header.to_lowercase();
        self.synonyms(field)
            .iter()
            .any(|word| header.contains(word.as_str()))
    }

    /// 按列顺序返回第一个命中的列（下标, 表头）
    pub fn find_column<'a>(
        &self,
        field: LogicalField,
        headers: &'a [String],
    ) -> Option<(usize, &'a str)> {
        headers
            .iter()
            .enumerate()
            .find(|(_, header)| self.matches(field, header))
            .map(|(idx, header)| (idx, header.as_str()))
    }
}
