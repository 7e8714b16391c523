// ==========================================
// 考勤打卡分析 - 员工身份模型
// ==========================================
// 来源: 员工编码对照表（Excel/CSV）
// 用途: 工号 → 显示姓名
// ==========================================

use crate::domain::punch::EmployeeCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 工号无法解析时的占位
pub const UNKNOWN_CODE: &str = "Unknown Code";

/// 姓名缺失时的占位
pub const UNKNOWN_NAME: &str = "Unknown Name";

/// 打卡工号在对照表中查不到时的显示名
pub const UNKNOWN_EMPLOYEE: &str = "Unknown";

// ==========================================
// IdentityCode - 对照表中的工号
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityCode {
    Known(EmployeeCode),
    Unknown,
}

impl IdentityCode {
    pub fn as_known(&self) -> Option<EmployeeCode> {
        match self {
            IdentityCode::Known(code) => Some(*code),
            IdentityCode::Unknown => None,
        }
    }
}

impl fmt::Display for IdentityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityCode::Known(code) => write!(f, "{}", code),
            IdentityCode::Unknown => write!(f, "{}", UNKNOWN_CODE),
        }
    }
}

// ==========================================
// Identity - 员工身份
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub code: IdentityCode,
    pub name: String,
}

// ==========================================
// IdentityParseStats - 对照表解析统计
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityParseStats {
    pub total_rows: usize,
    pub unknown_code: usize, // 工号落到占位值
    pub unknown_name: usize, // 姓名落到占位值
}

// ==========================================
// IdentityDirectory - 只读查找表
// ==========================================
// 同一工号出现多次时，以第一次出现为准
#[derive(Debug, Clone, Default)]
pub struct IdentityDirectory {
    identities: Vec<Identity>,
    by_code: HashMap<EmployeeCode, usize>,
}

impl IdentityDirectory {
    pub fn new(identities: Vec<Identity>) -> Self {
        let mut by_code = HashMap::new();
        for (idx, identity) in identities.iter().enumerate() {
            if let Some(code) = identity.code.as_known() {
                by_code.entry(code).or_insert(idx);
            }
        }
        Self {
            identities,
            by_code,
        }
    }

    pub fn get(&self, code: EmployeeCode) -> Option<&Identity> {
        self.by_code.get(&code).map(|&idx| &self.identities[idx])
    }

    /// 显示名；查不到返回 `UNKNOWN_EMPLOYEE`
    pub fn display_name(&self, code: EmployeeCode) -> &str {
        self.get(code)
            .map(|identity| identity.name.as_str())
            .unwrap_or(UNKNOWN_EMPLOYEE)
    }

    /// 所有可用工号（去重，按对照表顺序）
    pub fn known_codes(&self) -> Vec<EmployeeCode> {
        let mut codes: Vec<(usize, EmployeeCode)> =
            self.by_code.iter().map(|(&code, &idx)| (idx, code)).collect();
        codes.sort_unstable();
        codes.into_iter().map(|(_, code)| code).collect()
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}
