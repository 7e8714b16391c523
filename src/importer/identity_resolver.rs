// ==========================================
// 考勤打卡分析 - 员工身份解析器
// ==========================================
// 职责: 表头模糊匹配定位工号列/姓名列 → Identity 列表
// 红线: 任一列定位失败即 SchemaError，不返回部分结果
// ==========================================

use crate::config::header_synonyms::{HeaderSynonyms, LogicalField};
use crate::domain::identity::{Identity, IdentityCode, IdentityParseStats, UNKNOWN_NAME};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::RawTable;
use tracing::{info, instrument, warn};

// ==========================================
// ResolvedColumns - 定位到的列
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub code_index: usize,
    pub code_column: String,
    pub name_index: usize,
    pub name_column: String,
}

// ==========================================
// ResolvedIdentities - 解析结果
// ==========================================
#[derive(Debug, Clone)]
pub struct ResolvedIdentities {
    pub columns: ResolvedColumns,
    pub identities: Vec<Identity>,
    pub stats: IdentityParseStats,
}

pub struct IdentityResolver {
    synonyms: HeaderSynonyms,
    cleaner: DataCleaner,
}

impl IdentityResolver {
    pub fn new(synonyms: HeaderSynonyms) -> Self {
        Self {
            synonyms,
            cleaner: DataCleaner,
        }
    }

    /// 定位工号列与姓名列
    ///
    /// # 返回
    /// - Err(SchemaError): 列出所有未能定位的逻辑字段
    pub fn resolve_columns(&self, headers: &[String]) -> ImportResult<ResolvedColumns> {
        let code_column = self.synonyms.find_column(LogicalField::Code, headers);
        let name_column = self.synonyms.find_column(LogicalField::Name, headers);

        match (code_column, name_column) {
            (Some((code_index, code)), Some((name_index, name))) => Ok(ResolvedColumns {
                code_index,
                code_column: code.to_string(),
                name_index,
                name_column: name.to_string(),
            }),
            (code, name) => {
                let mut missing = Vec::new();
                if code.is_none() {
                    missing.push(LogicalField::Code.to_string());
                }
                if name.is_none() {
                    missing.push(LogicalField::Name.to_string());
                }
                Err(ImportError::SchemaError {
                    missing,
                    headers: headers.to_vec(),
                })
            }
        }
    }

    /// 解析对照表
    #[instrument(skip(self, table), fields(rows = table.len()))]
    pub fn resolve(&self, table: &RawTable) -> ImportResult<ResolvedIdentities> {
        let columns = self.resolve_columns(&table.headers).map_err(|e| {
            warn!(headers = ?table.headers, "对照表缺少工号/姓名列");
            e
        })?;

        let mut stats = IdentityParseStats {
            total_rows: table.len(),
            ..IdentityParseStats::default()
        };

        let identities: Vec<Identity> = (0..table.len())
            .map(|row| {
                let code = table
                    .cell(row, columns.code_index)
                    .and_then(|raw| self.cleaner.parse_leading_integer(raw))
                    .map(IdentityCode::Known)
                    .unwrap_or_else(|| {
                        stats.unknown_code += 1;
                        IdentityCode::Unknown
                    });

                let name = self
                    .cleaner
                    .normalize_null(table.cell(row, columns.name_index))
                    .unwrap_or_else(|| {
                        stats.unknown_name += 1;
                        UNKNOWN_NAME.to_string()
                    });

                Identity { code, name }
            })
            .collect();

        info!(
            code_column = %columns.code_column,
            name_column = %columns.name_column,
            identities = identities.len(),
            unknown_code = stats.unknown_code,
            unknown_name = stats.unknown_name,
            "员工对照表解析完成"
        );

        Ok(ResolvedIdentities {
            columns,
            identities,
            stats,
        })
    }
}
