// ==========================================
// 考勤打卡分析 - 领域模型层
// ==========================================
// 职责: 定义打卡、身份、班次、汇总等实体
// 红线: 不含文件读写,不含引擎逻辑
// ==========================================

pub mod attendance;
pub mod identity;
pub mod punch;
pub mod types;

// 重导出核心类型
pub use attendance::{
    AttendanceReport, AttendanceRow, AttendanceTotals, CheckOut, EmployeeSummary, ShiftRecord,
};
pub use identity::{
    Identity, IdentityCode, IdentityDirectory, IdentityParseStats, UNKNOWN_CODE,
    UNKNOWN_EMPLOYEE, UNKNOWN_NAME,
};
pub use punch::{EmployeeCode, ParsedPunches, PunchEvent, PunchParseStats};
pub use types::{AttendanceStatus, ShiftKind};
