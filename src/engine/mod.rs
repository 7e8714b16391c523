// ==========================================
// 考勤打卡分析 - 引擎层
// ==========================================
// 职责: 打卡 → 班次 → 汇总 的纯计算
// 红线: 引擎不读写文件，输入输出均为领域对象
// ==========================================

pub mod attendance_aggregator;
pub mod orchestrator;
pub mod punch_grouper;

// 重导出核心引擎
pub use attendance_aggregator::AttendanceAggregator;
pub use orchestrator::AttendanceAnalyzer;
pub use punch_grouper::{worked_hours, EmployeeShifts, PunchGrouper};
