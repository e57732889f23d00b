// ==========================================
// 交付绩效看板系统 - API 层
// ==========================================
// 职责: 面向前端外壳的业务接口（导入 / 驾驶舱查询）
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod import_api;

pub use dashboard_api::{DashboardApi, DashboardSummary};
pub use error::{ApiError, ApiResult};
pub use import_api::{ImportApi, ImportApiResponse};
