// ==========================================
// 交付绩效看板系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 生命周期: 由前端外壳持有一个会话；进程退出即丢弃（无持久化）
// ==========================================

use std::sync::Arc;

use crate::api::{DashboardApi, ImportApi};
use crate::config::ImportConfig;
use crate::repository::DatasetRepository;

/// 应用状态
///
/// 包含所有API实例和共享资源
/// 在前端外壳（桌面/Web 集成层）中作为全局状态管理
pub struct AppState {
    /// 会话数据集仓储
    pub dataset_repo: Arc<DatasetRepository>,

    /// 交付导入API
    pub import_api: Arc<ImportApi>,

    /// 驾驶舱API
    pub dashboard_api: Arc<DashboardApi>,
}

impl AppState {
    /// 使用默认导入配置创建AppState实例
    pub fn new() -> Self {
        Self::with_config(ImportConfig::default())
    }

    /// 使用指定导入配置创建AppState实例
    ///
    /// # 参数
    /// - config: 导入配置（必需列、肯定词表、日期格式）
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 初始化数据集仓储
    /// 2. 创建所有API实例
    pub fn with_config(config: ImportConfig) -> Self {
        tracing::info!("初始化AppState");

        // ==========================================
        // 初始化Repository层
        // ==========================================
        let dataset_repo = Arc::new(DatasetRepository::new());

        // ==========================================
        // 初始化API层
        // ==========================================

        // 交付导入API
        let import_api = Arc::new(ImportApi::with_default_importer(
            dataset_repo.clone(),
            config,
        ));

        // 驾驶舱API
        let dashboard_api = Arc::new(DashboardApi::new(dataset_repo.clone()));

        tracing::info!("AppState初始化完成");

        Self {
            dataset_repo,
            import_api,
            dashboard_api,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
