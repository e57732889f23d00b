// ==========================================
// 交付绩效看板系统 - 驾驶舱 API
// ==========================================
// 职责: KPI 汇总与延迟分布查询，供前端驾驶舱渲染
// 架构: API 层 → 引擎层（纯计算） + 仓储层（数据集快照）
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{DelayBucket, DeliveryKpis};
use crate::engine::{DelayDistributionEngine, KpiEngine};
use crate::repository::DatasetRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ==========================================
// DTO 类型定义
// ==========================================

/// 驾驶舱聚合响应（一次调用取齐一屏数据）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// KPI 汇总
    pub kpis: DeliveryKpis,
    /// 延迟分布（固定 5 个区间）
    pub delay_distribution: Vec<DelayBucket>,
    /// 当前数据集记录数
    pub total_records: i64,
}

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱API
///
/// 职责：
/// 1. KPI 汇总查询（完整率 / 准时率 / 平均延迟）
/// 2. 延迟分布查询
/// 3. 聚合接口（KPI + 分布一次取齐）
pub struct DashboardApi {
    dataset_repo: Arc<DatasetRepository>,
    kpi_engine: KpiEngine,
    delay_engine: DelayDistributionEngine,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    pub fn new(dataset_repo: Arc<DatasetRepository>) -> Self {
        Self {
            dataset_repo,
            kpi_engine: KpiEngine::new(),
            delay_engine: DelayDistributionEngine::new(),
        }
    }

    /// 查询交付KPI汇总
    ///
    /// # 返回
    /// - Ok(DeliveryKpis): 当前数据集的KPI汇总
    /// - Err(ApiError::EmptyDataset): 尚未导入数据（显式"无数据"，不返回 NaN 指标）
    pub fn get_kpis(&self) -> ApiResult<DeliveryKpis> {
        let records = self.dataset_repo.snapshot()?;
        self.kpi_engine
            .compute_kpis(&records)
            .ok_or(ApiError::EmptyDataset)
    }

    /// 查询延迟分布
    ///
    /// # 返回
    /// - Ok(Vec<DelayBucket>): 固定 5 个区间；空数据集返回全零分布
    pub fn get_delay_distribution(&self) -> ApiResult<Vec<DelayBucket>> {
        let records = self.dataset_repo.snapshot()?;
        Ok(self.delay_engine.compute_distribution(&records))
    }

    /// 查询驾驶舱聚合数据
    ///
    /// # 返回
    /// - Ok(DashboardSummary): KPI + 延迟分布 + 记录数
    /// - Err(ApiError::EmptyDataset): 尚未导入数据
    ///
    /// # 说明
    /// 只取一次数据集快照，保证同一响应内各视图口径一致
    pub fn get_dashboard_summary(&self) -> ApiResult<DashboardSummary> {
        let records = self.dataset_repo.snapshot()?;

        let kpis = self
            .kpi_engine
            .compute_kpis(&records)
            .ok_or(ApiError::EmptyDataset)?;
        let delay_distribution = self.delay_engine.compute_distribution(&records);

        Ok(DashboardSummary {
            kpis,
            delay_distribution,
            total_records: records.len() as i64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_kpis_empty_dataset() {
        let api = DashboardApi::new(Arc::new(DatasetRepository::new()));
        let result = api.get_kpis();
        assert!(matches!(result, Err(ApiError::EmptyDataset)));
    }

    #[test]
    fn test_get_delay_distribution_empty_dataset_is_all_zero() {
        let api = DashboardApi::new(Arc::new(DatasetRepository::new()));
        let buckets = api.get_delay_distribution().unwrap();

        assert_eq!(buckets.len(), 5);
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_get_dashboard_summary_empty_dataset() {
        let api = DashboardApi::new(Arc::new(DatasetRepository::new()));
        assert!(matches!(
            api.get_dashboard_summary(),
            Err(ApiError::EmptyDataset)
        ));
    }
}
