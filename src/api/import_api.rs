// ==========================================
// 交付导入API
// ==========================================
// 职责: 封装导入管道，导入成功后整体替换会话数据集
// 失败语义: 任何失败不触碰现有数据集，调用方可直接重试
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ImportConfig;
use crate::importer::{DeliveryImporter, DeliveryImporterImpl};
use crate::repository::DatasetRepository;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// 导入API响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportApiResponse {
    /// 导入的记录数
    pub imported: i64,
    /// 批次ID（本次导入的追溯标识）
    pub batch_id: String,
    /// 源文件名
    pub file_name: Option<String>,
    /// 导入耗时（毫秒）
    pub elapsed_ms: i64,
}

/// 导入API
pub struct ImportApi {
    importer: Box<dyn DeliveryImporter>,
    dataset_repo: Arc<DatasetRepository>,
}

impl ImportApi {
    /// 创建新的ImportApi实例
    pub fn new(importer: Box<dyn DeliveryImporter>, dataset_repo: Arc<DatasetRepository>) -> Self {
        Self {
            importer,
            dataset_repo,
        }
    }

    /// 使用默认导入器装配
    pub fn with_default_importer(dataset_repo: Arc<DatasetRepository>, config: ImportConfig) -> Self {
        Self::new(
            Box::new(DeliveryImporterImpl::with_default_components(config)),
            dataset_repo,
        )
    }

    /// 导入交付数据文件
    ///
    /// # 参数
    /// - file_path: 文件路径（.xlsx/.xls/.csv）
    ///
    /// # 返回
    /// - Ok(ImportApiResponse): 导入结果
    /// - Err(ApiError): 错误信息（缺失列清单等可直接展示给用户）
    ///
    /// # 说明
    /// 导入成功后新数据集整体替换旧数据集；失败时旧数据集保持不变
    pub fn import_deliveries(&self, file_path: &str) -> ApiResult<ImportApiResponse> {
        if file_path.trim().is_empty() {
            return Err(ApiError::InvalidInput("文件路径不能为空".to_string()));
        }

        let outcome = self
            .importer
            .import_file(Path::new(file_path))
            .map_err(|e| ApiError::ImportError(e.to_string()))?;

        let imported = self.dataset_repo.replace_all(outcome.records)?;

        tracing::info!(
            batch_id = %outcome.batch_id,
            imported = imported,
            "交付数据集已替换"
        );

        Ok(ImportApiResponse {
            imported: imported as i64,
            batch_id: outcome.batch_id,
            file_name: outcome.file_name,
            elapsed_ms: outcome.elapsed.as_millis() as i64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_deliveries_empty_path() {
        let api = ImportApi::with_default_importer(
            Arc::new(DatasetRepository::new()),
            ImportConfig::default(),
        );

        let result = api.import_deliveries("   ");
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_import_deliveries_missing_file() {
        let repo = Arc::new(DatasetRepository::new());
        let api = ImportApi::with_default_importer(repo.clone(), ImportConfig::default());

        let result = api.import_deliveries("no_such_file.csv");
        assert!(matches!(result, Err(ApiError::ImportError(_))));
        // 失败不触碰数据集
        assert_eq!(repo.count().unwrap(), 0);
    }
}
