// ==========================================
// 交付绩效看板系统 - 数据集仓储
// ==========================================
// 职责: 会话内当前交付记录集的共享访问
// 语义: 新一次导入整体替换旧数据集（后写覆盖，不做合并）；
//       进程退出即丢弃，无持久化
// ==========================================

use crate::domain::DeliveryRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::sync::{Arc, RwLock};

pub struct DatasetRepository {
    records: Arc<RwLock<Vec<DeliveryRecord>>>,
}

impl DatasetRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// 整体替换当前数据集
    ///
    /// # 参数
    /// - records: 新导入的记录集
    ///
    /// # 返回
    /// - Ok(usize): 替换后的记录数
    pub fn replace_all(&self, records: Vec<DeliveryRecord>) -> RepositoryResult<usize> {
        let mut guard = self
            .records
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        *guard = records;
        Ok(guard.len())
    }

    /// 取当前数据集的快照副本
    pub fn snapshot(&self) -> RepositoryResult<Vec<DeliveryRecord>> {
        let guard = self
            .records
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(guard.clone())
    }

    /// 当前记录数
    pub fn count(&self) -> RepositoryResult<usize> {
        let guard = self
            .records
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(guard.len())
    }

    /// 清空数据集
    ///
    /// # 返回
    /// - Ok(usize): 被清除的记录数
    pub fn clear(&self) -> RepositoryResult<usize> {
        let mut guard = self
            .records
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        let removed = guard.len();
        guard.clear();
        Ok(removed)
    }
}

impl Default for DatasetRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(order_id: i64) -> DeliveryRecord {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        DeliveryRecord {
            order_id: Some(order_id),
            delivery_id: Some(1),
            ordered_date: date,
            estimated_date: date,
            actual_date: date,
            delivered_quantity: Some(1.0),
            total_quantity: Some(1.0),
            is_complete: true,
            is_on_time: true,
            row_number: 1,
        }
    }

    #[test]
    fn test_new_repository_is_empty() {
        let repo = DatasetRepository::new();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_replace_all_last_write_wins() {
        let repo = DatasetRepository::new();

        repo.replace_all(vec![record(1), record(2)]).unwrap();
        assert_eq!(repo.count().unwrap(), 2);

        // 再次导入整体替换，不做合并
        let count = repo.replace_all(vec![record(3)]).unwrap();
        assert_eq!(count, 1);

        let snapshot = repo.snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].order_id, Some(3));
    }

    #[test]
    fn test_clear() {
        let repo = DatasetRepository::new();
        repo.replace_all(vec![record(1), record(2)]).unwrap();

        assert_eq!(repo.clear().unwrap(), 2);
        assert_eq!(repo.count().unwrap(), 0);
    }
}
