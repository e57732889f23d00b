// ==========================================
// 交付绩效看板系统 - 表头校验器
// ==========================================
// 职责: 必需列存在性校验（映射任何行之前执行）
// 匹配口径: 去空格、不区分大小写，与字段映射保持一致
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::normalize_key;
use std::collections::HashSet;

pub struct HeaderValidator;

impl HeaderValidator {
    /// 校验表头是否包含全部必需列
    ///
    /// # 参数
    /// - headers: 解析出的表头列表
    /// - required_columns: 必需列列表
    ///
    /// # 返回
    /// - Ok(()): 全部命中
    /// - Err(MissingColumns): 一次性列出所有缺失列，整个文件拒绝导入
    pub fn validate(&self, headers: &[String], required_columns: &[String]) -> ImportResult<()> {
        let present: HashSet<String> = headers.iter().map(|h| normalize_key(h)).collect();

        let missing: Vec<String> = required_columns
            .iter()
            .filter(|column| !present.contains(&normalize_key(column)))
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ImportError::MissingColumns { columns: missing })
        }
    }
}
