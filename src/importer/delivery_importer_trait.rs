// ==========================================
// 交付绩效看板系统 - 交付导入 Trait
// ==========================================
// 职责: 定义导入管道接口（不包含实现）
// ==========================================

use crate::domain::{DeliveryRecord, ImportOutcome};
use crate::importer::error::ImportResult;
use crate::importer::file_parser::ParsedSheet;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser, UniversalFileParser
pub trait FileParser: Send + Sync {
    /// 解析文件为表头 + 原始行记录（HashMap<列名, 单元格文本>）
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(ParsedSheet): 表头与行记录
    /// - Err: 文件不存在、格式不支持、解析失败
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<ParsedSheet>;
}

// ==========================================
// RowMapper Trait
// ==========================================
// 用途: 行映射接口（阶段 1）
// 实现者: FieldMapper
pub trait RowMapper: Send + Sync {
    /// 将一条原始行记录映射为 DeliveryRecord
    ///
    /// # 参数
    /// - row: 原始行记录（列名 → 单元格文本）
    /// - row_number: 数据行号（从 1 开始，用于错误定位）
    ///
    /// # 返回
    /// - Ok(DeliveryRecord): 规范化记录
    /// - Err: 必填字段缺失 / 日期格式错误
    fn map_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<DeliveryRecord>;
}

// ==========================================
// DeliveryImporter Trait
// ==========================================
// 用途: 导入管道主接口
// 实现者: DeliveryImporterImpl
pub trait DeliveryImporter: Send + Sync {
    /// 从文件导入交付数据
    ///
    /// # 参数
    /// - file_path: 文件路径（.xlsx/.xls/.csv）
    ///
    /// # 返回
    /// - Ok(ImportOutcome): 批次信息 + 规范化记录集
    /// - Err: 任一阶段失败即中止，不产生部分导入
    ///
    /// # 导入流程（3个阶段）
    /// 1. 文件读取与解析（仅第一个工作表）
    /// 2. 必需列校验
    /// 3. 逐行字段映射与类型转换
    fn import_file(&self, file_path: &Path) -> ImportResult<ImportOutcome>;
}
