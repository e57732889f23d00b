// ==========================================
// 交付绩效看板系统 - 交付导入器实现
// ==========================================
// 职责: 解析 → 表头校验 → 逐行映射 的管道编排
// 失败语义: 任一行失败即整体中止，不产生部分导入
// ==========================================

use crate::config::ImportConfig;
use crate::domain::ImportOutcome;
use crate::importer::delivery_importer_trait::{DeliveryImporter, FileParser, RowMapper};
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::header_validator::HeaderValidator;
use std::path::Path;
use std::time::Instant;
use uuid::Uuid;

pub struct DeliveryImporterImpl {
    file_parser: Box<dyn FileParser>,
    row_mapper: Box<dyn RowMapper>,
    header_validator: HeaderValidator,
    config: ImportConfig,
}

impl DeliveryImporterImpl {
    pub fn new(
        file_parser: Box<dyn FileParser>,
        row_mapper: Box<dyn RowMapper>,
        config: ImportConfig,
    ) -> Self {
        Self {
            file_parser,
            row_mapper,
            header_validator: HeaderValidator,
            config,
        }
    }

    /// 使用默认组件装配（通用解析器 + 标准字段映射器）
    pub fn with_default_components(config: ImportConfig) -> Self {
        let row_mapper = Box::new(FieldMapper::new(config.clone()));
        Self::new(Box::new(UniversalFileParser), row_mapper, config)
    }
}

impl DeliveryImporter for DeliveryImporterImpl {
    fn import_file(&self, file_path: &Path) -> ImportResult<ImportOutcome> {
        let started = Instant::now();
        tracing::info!(file = %file_path.display(), "开始导入交付数据");

        // 阶段 1: 文件解析
        let sheet = self.file_parser.parse_sheet(file_path)?;

        // 阶段 2: 必需列校验（映射任何行之前）
        self.header_validator
            .validate(&sheet.headers, &self.config.required_columns)
            .map_err(|e| {
                tracing::warn!(file = %file_path.display(), error = %e, "表头校验失败");
                e
            })?;

        // 阶段 3: 逐行映射（行号从 1 开始，指数据区第几行）
        let mut records = Vec::with_capacity(sheet.rows.len());
        for (idx, row) in sheet.rows.iter().enumerate() {
            records.push(self.row_mapper.map_row(row, idx + 1)?);
        }

        let outcome = ImportOutcome {
            batch_id: Uuid::new_v4().to_string(),
            file_name: file_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string()),
            total_rows: records.len(),
            records,
            elapsed: started.elapsed(),
        };

        tracing::info!(
            batch_id = %outcome.batch_id,
            rows = outcome.total_rows,
            elapsed_ms = outcome.elapsed.as_millis() as u64,
            "交付数据导入完成"
        );

        Ok(outcome)
    }
}
