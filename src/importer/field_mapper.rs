// ==========================================
// 交付绩效看板系统 - 字段映射器实现
// ==========================================
// 职责: 原始行 → DeliveryRecord 映射 + 类型转换
// 列名匹配: 去空格、不区分大小写；每行只构建一次规范键表
// ==========================================

use crate::config::{columns, ImportConfig};
use crate::domain::DeliveryRecord;
use crate::importer::delivery_importer_trait::RowMapper;
use crate::importer::error::{ImportError, ImportResult};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::HashMap;

/// Excel 日期序列号的纪元（1900 日期系统，含闰年兼容偏移）
const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// 规范化列名键：去空格 + 小写
pub(crate) fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

pub struct FieldMapper {
    config: ImportConfig,
}

impl FieldMapper {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }
}

impl RowMapper for FieldMapper {
    fn map_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<DeliveryRecord> {
        // 规范键表只构建一次，后续按标准列名直接命中
        let canonical = Self::canonicalize(row);

        Ok(DeliveryRecord {
            // 标识（宽松转换，无值/非数值为 None）
            order_id: self.get_i64(&canonical, columns::ORDER_ID),
            delivery_id: self.get_i64(&canonical, columns::DELIVERY_ID),

            // 时间信息
            ordered_date: self.parse_datetime(&canonical, columns::ORDER_DATE, row_number)?,
            estimated_date: self.parse_datetime(&canonical, columns::ESTIMATED_DATE, row_number)?,
            actual_date: self.parse_datetime(&canonical, columns::ACTUAL_DATE, row_number)?,

            // 数量信息（宽松转换）
            delivered_quantity: self.get_f64(&canonical, columns::DELIVERED_QUANTITY),
            total_quantity: self.get_f64(&canonical, columns::TOTAL_QUANTITY),

            // 状态标记（无值即中止整个导入）
            is_complete: self.parse_bool(&canonical, columns::IS_COMPLETE, row_number)?,
            is_on_time: self.parse_bool(&canonical, columns::IS_ON_TIME, row_number)?,

            // 元信息
            row_number,
        })
    }
}

impl FieldMapper {
    /// 构建规范键表（去空格小写键 → 去空格值；空白值视为缺失）
    fn canonicalize(row: &HashMap<String, String>) -> HashMap<String, String> {
        row.iter()
            .filter_map(|(key, value)| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some((normalize_key(key), trimmed.to_string()))
                }
            })
            .collect()
    }

    /// 按标准列名取原始值（缺失返回 None）
    fn resolve<'a>(&self, canonical: &'a HashMap<String, String>, column: &str) -> Option<&'a str> {
        canonical.get(&normalize_key(column)).map(|v| v.as_str())
    }

    /// 宽松整数转换（兼容 "1001.0" 这类 Excel 数值单元格文本）
    fn get_i64(&self, canonical: &HashMap<String, String>, column: &str) -> Option<i64> {
        let value = self.resolve(canonical, column)?;
        if let Ok(n) = value.parse::<i64>() {
            return Some(n);
        }
        value
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    }

    /// 宽松浮点转换
    fn get_f64(&self, canonical: &HashMap<String, String>, column: &str) -> Option<f64> {
        self.resolve(canonical, column)
            .and_then(|v| v.parse::<f64>().ok())
    }

    /// 布尔列转换
    ///
    /// 去空格后不区分大小写比对肯定词表（"sí"/"si"，以及布尔单元格
    /// 文本化后的 "true"）；命中为 true，其余文本为 false；无值直接
    /// 判定行异常并中止导入
    fn parse_bool(
        &self,
        canonical: &HashMap<String, String>,
        column: &str,
        row_number: usize,
    ) -> ImportResult<bool> {
        let value = self
            .resolve(canonical, column)
            .ok_or_else(|| ImportError::MalformedRow {
                row: row_number,
                field: column.to_string(),
            })?;

        let lowered = value.to_lowercase();
        Ok(self
            .config
            .affirmative_tokens
            .iter()
            .any(|token| token.to_lowercase() == lowered))
    }

    /// 日期列转换
    ///
    /// 按配置格式依次尝试（完整日期时间、纯日期按零点补齐），
    /// 最后兼容 Excel 日期序列号；均失败报日期格式错误
    fn parse_datetime(
        &self,
        canonical: &HashMap<String, String>,
        column: &str,
        row_number: usize,
    ) -> ImportResult<NaiveDateTime> {
        let value = self
            .resolve(canonical, column)
            .ok_or_else(|| ImportError::MalformedRow {
                row: row_number,
                field: column.to_string(),
            })?;

        for format in &self.config.date_formats {
            if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
                return Ok(dt);
            }
            if let Ok(date) = NaiveDate::parse_from_str(value, format) {
                if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                    return Ok(dt);
                }
            }
        }

        if let Some(dt) = Self::from_excel_serial(value) {
            return Ok(dt);
        }

        Err(ImportError::DateFormatError {
            row: row_number,
            field: column.to_string(),
            value: value.to_string(),
        })
    }

    /// Excel 日期序列号 → 日期时间（小数部分为当日时间占比）
    fn from_excel_serial(value: &str) -> Option<NaiveDateTime> {
        let serial = value.parse::<f64>().ok()?;
        if !serial.is_finite() || serial <= 0.0 {
            return None;
        }

        let days = serial.trunc() as i64;
        let seconds = (serial.fract() * 86_400.0).round() as i64;

        let (y, m, d) = EXCEL_EPOCH;
        let base = NaiveDate::from_ymd_opt(y, m, d)?;
        let date = base.checked_add_signed(Duration::days(days))?;
        date.and_hms_opt(0, 0, 0)?
            .checked_add_signed(Duration::seconds(seconds))
    }
}
