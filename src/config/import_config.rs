// ==========================================
// 交付绩效看板系统 - 导入配置
// ==========================================
// 职责: 表头契约与单元格解析规则的集中定义
// 注意: 列名与肯定词为源数据地区的固定文案，默认值即生产口径
// ==========================================

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ==========================================
// 标准列名（源文件表头契约）
// ==========================================
pub mod columns {
    pub const ORDER_ID: &str = "Orden ID";
    pub const DELIVERY_ID: &str = "Entrega ID";
    pub const ORDER_DATE: &str = "Fecha Pedido";
    pub const ESTIMATED_DATE: &str = "Fecha Estimada";
    pub const ACTUAL_DATE: &str = "Fecha Real";
    pub const DELIVERED_QUANTITY: &str = "Cantidad Entregada";
    pub const TOTAL_QUANTITY: &str = "Cantidad Total";
    pub const IS_COMPLETE: &str = "Entrega Completa?";
    pub const IS_ON_TIME: &str = "A Tiempo?";

    /// 必需列全集（缺任意一列即拒绝整个文件）
    pub const REQUIRED: [&str; 9] = [
        ORDER_ID,
        DELIVERY_ID,
        ORDER_DATE,
        ESTIMATED_DATE,
        ACTUAL_DATE,
        DELIVERED_QUANTITY,
        TOTAL_QUANTITY,
        IS_COMPLETE,
        IS_ON_TIME,
    ];
}

/// 布尔列的肯定词（去空格后不区分大小写比较）
/// "true" 对应 Excel 布尔单元格的文本化形式
const AFFIRMATIVE_TOKENS: [&str; 3] = ["sí", "si", "true"];

/// 日期解析格式（按序尝试；日期格式按当天零点补齐时间）
const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y",
];

// ==========================================
// ImportConfig - 导入配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// 必需列列表（去空格、不区分大小写匹配表头）
    pub required_columns: Vec<String>,
    /// 布尔列肯定词表
    pub affirmative_tokens: Vec<String>,
    /// 日期解析格式（chrono 格式串，按序尝试）
    pub date_formats: Vec<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            required_columns: columns::REQUIRED.iter().map(|c| c.to_string()).collect(),
            affirmative_tokens: AFFIRMATIVE_TOKENS.iter().map(|t| t.to_string()).collect(),
            date_formats: DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl ImportConfig {
    /// 从 JSON 文件加载配置（用于部署环境覆写默认口径）
    ///
    /// # 参数
    /// - path: JSON 配置文件路径
    ///
    /// # 返回
    /// - Ok(ImportConfig): 加载并校验通过的配置
    /// - Err: 文件读取、反序列化或校验失败
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取导入配置失败: {}", path.display()))?;
        let config: ImportConfig = serde_json::from_str(&content)
            .with_context(|| format!("解析导入配置失败: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置完整性
    pub fn validate(&self) -> Result<()> {
        if self.required_columns.is_empty() {
            bail!("导入配置非法: required_columns 不能为空");
        }
        if self.affirmative_tokens.is_empty() {
            bail!("导入配置非法: affirmative_tokens 不能为空");
        }
        if self.date_formats.is_empty() {
            bail!("导入配置非法: date_formats 不能为空");
        }
        Ok(())
    }
}
