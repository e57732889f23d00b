// ==========================================
// 交付绩效看板系统 - 交付领域模型
// ==========================================
// 职责: 一行发货明细的规范化表示
// 生命周期: 导入时构造一次，之后只读；会话结束或重新导入即废弃
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 一天的秒数（延迟换算基准）
pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

// ==========================================
// DeliveryRecord - 交付记录
// ==========================================
// 用途: 导入层写入，引擎层只读
// 注意: 标识与数量字段来自宽松数值转换，缺失或非数值时为 None；
//       引擎不读取这些字段，完成/准时口径以源数据布尔标记为准
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    // ===== 标识 =====
    pub order_id: Option<i64>,    // 订单号（Orden ID）
    pub delivery_id: Option<i64>, // 交付单号（Entrega ID）

    // ===== 时间信息 =====
    pub ordered_date: NaiveDateTime,   // 下单日期（Fecha Pedido）
    pub estimated_date: NaiveDateTime, // 预计交付日期（Fecha Estimada）
    pub actual_date: NaiveDateTime,    // 实际交付日期（Fecha Real）

    // ===== 数量信息 =====
    pub delivered_quantity: Option<f64>, // 已交付数量（Cantidad Entregada）
    pub total_quantity: Option<f64>,     // 订单总数量（Cantidad Total）

    // ===== 状态标记（源数据口径，不做数量交叉校验）=====
    pub is_complete: bool, // 是否完整交付（Entrega Completa?）
    pub is_on_time: bool,  // 是否准时交付（A Tiempo?）

    // ===== 元信息 =====
    pub row_number: usize, // 原始文件数据行号（从 1 开始，用于错误定位）
}

impl DeliveryRecord {
    /// 延迟天数（实际 − 预计，按秒折算为天，带小数，可为负）
    pub fn delay_days(&self) -> f64 {
        let delta = self.actual_date - self.estimated_date;
        delta.num_seconds() as f64 / SECONDS_PER_DAY
    }

    /// 延迟整天数（向上取整，不截断为零，可为负）
    ///
    /// 用于延迟分布分桶：跨入新的一天即计入下一档
    pub fn delay_days_ceil(&self) -> i64 {
        self.delay_days().ceil() as i64
    }
}

// ==========================================
// ImportOutcome - 导入结果
// ==========================================
// 用途: 导入管道产物（批次信息 + 规范化记录集）
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub batch_id: String,           // 批次 ID（UUID）
    pub file_name: Option<String>,  // 源文件名
    pub total_rows: usize,          // 成功映射的数据行数
    pub records: Vec<DeliveryRecord>, // 规范化记录集
    pub elapsed: Duration,          // 导入耗时
}
