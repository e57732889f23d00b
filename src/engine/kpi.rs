// ==========================================
// 交付绩效看板系统 - KPI 计算引擎
// ==========================================
// 职责: 完整率 / 准时率 / 平均延迟的汇总计算
// 口径: 完整与准时以源数据布尔标记为准，延迟由日期推算
// ==========================================

use crate::domain::{DeliveryKpis, DeliveryRecord};

pub struct KpiEngine;

impl KpiEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算交付KPI汇总
    ///
    /// # 参数
    /// - records: 交付记录集（任意长度）
    ///
    /// # 返回
    /// - Some(DeliveryKpis): 非空记录集的汇总
    /// - None: 空记录集（"无数据"状态，区别于各项为零）
    ///
    /// # 口径
    /// - 比率 = 计数 / 总数 × 100
    /// - 逐单延迟 = max(0, 实际 − 预计)（带小数天，提前不抵扣延迟）
    /// - 平均延迟 = 逐单截断延迟的均值
    pub fn compute_kpis(&self, records: &[DeliveryRecord]) -> Option<DeliveryKpis> {
        if records.is_empty() {
            return None;
        }

        let total = records.len();
        let completed = records.iter().filter(|r| r.is_complete).count();
        let on_time = records.iter().filter(|r| r.is_on_time).count();

        let clamped_delay_sum: f64 = records.iter().map(|r| r.delay_days().max(0.0)).sum();

        Some(DeliveryKpis {
            total_deliveries: total as i64,
            completed_deliveries: completed as i64,
            on_time_deliveries: on_time as i64,
            completion_rate: completed as f64 / total as f64 * 100.0,
            on_time_rate: on_time as f64 / total as f64 * 100.0,
            average_delay_days: clamped_delay_sum / total as f64,
        })
    }
}

impl Default for KpiEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(
        is_complete: bool,
        is_on_time: bool,
        estimated: (i32, u32, u32),
        actual: (i32, u32, u32),
    ) -> DeliveryRecord {
        DeliveryRecord {
            order_id: Some(1),
            delivery_id: Some(1),
            ordered_date: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            estimated_date: NaiveDate::from_ymd_opt(estimated.0, estimated.1, estimated.2)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            actual_date: NaiveDate::from_ymd_opt(actual.0, actual.1, actual.2)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            delivered_quantity: Some(100.0),
            total_quantity: Some(100.0),
            is_complete,
            is_on_time,
            row_number: 1,
        }
    }

    #[test]
    fn test_compute_kpis_empty_is_none() {
        assert_eq!(KpiEngine::new().compute_kpis(&[]), None);
    }

    #[test]
    fn test_compute_kpis_single_late_delivery() {
        // 完整但延迟 2 天
        let records = vec![record(true, false, (2024, 1, 10), (2024, 1, 12))];

        let kpis = KpiEngine::new().compute_kpis(&records).unwrap();

        assert_eq!(kpis.total_deliveries, 1);
        assert_eq!(kpis.completed_deliveries, 1);
        assert_eq!(kpis.on_time_deliveries, 0);
        assert_eq!(kpis.completion_rate, 100.0);
        assert_eq!(kpis.on_time_rate, 0.0);
        assert_eq!(kpis.average_delay_days, 2.0);
    }

    #[test]
    fn test_compute_kpis_rates_within_bounds() {
        let records = vec![
            record(true, true, (2024, 1, 10), (2024, 1, 9)),
            record(true, false, (2024, 1, 10), (2024, 1, 13)),
            record(false, false, (2024, 1, 10), (2024, 1, 25)),
        ];

        let kpis = KpiEngine::new().compute_kpis(&records).unwrap();

        assert!((0.0..=100.0).contains(&kpis.completion_rate));
        assert!((0.0..=100.0).contains(&kpis.on_time_rate));
        // 划分守恒：完整 + 不完整 = 总数
        assert_eq!(
            kpis.completed_deliveries + kpis.incomplete_deliveries(),
            kpis.total_deliveries
        );
        assert_eq!(
            kpis.on_time_deliveries + kpis.delayed_deliveries(),
            kpis.total_deliveries
        );
    }

    #[test]
    fn test_compute_kpis_early_deliveries_do_not_offset_late() {
        // 提前 5 天 + 延迟 2 天：提前单按 0 计，均值为 1
        let records = vec![
            record(true, true, (2024, 1, 10), (2024, 1, 5)),
            record(true, false, (2024, 1, 10), (2024, 1, 12)),
        ];

        let kpis = KpiEngine::new().compute_kpis(&records).unwrap();
        assert_eq!(kpis.average_delay_days, 1.0);
    }

    #[test]
    fn test_compute_kpis_all_on_time_average_is_zero() {
        let records = vec![
            record(true, true, (2024, 1, 10), (2024, 1, 10)),
            record(true, true, (2024, 1, 10), (2024, 1, 8)),
            record(true, true, (2024, 1, 10), (2024, 1, 1)),
        ];

        let kpis = KpiEngine::new().compute_kpis(&records).unwrap();
        assert_eq!(kpis.average_delay_days, 0.0);
    }

    #[test]
    fn test_compute_kpis_trusts_flags_over_quantities() {
        // 数量不一致也不影响完整口径（以源标记为准）
        let mut r = record(true, true, (2024, 1, 10), (2024, 1, 10));
        r.delivered_quantity = Some(50.0);
        r.total_quantity = Some(100.0);

        let kpis = KpiEngine::new().compute_kpis(&[r]).unwrap();
        assert_eq!(kpis.completed_deliveries, 1);
    }
}
