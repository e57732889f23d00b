// ==========================================
// 交付绩效看板系统 - 分析派生视图
// ==========================================
// 职责: KPI 汇总与延迟分布的类型定义
// 用途: 引擎层写入，驾驶舱 UI 只读展示
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// DeliveryKpis - 交付KPI汇总
// ==========================================
// 每次数据变更后从零重算，不做增量维护
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryKpis {
    pub total_deliveries: i64,     // 交付总数
    pub completed_deliveries: i64, // 完整交付数
    pub on_time_deliveries: i64,   // 准时交付数
    pub completion_rate: f64,      // 完整率（0-100）
    pub on_time_rate: f64,         // 准时率（0-100）
    pub average_delay_days: f64,   // 平均延迟天数（逐单按 0 截断后取均值）
}

impl DeliveryKpis {
    /// 不完整交付数（驾驶舱"部分交付"卡片口径）
    pub fn incomplete_deliveries(&self) -> i64 {
        self.total_deliveries - self.completed_deliveries
    }

    /// 延迟交付数（驾驶舱"逾期"卡片口径）
    pub fn delayed_deliveries(&self) -> i64 {
        self.total_deliveries - self.on_time_deliveries
    }
}

// ==========================================
// DelayRange - 延迟区间
// ==========================================
// 五个固定、有序、互斥的区间；展示标签为源数据地区的固定文案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DelayRange {
    /// 延迟 ≤ 0 天
    OnTimeOrEarly,
    /// 延迟 1-2 天
    OneToTwo,
    /// 延迟 3-5 天
    ThreeToFive,
    /// 延迟 6-10 天
    SixToTen,
    /// 延迟 > 10 天
    MoreThanTen,
}

impl DelayRange {
    /// 固定展示顺序
    pub const ALL: [DelayRange; 5] = [
        DelayRange::OnTimeOrEarly,
        DelayRange::OneToTwo,
        DelayRange::ThreeToFive,
        DelayRange::SixToTen,
        DelayRange::MoreThanTen,
    ];

    /// 按延迟整天数归档
    pub fn classify(delay_days: i64) -> Self {
        if delay_days <= 0 {
            DelayRange::OnTimeOrEarly
        } else if delay_days <= 2 {
            DelayRange::OneToTwo
        } else if delay_days <= 5 {
            DelayRange::ThreeToFive
        } else if delay_days <= 10 {
            DelayRange::SixToTen
        } else {
            DelayRange::MoreThanTen
        }
    }

    /// 展示标签（固定西语文案，与图表列顺序一致）
    pub fn label(&self) -> &'static str {
        match self {
            DelayRange::OnTimeOrEarly => "A tiempo o adelantado",
            DelayRange::OneToTwo => "1-2 días",
            DelayRange::ThreeToFive => "3-5 días",
            DelayRange::SixToTen => "6-10 días",
            DelayRange::MoreThanTen => "Más de 10 días",
        }
    }

    /// 在固定展示顺序中的下标
    pub fn index(&self) -> usize {
        match self {
            DelayRange::OnTimeOrEarly => 0,
            DelayRange::OneToTwo => 1,
            DelayRange::ThreeToFive => 2,
            DelayRange::SixToTen => 3,
            DelayRange::MoreThanTen => 4,
        }
    }
}

// ==========================================
// DelayBucket - 延迟分布直方图单元
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayBucket {
    pub range: DelayRange, // 区间
    pub label: String,     // 展示标签
    pub count: i64,        // 记录数
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(DelayRange::classify(-3), DelayRange::OnTimeOrEarly);
        assert_eq!(DelayRange::classify(0), DelayRange::OnTimeOrEarly);
        assert_eq!(DelayRange::classify(1), DelayRange::OneToTwo);
        assert_eq!(DelayRange::classify(2), DelayRange::OneToTwo);
        assert_eq!(DelayRange::classify(3), DelayRange::ThreeToFive);
        assert_eq!(DelayRange::classify(5), DelayRange::ThreeToFive);
        assert_eq!(DelayRange::classify(6), DelayRange::SixToTen);
        assert_eq!(DelayRange::classify(10), DelayRange::SixToTen);
        assert_eq!(DelayRange::classify(11), DelayRange::MoreThanTen);
    }

    #[test]
    fn test_all_order_matches_index() {
        for (idx, range) in DelayRange::ALL.iter().enumerate() {
            assert_eq!(range.index(), idx);
        }
    }

    #[test]
    fn test_kpi_derived_counts() {
        let kpis = DeliveryKpis {
            total_deliveries: 10,
            completed_deliveries: 7,
            on_time_deliveries: 4,
            completion_rate: 70.0,
            on_time_rate: 40.0,
            average_delay_days: 1.5,
        };
        assert_eq!(kpis.incomplete_deliveries(), 3);
        assert_eq!(kpis.delayed_deliveries(), 6);
    }
}
