//! Serializable report sections
//!
//! These are the shapes handed back to whatever layer renders or ships a
//! report. They carry plain values only; no references into the input.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{EmployeeId, YearMonth};

/// Payroll statistics for one department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentStats {
    pub department: String,
    pub headcount: usize,
    pub total_salary: f64,
    pub average_salary: f64,
    pub median_salary: f64,
    pub min_salary: f64,
    pub max_salary: f64,
    /// `max_salary - min_salary`
    pub salary_range: f64,
}

/// One row of a sales leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerRevenue {
    pub employee_id: EmployeeId,
    pub name: String,
    pub revenue: f64,
}

/// Headline sales figures for a set of orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub order_count: usize,
    pub revenue_by_month: BTreeMap<YearMonth, f64>,
    /// Highest earners first, at most the configured `top_n`
    pub top_sellers: Vec<SellerRevenue>,
    /// Ids of employees selling strictly above the mean seller
    pub above_average: Vec<EmployeeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_date: Option<NaiveDate>,
    /// Revenue on orders whose employee could not be resolved
    pub unattributed_revenue: f64,
}

impl SalesSummary {
    /// Share of revenue that could be attributed to a known employee, in
    /// the range 0-100; `100.0` when there is no revenue at all
    pub fn attribution_rate(&self) -> f64 {
        if self.total_revenue > 0.0 {
            (self.total_revenue - self.unattributed_revenue) / self.total_revenue * 100.0
        } else {
            100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SalesSummary {
        SalesSummary {
            total_revenue: 200.0,
            order_count: 2,
            revenue_by_month: BTreeMap::from([(YearMonth::new(2024, 1).unwrap(), 200.0)]),
            top_sellers: vec![SellerRevenue {
                employee_id: 1,
                name: "Alice".to_string(),
                revenue: 150.0,
            }],
            above_average: vec![1],
            busiest_date: None,
            unattributed_revenue: 50.0,
        }
    }

    #[test]
    fn test_attribution_rate() {
        assert_eq!(summary().attribution_rate(), 75.0);
        let empty = SalesSummary {
            total_revenue: 0.0,
            unattributed_revenue: 0.0,
            ..summary()
        };
        assert_eq!(empty.attribution_rate(), 100.0);
    }

    #[test]
    fn test_summary_json_shape() {
        let json = serde_json::to_value(summary()).unwrap();
        assert_eq!(json["revenue_by_month"]["2024-01"], 200.0);
        assert_eq!(json["top_sellers"][0]["name"], "Alice");
        assert!(json.get("busiest_date").is_none());

        let back: SalesSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary());
    }
}
