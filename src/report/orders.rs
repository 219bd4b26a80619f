//! Revenue, product and sales ranking queries
//!
//! Revenue is always the line amount, `quantity * price`. Queries keyed by
//! raw employee id take orders at face value; queries that need employee
//! attributes resolve `employee_id` first and skip orders that point at no
//! known employee.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use tracing::debug;

use super::summary::{SalesSummary, SellerRevenue};
use super::ReportEngine;
use crate::aggregate;
use crate::grouping;
use crate::join::{self, ForeignKeyIndex};
use crate::model::{DateRange, Employee, EmployeeId, Order, YearMonth};
use crate::ranking::{self, Ranked};

/// Revenue per resolvable employee, alongside the index used to resolve it
struct AttributedRevenue<'a> {
    index: ForeignKeyIndex<EmployeeId, &'a Employee>,
    by_employee: BTreeMap<EmployeeId, f64>,
    unattributed: f64,
}

impl<'a> AttributedRevenue<'a> {
    fn compute(employees: &'a [Employee], orders: &[Order]) -> Self {
        let index = ForeignKeyIndex::build(employees, |e| e.id, |e| e);
        let (resolved, dangling) = join::partition_resolved(orders, |o| o.employee_id, &index);
        if !dangling.is_empty() {
            debug!(
                "{} of {} orders reference unknown employees",
                dangling.len(),
                orders.len()
            );
        }

        Self {
            by_employee: grouping::group_sum(resolved, |o| o.employee_id, |o| o.amount()),
            unattributed: aggregate::sum(dangling.iter().map(|o| o.amount())),
            index,
        }
    }

    fn employee(&self, id: EmployeeId) -> Option<&'a Employee> {
        self.index.resolve(&id).copied()
    }
}

impl ReportEngine {
    pub fn total_revenue(&self, orders: &[Order]) -> f64 {
        aggregate::sum(orders.iter().map(Order::amount))
    }

    /// Revenue per employee id as recorded on the orders, resolved or not
    pub fn revenue_by_employee(&self, orders: &[Order]) -> BTreeMap<EmployeeId, f64> {
        grouping::group_sum(orders, |o| o.employee_id, |o| o.amount())
    }

    /// Orders dated within `range`, both ends included
    pub fn orders_between<'a>(&self, orders: &'a [Order], range: &DateRange) -> Vec<&'a Order> {
        orders
            .iter()
            .filter(|o| range.contains(o.order_date))
            .collect()
    }

    pub fn quantity_by_product(&self, orders: &[Order]) -> BTreeMap<String, u64> {
        grouping::group_fold(
            orders,
            |o| o.product.clone(),
            || 0u64,
            |total, o| *total += u64::from(o.quantity),
        )
    }

    /// Employee with the highest revenue among those the orders resolve to
    pub fn top_sales_employee<'a>(
        &self,
        employees: &'a [Employee],
        orders: &[Order],
    ) -> Option<&'a Employee> {
        let revenue = AttributedRevenue::compute(employees, orders);
        ranking::best_by(&revenue.by_employee, |(_, total)| **total)
            .and_then(|(id, _)| revenue.employee(*id))
    }

    /// The `n` largest order lines of every department, as product names
    ///
    /// A product appears once per qualifying order, so it can show up more
    /// than once in the same department.
    pub fn top_products_by_department(
        &self,
        employees: &[Employee],
        orders: &[Order],
        n: usize,
    ) -> BTreeMap<String, Vec<String>> {
        let departments =
            ForeignKeyIndex::build(employees, |e| e.id, |e| e.department.clone());
        let by_department = join::join_group_by(orders, |o| o.employee_id, &departments);
        debug!("Ranking products for {} departments", by_department.len());

        by_department
            .into_iter()
            .map(|(department, lines)| {
                let products = ranking::top_n(lines, n, |o| o.amount())
                    .into_iter()
                    .map(|o| o.product.clone())
                    .collect();
                (department, products)
            })
            .collect()
    }

    pub fn monthly_revenue(&self, orders: &[Order]) -> BTreeMap<YearMonth, f64> {
        grouping::group_sum(orders, |o| o.month(), |o| o.amount())
    }

    /// Employees whose revenue is strictly above the mean revenue of all
    /// employees with at least one order, in employee order
    pub fn above_average_sellers<'a>(
        &self,
        employees: &'a [Employee],
        orders: &[Order],
    ) -> Vec<&'a Employee> {
        let revenue = AttributedRevenue::compute(employees, orders);
        let selected: HashSet<EmployeeId> = ranking::above_average(&revenue.by_employee)
            .into_iter()
            .collect();
        employees
            .iter()
            .filter(|e| selected.contains(&e.id))
            .collect()
    }

    /// Date with the most orders; the earliest such date on ties
    pub fn busiest_order_date(&self, orders: &[Order]) -> Option<NaiveDate> {
        let per_day = grouping::group_count(orders, |o| o.order_date);
        ranking::best_by(per_day, |(_, count)| *count as f64).map(|(date, _)| date)
    }

    /// Every employee by descending revenue
    ///
    /// Employees without orders rank with `0.0` at the bottom instead of
    /// being dropped. Equal revenue keeps employee order.
    pub fn sales_ranking<'a>(
        &self,
        employees: &'a [Employee],
        orders: &[Order],
    ) -> Vec<Ranked<&'a Employee>> {
        let revenue = self.revenue_by_employee(orders);
        ranking::rank_with_default(employees, |e| e.id, &revenue, 0.0)
    }

    /// Headline sales figures in one pass over the shared intermediates
    pub fn sales_summary(&self, employees: &[Employee], orders: &[Order]) -> SalesSummary {
        let revenue = AttributedRevenue::compute(employees, orders);
        let ranked = ranking::rank_with_default(employees, |e| e.id, &revenue.by_employee, 0.0);

        let top_sellers = ranked
            .into_iter()
            .take(self.config.top_n)
            .map(|r| SellerRevenue {
                employee_id: r.item.id,
                name: r.item.name.clone(),
                revenue: r.value,
            })
            .collect();

        let above_average = ranking::above_average(&revenue.by_employee);

        SalesSummary {
            total_revenue: self.total_revenue(orders),
            order_count: orders.len(),
            revenue_by_month: self.monthly_revenue(orders),
            top_sellers,
            above_average,
            busiest_date: self.busiest_order_date(orders),
            unattributed_revenue: revenue.unattributed,
        }
    }
}
