//! Record types consumed by the engine
//!
//! Records are plain value snapshots built by the caller (a loader, a
//! repository, a test fixture). The engine only ever reads them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod period;

pub use period::{DateRange, YearMonth};

pub type EmployeeId = u64;
pub type OrderId = u64;
pub type ProjectId = u64;

/// An employee; identity is `id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub age: u32,
    pub salary: f64,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        age: u32,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            age,
            salary,
        }
    }
}

/// A sales order line attributed to an employee
///
/// `employee_id` is advisory: it may point at an employee that does not
/// exist in the collection handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub employee_id: EmployeeId,
    pub product: String,
    pub quantity: u32,
    /// Unit price
    pub price: f64,
    pub order_date: NaiveDate,
}

impl Order {
    pub fn new(
        id: OrderId,
        employee_id: EmployeeId,
        product: impl Into<String>,
        quantity: u32,
        price: f64,
        order_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            employee_id,
            product: product.into(),
            quantity,
            price,
            order_date,
        }
    }

    /// Line amount: quantity times unit price
    pub fn amount(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    pub fn month(&self) -> YearMonth {
        YearMonth::from(self.order_date)
    }
}

/// A project and the ids of the employees working on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// May contain duplicates; membership is a set relation.
    pub member_ids: Vec<EmployeeId>,
}

impl Project {
    pub fn new(id: ProjectId, name: impl Into<String>, member_ids: Vec<EmployeeId>) -> Self {
        Self {
            id,
            name: name.into(),
            member_ids,
        }
    }

    pub fn has_member(&self, employee_id: EmployeeId) -> bool {
        self.member_ids.contains(&employee_id)
    }
}
