//! Test fixtures and data builders
//!
//! The canonical sample data: eight employees across three departments,
//! seven orders spread over January to April 2024, and three projects.

pub mod builders;

use chrono::NaiveDate;

use crate::model::{Employee, Order, Project};

/// Common test fixtures for various scenarios
pub struct Fixtures;

impl Fixtures {
    /// Alice through Henry; total payroll 441000
    pub fn employees() -> Vec<Employee> {
        vec![
            Employee::new(1, "Alice", "Engineering", 28, 55000.0),
            Employee::new(2, "Bob", "Sales", 35, 48000.0),
            Employee::new(3, "Charlie", "Engineering", 42, 75000.0),
            Employee::new(4, "Dave", "HR", 29, 42000.0),
            Employee::new(5, "Eve", "Engineering", 31, 62000.0),
            Employee::new(6, "Frank", "Sales", 38, 51000.0),
            Employee::new(7, "Grace", "HR", 45, 58000.0),
            Employee::new(8, "Henry", "Engineering", 26, 50000.0),
        ]
    }

    /// The first seven employees (no Henry)
    pub fn seven_employees() -> Vec<Employee> {
        let mut employees = Self::employees();
        employees.truncate(7);
        employees
    }

    /// The first four employees, who placed every sample order
    pub fn sales_team() -> Vec<Employee> {
        let mut employees = Self::employees();
        employees.truncate(4);
        employees
    }

    /// Seven orders totalling 5550; monthly totals 2250, 800, 1500, 1000
    pub fn orders() -> Vec<Order> {
        vec![
            Order::new(1, 1, "Laptop", 2, 1000.0, date(2024, 1, 15)),
            Order::new(2, 1, "Mouse", 5, 50.0, date(2024, 1, 20)),
            Order::new(3, 2, "Keyboard", 3, 100.0, date(2024, 2, 10)),
            Order::new(4, 3, "Monitor", 1, 500.0, date(2024, 2, 15)),
            Order::new(5, 2, "Laptop", 1, 1000.0, date(2024, 3, 5)),
            Order::new(6, 4, "Mouse", 10, 50.0, date(2024, 3, 20)),
            Order::new(7, 1, "Monitor", 2, 500.0, date(2024, 4, 1)),
        ]
    }

    pub fn projects() -> Vec<Project> {
        vec![
            Project::new(1, "Project Alpha", vec![1, 3, 5]),
            Project::new(2, "Project Beta", vec![1, 2, 4]),
            Project::new(3, "Project Gamma", vec![3, 5, 6]),
        ]
    }
}

/// Shorthand for a valid calendar date
///
/// # Panics
///
/// Panics on an impossible date; fixtures only use literal dates.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
}
