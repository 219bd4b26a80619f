//! Test data builders for complex test scenarios

use chrono::NaiveDate;

use super::date;
use crate::model::{Employee, EmployeeId, Order, OrderId, Project, ProjectId};

/// Builder for creating test employees
pub struct EmployeeBuilder {
    employee: Employee,
}

impl EmployeeBuilder {
    pub fn new(id: EmployeeId) -> Self {
        Self {
            employee: Employee::new(id, format!("Employee {id}"), "General", 30, 40000.0),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.employee.name = name.into();
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.employee.department = department.into();
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.employee.age = age;
        self
    }

    pub fn salary(mut self, salary: f64) -> Self {
        self.employee.salary = salary;
        self
    }

    pub fn build(self) -> Employee {
        self.employee
    }
}

/// Builder for creating test orders
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new(id: OrderId) -> Self {
        Self {
            order: Order::new(id, 1, "Widget", 1, 1.0, date(2024, 1, 1)),
        }
    }

    pub fn employee(mut self, employee_id: EmployeeId) -> Self {
        self.order.employee_id = employee_id;
        self
    }

    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.order.product = product.into();
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.order.quantity = quantity;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.order.price = price;
        self
    }

    pub fn on(mut self, order_date: NaiveDate) -> Self {
        self.order.order_date = order_date;
        self
    }

    pub fn build(self) -> Order {
        self.order
    }
}

/// Builder for creating test projects
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    pub fn new(id: ProjectId) -> Self {
        Self {
            project: Project::new(id, format!("Project {id}"), Vec::new()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.project.name = name.into();
        self
    }

    pub fn member(mut self, employee_id: EmployeeId) -> Self {
        self.project.member_ids.push(employee_id);
        self
    }

    pub fn members(mut self, employee_ids: impl IntoIterator<Item = EmployeeId>) -> Self {
        self.project.member_ids.extend(employee_ids);
        self
    }

    pub fn build(self) -> Project {
        self.project
    }
}
