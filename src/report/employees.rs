//! Employee roster and payroll queries

use std::collections::BTreeMap;

use tracing::debug;

use super::summary::DepartmentStats;
use super::ReportEngine;
use crate::aggregate::{self, Aggregator};
use crate::grouping::{self, combine};
use crate::model::Employee;
use crate::ranking;

impl ReportEngine {
    /// Employees strictly older than `age`
    pub fn older_than<'a>(&self, employees: &'a [Employee], age: u32) -> Vec<&'a Employee> {
        employees.iter().filter(|e| e.age > age).collect()
    }

    pub fn names<'a>(&self, employees: &'a [Employee]) -> Vec<&'a str> {
        employees.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn count_in_department(&self, employees: &[Employee], department: &str) -> usize {
        employees
            .iter()
            .filter(|e| e.department == department)
            .count()
    }

    pub fn group_by_department<'a>(
        &self,
        employees: &'a [Employee],
    ) -> BTreeMap<String, Vec<&'a Employee>> {
        grouping::group_by(employees, |e| e.department.clone())
    }

    pub fn names_by_department<'a>(
        &self,
        employees: &'a [Employee],
    ) -> BTreeMap<String, Vec<&'a str>> {
        grouping::group_map(employees, |e| e.department.clone(), |e: &'a Employee| {
            e.name.as_str()
        })
    }

    /// Names of employees earning at least the configured threshold,
    /// joined with the configured separator
    pub fn high_earner_names(&self, employees: &[Employee]) -> String {
        let threshold = self.config.high_earner_salary;
        employees
            .iter()
            .filter(|e| e.salary >= threshold)
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join(&self.config.name_separator)
    }

    pub fn average_salary_by_department(&self, employees: &[Employee]) -> BTreeMap<String, f64> {
        grouping::group_aggregate(
            employees,
            |e| e.department.clone(),
            |e| e.salary,
            Aggregator::Average,
        )
    }

    pub fn highest_paid<'a>(&self, employees: &'a [Employee]) -> Option<&'a Employee> {
        ranking::best_by(employees, |e| e.salary)
    }

    /// Best paid employee of every department; the earlier record wins ties
    pub fn top_earner_per_department<'a>(
        &self,
        employees: &'a [Employee],
    ) -> BTreeMap<String, &'a Employee> {
        self.group_by_department(employees)
            .into_iter()
            .filter_map(|(department, members)| {
                ranking::best_by(members, |e| e.salary).map(|best| (department, best))
            })
            .collect()
    }

    /// At most `n` employees by descending salary
    pub fn top_paid<'a>(&self, employees: &'a [Employee], n: usize) -> Vec<&'a Employee> {
        ranking::top_n(employees, n, |e| e.salary)
    }

    /// Departments whose payroll reaches the configured floor
    pub fn departments_above_payroll_floor(&self, employees: &[Employee]) -> Vec<String> {
        let floor = self.config.department_payroll_floor;
        grouping::group_sum(employees, |e| e.department.clone(), |e| e.salary)
            .into_iter()
            .filter(|(_, total)| *total >= floor)
            .map(|(department, _)| department)
            .collect()
    }

    pub fn total_salary(&self, employees: &[Employee]) -> f64 {
        aggregate::sum(employees.iter().map(|e| e.salary))
    }

    pub fn max_salary_by_department(&self, employees: &[Employee]) -> BTreeMap<String, f64> {
        grouping::group_merge(
            employees,
            |e| e.department.clone(),
            |e| e.salary,
            combine::keep_max,
        )
    }

    /// Case-insensitive substring match on the name
    pub fn name_contains<'a>(&self, employees: &'a [Employee], keyword: &str) -> Vec<&'a Employee> {
        let needle = keyword.to_lowercase();
        employees
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Ascending by age; employees of equal age keep input order
    pub fn sorted_by_age<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        let mut sorted: Vec<&Employee> = employees.iter().collect();
        sorted.sort_by_key(|e| e.age);
        sorted
    }

    pub fn median_salary(&self, employees: &[Employee]) -> f64 {
        aggregate::median(employees.iter().map(|e| e.salary))
    }

    /// max - min salary of every department
    pub fn salary_range_by_department(&self, employees: &[Employee]) -> BTreeMap<String, f64> {
        grouping::group_aggregate(
            employees,
            |e| e.department.clone(),
            |e| e.salary,
            Aggregator::Range,
        )
    }

    /// Headcount per age band, keyed by the band's lower bound
    ///
    /// With the default width of 10, ages 20 to 29 fall in band `20`.
    pub fn count_by_age_band(&self, employees: &[Employee]) -> BTreeMap<u32, usize> {
        let width = self.config.age_band_width;
        grouping::group_count(employees, |e| e.age / width * width)
    }

    pub fn any_younger_than(&self, employees: &[Employee], age: u32) -> bool {
        employees.iter().any(|e| e.age < age)
    }

    /// True when every employee belongs to `department`, including when
    /// there are no employees at all
    pub fn all_in_department(&self, employees: &[Employee], department: &str) -> bool {
        employees.iter().all(|e| e.department == department)
    }

    pub fn youngest<'a>(&self, employees: &'a [Employee]) -> Option<&'a Employee> {
        ranking::worst_by(employees, |e| f64::from(e.age))
    }

    pub fn first_in_department<'a>(
        &self,
        employees: &'a [Employee],
        department: &str,
    ) -> Option<&'a Employee> {
        employees.iter().find(|e| e.department == department)
    }

    /// Payroll statistics for every department, ordered by department name
    pub fn department_stats(&self, employees: &[Employee]) -> Vec<DepartmentStats> {
        let salaries =
            grouping::group_map(employees, |e| e.department.clone(), |e: &Employee| e.salary);
        debug!("Computing stats for {} departments", salaries.len());

        salaries
            .into_iter()
            .filter_map(|(department, values)| {
                let summary = aggregate::summarize(values.iter().copied())?;
                Some(DepartmentStats {
                    department,
                    headcount: summary.count,
                    total_salary: summary.sum,
                    average_salary: summary.average,
                    median_salary: aggregate::median(values),
                    min_salary: summary.min,
                    max_salary: summary.max,
                    salary_range: summary.range(),
                })
            })
            .collect()
    }
}
