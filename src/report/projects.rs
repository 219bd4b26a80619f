//! Project membership queries

use tracing::debug;

use super::ReportEngine;
use crate::aggregate;
use crate::join::Membership;
use crate::model::{Employee, EmployeeId, Project};

impl ReportEngine {
    /// Mean age of the project's members that exist in `employees`;
    /// `0.0` when none of them do
    pub fn average_age_of_project_members(&self, employees: &[Employee], project: &Project) -> f64 {
        let members = Membership::members_of(project, employees);
        aggregate::average(members.iter().map(|e| f64::from(e.age)))
    }

    /// Employees that belong to more than one distinct project
    pub fn employees_in_multiple_projects<'a>(
        &self,
        employees: &'a [Employee],
        projects: &[Project],
    ) -> Vec<&'a Employee> {
        let counts = Membership::new(projects).participation_counts();
        debug!(
            "{} employee ids appear across {} projects",
            counts.len(),
            projects.len()
        );
        employees
            .iter()
            .filter(|e| counts.get(&e.id).copied().unwrap_or(0) > 1)
            .collect()
    }

    pub fn projects_of<'p>(
        &self,
        projects: &'p [Project],
        employee_id: EmployeeId,
    ) -> Vec<&'p Project> {
        Membership::new(projects).projects_of(employee_id)
    }

    pub fn project_members<'a>(
        &self,
        project: &Project,
        employees: &'a [Employee],
    ) -> Vec<&'a Employee> {
        Membership::members_of(project, employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::testing::helpers::names;
    use crate::testing::{Fixtures, ProjectBuilder};

    fn engine() -> ReportEngine {
        ReportEngine::default()
    }

    #[test]
    fn test_average_age_of_project_members() {
        let project = ProjectBuilder::new(1).members([1, 3, 5]).build();
        let avg = engine().average_age_of_project_members(&Fixtures::employees(), &project);
        assert_approx_eq!(avg, 33.67);
    }

    #[test]
    fn test_average_age_without_resolvable_members_is_zero() {
        let empty = ProjectBuilder::new(1).build();
        let ghosts = ProjectBuilder::new(2).members([100, 200]).build();
        let employees = Fixtures::employees();
        assert_eq!(engine().average_age_of_project_members(&employees, &empty), 0.0);
        assert_eq!(engine().average_age_of_project_members(&employees, &ghosts), 0.0);
    }

    #[test]
    fn test_duplicate_member_ids_do_not_skew_average() {
        let project = ProjectBuilder::new(1).members([1, 1, 1, 3]).build();
        let avg = engine().average_age_of_project_members(&Fixtures::employees(), &project);
        assert_approx_eq!(avg, 35.0);
    }

    #[test]
    fn test_employees_in_multiple_projects() {
        let employees = Fixtures::employees();
        let result = engine().employees_in_multiple_projects(&employees, &Fixtures::projects());
        assert_eq!(names(result), vec!["Alice", "Charlie", "Eve"]);
    }

    #[test]
    fn test_repeated_id_in_one_project_is_not_multiple_projects() {
        let employees = Fixtures::employees();
        let projects = vec![ProjectBuilder::new(1).members([2, 2]).build()];
        assert!(engine()
            .employees_in_multiple_projects(&employees, &projects)
            .is_empty());
    }

    #[test]
    fn test_projects_of_and_members() {
        let projects = Fixtures::projects();
        let employees = Fixtures::employees();

        let names_of: Vec<_> = engine()
            .projects_of(&projects, 5)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names_of, vec!["Project Alpha", "Project Gamma"]);

        let members = engine().project_members(&projects[1], &employees);
        assert_eq!(names(members), vec!["Alice", "Bob", "Dave"]);
    }
}
