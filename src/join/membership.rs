//! Many-to-many resolution between projects and employees

use std::collections::{BTreeMap, HashSet};

use crate::model::{Employee, EmployeeId, Project};

/// Resolves project membership over a borrowed project list
#[derive(Debug, Clone, Copy)]
pub struct Membership<'a> {
    projects: &'a [Project],
}

impl<'a> Membership<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self { projects }
    }

    /// Projects listing `employee_id` among their members, in input order
    pub fn projects_of(&self, employee_id: EmployeeId) -> Vec<&'a Project> {
        self.projects
            .iter()
            .filter(|p| p.has_member(employee_id))
            .collect()
    }

    /// Employees of `project` that exist in `employees`, in employee order
    ///
    /// Member ids with no matching employee are ignored.
    pub fn members_of<'e>(project: &Project, employees: &'e [Employee]) -> Vec<&'e Employee> {
        let ids: HashSet<EmployeeId> = project.member_ids.iter().copied().collect();
        employees.iter().filter(|e| ids.contains(&e.id)).collect()
    }

    /// Number of distinct projects each employee id belongs to
    ///
    /// An id listed twice in the same project counts once for it.
    pub fn participation_counts(&self) -> BTreeMap<EmployeeId, usize> {
        let mut counts = BTreeMap::new();
        for project in self.projects {
            let distinct: HashSet<EmployeeId> = project.member_ids.iter().copied().collect();
            for id in distinct {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
        counts
    }
}
