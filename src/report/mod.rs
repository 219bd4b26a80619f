//! Composed report queries
//!
//! `ReportEngine` is the façade over grouping, aggregation, joins and
//! ranking. Every query is a pure function of its arguments and the
//! engine's configuration: it borrows the record slices it is given,
//! never mutates them, and keeps no state between calls. "No data" is
//! expressed as an empty collection, `None`, or a documented numeric
//! default, never as an error.
//!
//! Queries are grouped by the records they are mostly about:
//!
//! - `employees` - headcount, payroll and roster queries
//! - `orders` - revenue, product and sales ranking queries
//! - `projects` - project membership queries
//! - `summary` - serializable report sections built from the above

use crate::config::ReportConfig;
use crate::error::Result;

mod employees;
mod orders;
mod projects;
pub mod summary;

pub use summary::{DepartmentStats, SalesSummary, SellerRevenue};

/// Report façade configured once and queried many times
#[derive(Debug, Clone, Default)]
pub struct ReportEngine {
    config: ReportConfig,
}

impl ReportEngine {
    /// Create an engine, rejecting an invalid configuration
    pub fn new(config: ReportConfig) -> Result<Self> {
        config.ensure_valid()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }
}
