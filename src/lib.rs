//! # Rollup
//!
//! An in-memory reporting engine that groups, aggregates, joins, ranks and
//! filters collections of employee, order and project records.
//!
//! The engine performs no I/O. Callers load records however they like,
//! hand the engine read-only slices, and get plain values back.
//!
//! ## Usage
//!
//! ```ignore
//! use rollup::{ReportConfig, ReportEngine};
//!
//! let engine = ReportEngine::new(ReportConfig::from_env()?)?;
//! let top = engine.top_paid(&employees, 3);
//! let trend = engine.monthly_revenue(&orders);
//! ```
//!
//! ## Modules
//!
//! - `model` - Employee, Order and Project records plus calendar periods
//! - `grouping` - Group-by primitives and named merge policies
//! - `aggregate` - Sum, count, average, min/max, range, median and mergeable accumulators
//! - `join` - Foreign-key indexes and project membership resolution
//! - `ranking` - Best/worst selection, top-N, full ranking and above-average filtering
//! - `report` - The `ReportEngine` façade composing the above into named queries
//! - `config` - Layered report configuration
//! - `logging` - Tracing subscriber setup
//! - `testing` - Sample datasets, builders and assertions for tests
pub mod aggregate;
pub mod config;
pub mod error;
pub mod grouping;
pub mod join;
pub mod logging;
pub mod model;
pub mod ranking;
pub mod report;

pub mod testing;


pub use config::{ConfigProblem, ReportConfig};
pub use error::{Error, Result};
pub use model::{DateRange, Employee, EmployeeId, Order, OrderId, Project, ProjectId, YearMonth};
pub use report::{DepartmentStats, ReportEngine, SalesSummary, SellerRevenue};
