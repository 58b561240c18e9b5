//! Rules module - rule schema, repository, and result types

pub mod repository;
pub mod results;
pub mod schema;

pub use repository::RuleRepository;
pub use results::{Finding, ScanResult, Severity};
pub use schema::{CheckType, Rule};
