//! Dashboard reporting queries.

mod queries;

pub use queries::ReportingQueries;
