//! Result rendering for the command line

pub mod formatter;
pub mod summary;

pub use formatter::ReportGenerator;
