pub mod args;
pub mod errors;
pub mod grype;
pub mod input;
pub mod output;
pub mod report;
