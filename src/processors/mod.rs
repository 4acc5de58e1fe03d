pub mod dataset;
pub mod integrity_checker;

pub use dataset::Dataset;
pub use integrity_checker::{IntegrityChecker, IntegrityReport, IntegrityViolation, ViolationType};
