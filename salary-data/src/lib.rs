pub mod config;
pub mod loader;

pub use config::{ConfigFileError, load_withholding_config, parse_withholding_config};
pub use loader::{PayrollLoader, PayrollLoaderError, PayrollRecord, PayrollReportRow};
