pub mod chart;
pub mod error;
pub mod export;
pub mod summary;

pub use error::Error;
pub use export::ReportFormat;
pub use summary::ActivityReport;

pub type Result<T> = std::result::Result<T, Error>;
