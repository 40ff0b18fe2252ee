pub mod error;
pub mod histogram;
pub mod record;
pub mod window;

pub use error::Error;
pub use histogram::{bucketize, HourCount, HourHistogram, HOURS_PER_DAY};
pub use record::{ConfirmedSignature, Timestamped};
pub use window::{select_best_window, Selection, Window, WindowConfig, WindowSet};

pub type Result<T> = std::result::Result<T, Error>;
