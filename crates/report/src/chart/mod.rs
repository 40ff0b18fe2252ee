pub mod hourly;
pub mod wedge;

pub use hourly::{HourlyChart, HourlyChartData};
pub use wedge::Wedge;
