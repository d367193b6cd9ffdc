mod report;
mod report_location;
mod report_update;

pub use report::{CreateReport, Report, ReportCategory, ReportStatus, UpdateReport, WeatherImpact};
pub use report_location::{Boundaries, Location};
pub use report_update::ReportUpdate;
