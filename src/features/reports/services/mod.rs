mod report_service;
mod report_store;
mod report_validator;
mod submission_service;
mod update_service;

pub use report_service::{RegistrySummary, ReportService};
pub use report_store::ReportStore;
pub use report_validator::ReportValidator;
pub use submission_service::SubmissionService;
pub use update_service::UpdateService;
