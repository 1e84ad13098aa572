pub mod dates;
pub mod emails;
pub mod status;
pub mod urls;

pub use dates::{due_dates, DueDate};
pub use emails::{emails_enabled, EmailStatus};
pub use status::{course_run_status, course_run_status_at, CourseRunStatus};
pub use urls::{course_run_url, RequestContext};

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no block {} in the content store", .0)]
    UnknownBlock(String),

    #[error("no route registered as {}", .0)]
    UnknownRoute(String),

    #[error("upstream service error: {}", .0)]
    Service(#[from] Box<dyn std::error::Error + Send + Sync>),
}
