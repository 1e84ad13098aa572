use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Days a passing certificate must have existed before a self-paced run
/// counts as completed.
const CERTIFICATE_AGE_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pacing {
    Instructor,
    #[serde(rename = "self")]
    SelfPaced,
    /// Pacing values we don't recognise. Runs with these are left
    /// unclassified rather than failing.
    #[serde(other)]
    Unknown,
}

/// The slice of a course run's overview the classifier needs.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseOverview {
    pub pacing: Pacing,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl CourseOverview {
    /// An absent start date means the run hasn't started.
    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.start.is_some_and(|start| start <= now)
    }

    /// An absent end date means the run hasn't ended.
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.end.is_some_and(|end| end <= now)
    }
}

/// The user's certificate standing in a course run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateInfo {
    pub is_passing: bool,
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseRunStatus {
    Completed,
    InProgress,
    Upcoming,
}

/// Progress status of a course run as of the current UTC wall clock.
///
/// `None` for runs with an unrecognised pacing. Note the self-paced rule
/// reads the clock, so the same inputs can classify differently on
/// different days.
pub fn course_run_status(
    overview: &CourseOverview,
    certificate: CertificateInfo,
) -> Option<CourseRunStatus> {
    course_run_status_at(overview, certificate, Utc::now())
}

/// [`course_run_status`] against an explicit clock.
pub fn course_run_status_at(
    overview: &CourseOverview,
    certificate: CertificateInfo,
    now: DateTime<Utc>,
) -> Option<CourseRunStatus> {
    match overview.pacing {
        Pacing::Instructor => Some(if overview.has_ended(now) {
            CourseRunStatus::Completed
        } else if overview.has_started(now) {
            CourseRunStatus::InProgress
        } else {
            CourseRunStatus::Upcoming
        }),
        Pacing::SelfPaced => {
            // a self-paced run is completed when it has ended, or when the
            // user earned a passing certificate 30 days ago or more
            let cutoff = now - Duration::days(CERTIFICATE_AGE_DAYS);
            let aged_certificate = certificate.is_passing
                && certificate.created.is_some_and(|created| created <= cutoff);

            Some(if overview.has_ended(now) || aged_certificate {
                CourseRunStatus::Completed
            } else if overview.has_started(now) {
                CourseRunStatus::InProgress
            } else {
                CourseRunStatus::Upcoming
            })
        }
        Pacing::Unknown => None,
    }
}
