use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::urls::{RequestContext, Routes};
use crate::Result;

/// What a date attached to a content block means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateKind {
    Start,
    Due,
    End,
    #[serde(other)]
    Other,
}

/// A dated content block, as reported by the course dates service.
///
/// The service yields one entry per (block, kind) pair the user can see.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockDate {
    pub block_id: String,
    pub kind: DateKind,
    pub date: DateTime<Utc>,
}

/// Per-user schedule lookup for a course.
pub trait CourseDates {
    fn course_dates(&self, course_id: &str, user_id: &str) -> Result<Vec<BlockDate>>;
}

/// Display metadata lookup for course content blocks.
pub trait ContentStore {
    /// The display name of a block. A block id the store doesn't know is an
    /// error ([`crate::Error::UnknownBlock`]).
    fn display_name(&self, block_id: &str) -> Result<String>;
}

/// A due date for one content block, ready for response serialisation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DueDate {
    pub name: String,
    pub url: String,
    pub date: DateTime<Utc>,
}

/// Due date information for a user for blocks in a course.
///
/// Keeps only the entries tagged [`DateKind::Due`], resolves each block's
/// display name and builds an absolute deep link to it. Records come back in
/// no particular order. A block the dates service knows but the content store
/// doesn't fails the whole lookup; nothing is recovered locally.
pub fn due_dates(
    dates: &impl CourseDates,
    store: &impl ContentStore,
    routes: &impl Routes,
    request: &RequestContext,
    course_id: &str,
    user_id: &str,
) -> Result<Vec<DueDate>> {
    let all = dates.course_dates(course_id, user_id)?;
    debug!("{} dated blocks in {}", all.len(), course_id);

    let mut due = Vec::new();
    for entry in all {
        if entry.kind != DateKind::Due {
            continue;
        }

        let name = store.display_name(&entry.block_id)?;
        let path = routes.reverse("jump_to", &[course_id, &entry.block_id])?;

        due.push(DueDate {
            name,
            url: request.absolute_uri(&path),
            date: entry.date,
        });
    }
    Ok(due)
}
