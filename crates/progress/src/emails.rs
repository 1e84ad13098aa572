use serde::Serialize;

use crate::Result;

/// Whether course emails reach a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    Enabled,
    Disabled,
    /// Bulk email is switched off for the whole course, so the user's
    /// opt-out state is moot.
    NotApplicable,
}

/// Bulk-email feature flag and per-user opt-out lookups.
pub trait EmailPreferences {
    fn bulk_email_enabled(&self, course_id: &str) -> Result<bool>;
    fn opted_out(&self, user_id: &str, course_id: &str) -> Result<bool>;
}

/// Whether emails are enabled for a user in the context of a course.
pub fn emails_enabled(
    prefs: &impl EmailPreferences,
    user_id: &str,
    course_id: &str,
) -> Result<EmailStatus> {
    if !prefs.bulk_email_enabled(course_id)? {
        return Ok(EmailStatus::NotApplicable);
    }

    Ok(if prefs.opted_out(user_id, course_id)? {
        EmailStatus::Disabled
    } else {
        EmailStatus::Enabled
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FakePrefs {
        feature_on: bool,
        opted_out: bool,
    }

    impl EmailPreferences for FakePrefs {
        fn bulk_email_enabled(&self, _: &str) -> Result<bool> {
            Ok(self.feature_on)
        }

        fn opted_out(&self, _: &str, _: &str) -> Result<bool> {
            Ok(self.opted_out)
        }
    }

    fn check(feature_on: bool, opted_out: bool) -> EmailStatus {
        let prefs = FakePrefs {
            feature_on,
            opted_out,
        };
        emails_enabled(&prefs, "student", "c101").unwrap()
    }

    #[test]
    fn feature_off_is_not_applicable_regardless_of_opt_out() {
        assert_eq!(check(false, false), EmailStatus::NotApplicable);
        assert_eq!(check(false, true), EmailStatus::NotApplicable);
    }

    #[test]
    fn feature_on_negates_opt_out() {
        assert_eq!(check(true, false), EmailStatus::Enabled);
        assert_eq!(check(true, true), EmailStatus::Disabled);
    }
}
