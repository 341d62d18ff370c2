//! Schemas for classes and class membership.

use std::sync::LazyLock;

use model::{NewClass, NewMember};
use regex::Regex;

use crate::engine::{email_shape, min_len, required, Schema};

/// Weekly meeting slot: abbreviated day, space, two-digit 24h time.
/// "Mon 09:00" is valid; "Monday 9:00" and "Mon 9:00" are not.
static MEETING_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Mon|Tue|Wed|Thu|Fri|Sat|Sun) ([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap()
});

pub fn new_class() -> Schema<NewClass> {
    Schema::new()
        .rule("title", |p: &NewClass| min_len(&p.title, 3, "Title"))
        .rule("subject", |p: &NewClass| required(&p.subject, "Subject"))
        .rule("meetingTime", |p: &NewClass| {
            if MEETING_TIME_RE.is_match(&p.meeting_time) {
                Ok(())
            } else {
                Err("Meeting time must look like \"Mon 09:00\"".to_string())
            }
        })
}

pub fn add_member() -> Schema<NewMember> {
    Schema::new()
        .rule("classId", |p: &NewMember| required(&p.class_id, "Class"))
        .rule("email", |p: &NewMember| email_shape(&p.email, "Email"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(meeting_time: &str) -> NewClass {
        NewClass {
            title: "Linear Algebra".into(),
            subject: "Mathematics".into(),
            meeting_time: meeting_time.into(),
        }
    }

    #[test]
    fn abbreviated_day_with_two_digit_hour_passes() {
        assert!(new_class().validate(&class("Mon 09:00")).is_ok());
        assert!(new_class().validate(&class("Sun 23:59")).is_ok());
    }

    #[test]
    fn full_day_name_fails() {
        let errors = new_class().validate(&class("Monday 9:00")).unwrap_err();
        assert!(errors.get("meetingTime").is_some());
    }

    #[test]
    fn single_digit_hour_fails() {
        assert!(new_class().validate(&class("Mon 9:00")).is_err());
    }

    #[test]
    fn out_of_range_time_fails() {
        assert!(new_class().validate(&class("Mon 24:00")).is_err());
        assert!(new_class().validate(&class("Mon 09:60")).is_err());
    }

    #[test]
    fn short_title_fails() {
        let payload = NewClass {
            title: "LA".into(),
            ..class("Mon 09:00")
        };
        let errors = new_class().validate(&payload).unwrap_err();
        assert_eq!(errors.get("title"), Some("Title must be at least 3 characters"));
    }

    #[test]
    fn member_email_must_have_at_sign() {
        let payload = NewMember {
            class_id: "c1".into(),
            email: "not-an-email".into(),
        };
        assert!(add_member().validate(&payload).is_err());
    }
}
