//! Schema for report submissions.

use model::NewReport;

use crate::engine::{min_len, required, Schema};

pub fn new_report() -> Schema<NewReport> {
    Schema::new()
        .rule("title", |p: &NewReport| min_len(&p.title, 3, "Title"))
        .rule("description", |p: &NewReport| {
            min_len(&p.description, 10, "Description")
        })
        .rule("targetId", |p: &NewReport| {
            required(&p.target_id, "Reported content")
        })
        .rule("reportType", |p: &NewReport| match p.report_type.as_str() {
            "note" | "flashcards" | "test" | "class" | "user" => Ok(()),
            _ => Err("Unknown report type".to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewReport {
        NewReport {
            title: "Inappropriate content".into(),
            description: "This note contains copied exam answers.".into(),
            target_id: "note-42".into(),
            report_type: "note".into(),
        }
    }

    #[test]
    fn valid_report_passes() {
        assert!(new_report().validate(&valid()).is_ok());
    }

    #[test]
    fn short_description_fails() {
        let payload = NewReport {
            description: "bad".into(),
            ..valid()
        };
        let errors = new_report().validate(&payload).unwrap_err();
        assert_eq!(
            errors.get("description"),
            Some("Description must be at least 10 characters")
        );
    }

    #[test]
    fn unknown_type_fails() {
        let payload = NewReport {
            report_type: "other".into(),
            ..valid()
        };
        assert!(new_report().validate(&payload).is_err());
    }
}
