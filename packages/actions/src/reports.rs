//! Report submission handler.

use model::{NewReport, Outcome, ReportInfo};

use crate::{field, DataClient, RawForm};

pub async fn create_report(client: &impl DataClient, form: &RawForm) -> Outcome<ReportInfo> {
    let payload = NewReport {
        title: field(form, "title"),
        description: field(form, "description"),
        target_id: field(form, "targetId"),
        report_type: field(form, "reportType"),
    };
    if let Err(errors) = schema::report::new_report().validate(&payload) {
        return Outcome::err(errors.first_message());
    }
    match client.insert_report(payload).await {
        Ok(report) => Outcome::ok_with("Report submitted successfully", report),
        Err(e) => Outcome::err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockClient;
    use crate::ClientError;

    fn report_form() -> RawForm {
        RawForm::from([
            ("title".to_string(), "Copied answers".to_string()),
            (
                "description".to_string(),
                "This note reproduces last year's exam key.".to_string(),
            ),
            ("targetId".to_string(), "note-42".to_string()),
            ("reportType".to_string(), "note".to_string()),
        ])
    }

    #[tokio::test]
    async fn valid_report_is_submitted() {
        let client = MockClient::ok();
        let outcome = create_report(&client, &report_form()).await;
        assert!(outcome.success);
        let report = outcome.data.unwrap();
        assert_eq!(report.status, "open");
        assert_eq!(report.target_id, "note-42");
    }

    #[tokio::test]
    async fn invalid_report_skips_the_client() {
        let client = MockClient::ok();
        let mut form = report_form();
        form.insert("description".into(), "short".into());
        let outcome = create_report(&client, &form).await;
        assert!(!outcome.success);
        assert_eq!(client.calls.get(), 0);
    }

    #[tokio::test]
    async fn remote_constraint_violation_surfaces() {
        let client = MockClient::failing(ClientError::Remote(
            "You have already reported this content".into(),
        ));
        let outcome = create_report(&client, &report_form()).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "You have already reported this content");
        assert!(outcome.data.is_none());
    }
}
