//! Class handlers: create, add member, fetch by id.

use model::{ClassInfo, NewClass, NewMember, Outcome};

use crate::{field, DataClient, RawForm};

pub async fn create_class(client: &impl DataClient, form: &RawForm) -> Outcome<ClassInfo> {
    let payload = NewClass {
        title: field(form, "title"),
        subject: field(form, "subject"),
        meeting_time: field(form, "meetingTime"),
    };
    if let Err(errors) = schema::classroom::new_class().validate(&payload) {
        return Outcome::err(errors.first_message());
    }
    match client.insert_class(payload).await {
        Ok(class) => Outcome::ok_with("Class created successfully", class),
        Err(e) => Outcome::err(e.to_string()),
    }
}

pub async fn add_member(client: &impl DataClient, form: &RawForm) -> Outcome<ClassInfo> {
    let payload = NewMember {
        class_id: field(form, "classId"),
        email: field(form, "email"),
    };
    if let Err(errors) = schema::classroom::add_member().validate(&payload) {
        return Outcome::err(errors.first_message());
    }
    match client.add_member(payload).await {
        Ok(class) => Outcome::ok_with("Member added successfully", class),
        Err(e) => Outcome::err(e.to_string()),
    }
}

/// Fetch one class. No schema applies; the id comes from the route, not a
/// form.
pub async fn fetch_class_by_id(client: &impl DataClient, id: &str) -> Outcome<ClassInfo> {
    match client.fetch_class(id).await {
        Ok(class) => Outcome::ok_with("Class loaded", class),
        Err(e) => Outcome::err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockClient;
    use crate::ClientError;

    fn class_form(meeting_time: &str) -> RawForm {
        RawForm::from([
            ("title".to_string(), "Linear Algebra".to_string()),
            ("subject".to_string(), "Mathematics".to_string()),
            ("meetingTime".to_string(), meeting_time.to_string()),
        ])
    }

    #[tokio::test]
    async fn create_class_with_valid_meeting_time() {
        let client = MockClient::ok();
        let outcome = create_class(&client, &class_form("Mon 09:00")).await;
        assert!(outcome.success);
        assert_eq!(outcome.data.unwrap().meeting_time, "Mon 09:00");
    }

    #[tokio::test]
    async fn malformed_meeting_time_is_rejected_locally() {
        let client = MockClient::ok();
        let outcome = create_class(&client, &class_form("Monday 9:00")).await;
        assert!(!outcome.success);
        assert_eq!(client.calls.get(), 0);
    }

    #[tokio::test]
    async fn fetch_class_forwards_the_row() {
        let client = MockClient::ok();
        let outcome = fetch_class_by_id(&client, "c5").await;
        assert!(outcome.success);
        assert_eq!(outcome.data.unwrap().id, "c5");
    }

    #[tokio::test]
    async fn fetch_class_missing_row_fails() {
        let client = MockClient::failing(ClientError::Remote("Class not found".into()));
        let outcome = fetch_class_by_id(&client, "nope").await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Class not found");
        assert!(outcome.data.is_none());
    }
}
