//! Study material handlers: notes, flashcard sets, tests.
//!
//! Scalar fields come from the form map; the card/question arrays are
//! assembled by the view from its repeated input rows and passed alongside.

use model::{
    CardInput, FlashcardSetInfo, NewFlashcardSet, NewNote, NewTest, NoteInfo, Outcome,
    QuestionInput, TestInfo,
};

use crate::{field, DataClient, RawForm};

pub async fn create_note(client: &impl DataClient, form: &RawForm) -> Outcome<NoteInfo> {
    let payload = NewNote {
        class_id: field(form, "classId"),
        title: field(form, "title"),
        content: field(form, "content"),
    };
    if let Err(errors) = schema::study::new_note().validate(&payload) {
        return Outcome::err(errors.first_message());
    }
    match client.insert_note(payload).await {
        Ok(note) => Outcome::ok_with("Note created successfully", note),
        Err(e) => Outcome::err(e.to_string()),
    }
}

pub async fn create_flashcard_set(
    client: &impl DataClient,
    form: &RawForm,
    cards: Vec<CardInput>,
) -> Outcome<FlashcardSetInfo> {
    let payload = NewFlashcardSet {
        class_id: field(form, "classId"),
        title: field(form, "title"),
        cards,
    };
    if let Err(errors) = schema::study::new_flashcard_set().validate(&payload) {
        return Outcome::err(errors.first_message());
    }
    match client.insert_flashcard_set(payload).await {
        Ok(set) => Outcome::ok_with("Flashcards created successfully", set),
        Err(e) => Outcome::err(e.to_string()),
    }
}

pub async fn create_test(
    client: &impl DataClient,
    form: &RawForm,
    questions: Vec<QuestionInput>,
) -> Outcome<TestInfo> {
    let payload = NewTest {
        class_id: field(form, "classId"),
        title: field(form, "title"),
        // Unparseable input becomes None, which validation rejects with a
        // field error instead of a handler fault.
        duration_minutes: field(form, "durationMinutes").parse::<i64>().ok(),
        questions,
    };
    if let Err(errors) = schema::study::new_test().validate(&payload) {
        return Outcome::err(errors.first_message());
    }
    match client.insert_test(payload).await {
        Ok(test) => Outcome::ok_with("Test created successfully", test),
        Err(e) => Outcome::err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockClient;

    fn titled_form(extra: &[(&str, &str)]) -> RawForm {
        let mut form = RawForm::from([
            ("classId".to_string(), "c1".to_string()),
            ("title".to_string(), "Chapter 3".to_string()),
        ]);
        for (k, v) in extra {
            form.insert(k.to_string(), v.to_string());
        }
        form
    }

    #[tokio::test]
    async fn flashcards_require_at_least_one_card() {
        let client = MockClient::ok();
        let outcome = create_flashcard_set(&client, &titled_form(&[]), vec![]).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "At least 1 flashcard required");
        assert_eq!(client.calls.get(), 0);
    }

    #[tokio::test]
    async fn flashcards_with_one_card_succeed() {
        let client = MockClient::ok();
        let cards = vec![CardInput {
            front: "ubiquitous".into(),
            back: "present everywhere".into(),
        }];
        let outcome = create_flashcard_set(&client, &titled_form(&[]), cards).await;
        assert!(outcome.success);
        assert_eq!(outcome.data.unwrap().cards.len(), 1);
    }

    #[tokio::test]
    async fn non_numeric_duration_is_a_field_error() {
        let client = MockClient::ok();
        let form = titled_form(&[("durationMinutes", "forty-five")]);
        let questions = vec![QuestionInput {
            prompt: "2 + 2?".into(),
            answer: "4".into(),
        }];
        let outcome = create_test(&client, &form, questions).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Duration must be a whole number");
        assert_eq!(client.calls.get(), 0);
    }

    #[tokio::test]
    async fn valid_test_forwards_duration() {
        let client = MockClient::ok();
        let form = titled_form(&[("durationMinutes", "45")]);
        let questions = vec![QuestionInput {
            prompt: "2 + 2?".into(),
            answer: "4".into(),
        }];
        let outcome = create_test(&client, &form, questions).await;
        assert!(outcome.success);
        assert_eq!(outcome.data.unwrap().duration_minutes, 45);
    }

    #[tokio::test]
    async fn note_content_required() {
        let client = MockClient::ok();
        let outcome = create_note(&client, &titled_form(&[])).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Content is required");
        assert_eq!(client.calls.get(), 0);
    }
}
