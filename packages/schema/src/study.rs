//! Schemas for study materials: notes, flashcard sets, tests.
//!
//! Array payloads require at least one element; per-element failures attach
//! to the array field with the offending row named in the message.

use model::{NewFlashcardSet, NewNote, NewTest};

use crate::engine::{min_int, min_items, min_len, required, Schema};

pub fn new_note() -> Schema<NewNote> {
    Schema::new()
        .rule("classId", |p: &NewNote| required(&p.class_id, "Class"))
        .rule("title", |p: &NewNote| min_len(&p.title, 3, "Title"))
        .rule("content", |p: &NewNote| required(&p.content, "Content"))
}

pub fn new_flashcard_set() -> Schema<NewFlashcardSet> {
    Schema::new()
        .rule("classId", |p: &NewFlashcardSet| {
            required(&p.class_id, "Class")
        })
        .rule("title", |p: &NewFlashcardSet| min_len(&p.title, 3, "Title"))
        .rule("cards", |p: &NewFlashcardSet| {
            min_items(p.cards.len(), 1, "flashcard")
        })
        .rule("cards", |p: &NewFlashcardSet| {
            for (i, card) in p.cards.iter().enumerate() {
                if card.front.trim().is_empty() {
                    return Err(format!("Card {}: front is required", i + 1));
                }
                if card.back.trim().is_empty() {
                    return Err(format!("Card {}: back is required", i + 1));
                }
            }
            Ok(())
        })
}

pub fn new_test() -> Schema<NewTest> {
    Schema::new()
        .rule("classId", |p: &NewTest| required(&p.class_id, "Class"))
        .rule("title", |p: &NewTest| min_len(&p.title, 3, "Title"))
        .rule("durationMinutes", |p: &NewTest| {
            min_int(p.duration_minutes, 1, "Duration")
        })
        .rule("questions", |p: &NewTest| {
            min_items(p.questions.len(), 1, "question")
        })
        .rule("questions", |p: &NewTest| {
            for (i, q) in p.questions.iter().enumerate() {
                if q.prompt.trim().is_empty() {
                    return Err(format!("Question {}: prompt is required", i + 1));
                }
                if q.answer.trim().is_empty() {
                    return Err(format!("Question {}: answer is required", i + 1));
                }
            }
            Ok(())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{CardInput, QuestionInput};

    #[test]
    fn empty_card_list_fails() {
        let payload = NewFlashcardSet {
            class_id: "c1".into(),
            title: "Chapter 3 vocab".into(),
            cards: vec![],
        };
        let errors = new_flashcard_set().validate(&payload).unwrap_err();
        assert_eq!(errors.get("cards"), Some("At least 1 flashcard required"));
    }

    #[test]
    fn blank_card_side_names_the_row() {
        let payload = NewFlashcardSet {
            class_id: "c1".into(),
            title: "Chapter 3 vocab".into(),
            cards: vec![
                CardInput {
                    front: "ubiquitous".into(),
                    back: "present everywhere".into(),
                },
                CardInput {
                    front: "".into(),
                    back: "x".into(),
                },
            ],
        };
        let errors = new_flashcard_set().validate(&payload).unwrap_err();
        assert_eq!(errors.get("cards"), Some("Card 2: front is required"));
    }

    #[test]
    fn test_duration_must_be_a_positive_integer() {
        let base = NewTest {
            class_id: "c1".into(),
            title: "Midterm".into(),
            duration_minutes: Some(45),
            questions: vec![QuestionInput {
                prompt: "2 + 2?".into(),
                answer: "4".into(),
            }],
        };
        assert!(new_test().validate(&base).is_ok());

        let unparsed = NewTest {
            duration_minutes: None,
            ..base.clone()
        };
        let errors = new_test().validate(&unparsed).unwrap_err();
        assert_eq!(
            errors.get("durationMinutes"),
            Some("Duration must be a whole number")
        );

        let zero = NewTest {
            duration_minutes: Some(0),
            ..base
        };
        assert!(new_test().validate(&zero).is_err());
    }

    #[test]
    fn note_requires_content() {
        let payload = NewNote {
            class_id: "c1".into(),
            title: "Lecture 4".into(),
            content: "  ".into(),
        };
        let errors = new_note().validate(&payload).unwrap_err();
        assert_eq!(errors.get("content"), Some("Content is required"));
    }
}
