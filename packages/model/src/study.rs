//! Study material types: notes, flashcard sets, and tests.
//!
//! The array payloads ([`NewFlashcardSet::cards`], [`NewTest::questions`])
//! are assembled by the form views from repeated input rows; validation
//! requires at least one element in each.

use serde::{Deserialize, Serialize};

/// A note attached to a class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInfo {
    pub id: String,
    pub class_id: String,
    pub title: String,
    pub content: String,
    pub creator_id: String,
}

/// Payload for creating a note.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub class_id: String,
    pub title: String,
    pub content: String,
}

/// One flashcard: prompt side and answer side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardInput {
    pub front: String,
    pub back: String,
}

/// Payload for creating a flashcard set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlashcardSet {
    pub class_id: String,
    pub title: String,
    pub cards: Vec<CardInput>,
}

/// A stored flashcard set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardSetInfo {
    pub id: String,
    pub class_id: String,
    pub title: String,
    pub cards: Vec<CardInput>,
    pub creator_id: String,
}

/// One test question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionInput {
    pub prompt: String,
    pub answer: String,
}

/// Payload for creating a test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTest {
    pub class_id: String,
    pub title: String,
    /// Parsed from the form; `None` when the field was missing or not a
    /// whole number, which validation rejects.
    pub duration_minutes: Option<i64>,
    pub questions: Vec<QuestionInput>,
}

/// A stored test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestInfo {
    pub id: String,
    pub class_id: String,
    pub title: String,
    pub duration_minutes: i64,
    pub questions: Vec<QuestionInput>,
    pub creator_id: String,
}
