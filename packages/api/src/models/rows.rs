use chrono::{DateTime, Utc};
use model::{
    CardInput, ClassInfo, FlashcardSetInfo, NoteInfo, QuestionInput, ReportInfo, TestInfo,
    UserInfo,
};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
            bio: self.bio.clone(),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ClassRow {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub meeting_time: String,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ClassRow {
    /// Member ids are loaded separately from `class_members`.
    pub fn into_info(self, members: Vec<String>) -> ClassInfo {
        ClassInfo {
            id: self.id.to_string(),
            title: self.title,
            subject: self.subject,
            meeting_time: self.meeting_time,
            creator_id: self.creator_id.to_string(),
            members,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ReportRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub reporter_id: Uuid,
    pub target_id: String,
    pub status: String,
    pub report_type: String,
    pub created_at: DateTime<Utc>,
}

impl ReportRow {
    pub fn to_info(&self) -> ReportInfo {
        ReportInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            reporter_id: self.reporter_id.to_string(),
            target_id: self.target_id.clone(),
            status: self.status.clone(),
            report_type: self.report_type.clone(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub class_id: Uuid,
    pub title: String,
    pub content: String,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl NoteRow {
    pub fn to_info(&self) -> NoteInfo {
        NoteInfo {
            id: self.id.to_string(),
            class_id: self.class_id.to_string(),
            title: self.title.clone(),
            content: self.content.clone(),
            creator_id: self.creator_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct FlashcardSetRow {
    pub id: Uuid,
    pub class_id: Uuid,
    pub title: String,
    pub cards: Json<Vec<CardInput>>,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl FlashcardSetRow {
    pub fn to_info(&self) -> FlashcardSetInfo {
        FlashcardSetInfo {
            id: self.id.to_string(),
            class_id: self.class_id.to_string(),
            title: self.title.clone(),
            cards: self.cards.0.clone(),
            creator_id: self.creator_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct TestRow {
    pub id: Uuid,
    pub class_id: Uuid,
    pub title: String,
    pub duration_minutes: i64,
    pub questions: Json<Vec<QuestionInput>>,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl TestRow {
    pub fn to_info(&self) -> TestInfo {
        TestInfo {
            id: self.id.to_string(),
            class_id: self.class_id.to_string(),
            title: self.title.clone(),
            duration_minutes: self.duration_minutes,
            questions: self.questions.0.clone(),
            creator_id: self.creator_id.to_string(),
        }
    }
}
