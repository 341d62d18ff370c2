//! Scripted in-memory `DataClient` for handler tests.

use std::cell::Cell;

use model::{
    ClassInfo, FlashcardSetInfo, NewClass, NewFlashcardSet, NewMember, NewNote, NewReport,
    NewTest, NoteInfo, ProfileAttributes, ReportInfo, TestInfo, UpdateAccount, UserInfo,
};

use crate::{ClientError, DataClient};

/// Counts every remote invocation and optionally fails each call with a
/// preset error.
#[derive(Default)]
pub struct MockClient {
    pub calls: Cell<u32>,
    pub fail_with: Option<ClientError>,
}

impl MockClient {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing(error: ClientError) -> Self {
        Self {
            calls: Cell::new(0),
            fail_with: Some(error),
        }
    }

    fn record<T>(&self, value: T) -> Result<T, ClientError> {
        self.calls.set(self.calls.get() + 1);
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(value),
        }
    }
}

pub fn sample_user() -> UserInfo {
    UserInfo {
        id: "u1".into(),
        email: "ada@example.com".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        role: "student".into(),
        phone: None,
        website: None,
        bio: None,
    }
}

pub fn sample_class(id: &str) -> ClassInfo {
    ClassInfo {
        id: id.into(),
        title: "Linear Algebra".into(),
        subject: "Mathematics".into(),
        meeting_time: "Mon 09:00".into(),
        creator_id: "u1".into(),
        members: vec!["u1".into()],
    }
}

impl DataClient for MockClient {
    async fn authenticate(&self, _email: &str, _password: &str) -> Result<UserInfo, ClientError> {
        self.record(sample_user())
    }

    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        profile: ProfileAttributes,
    ) -> Result<UserInfo, ClientError> {
        self.record(UserInfo {
            email: email.into(),
            first_name: profile.first_name,
            last_name: profile.last_name,
            role: profile.role,
            ..sample_user()
        })
    }

    async fn reset_password_for_email(&self, _email: &str) -> Result<(), ClientError> {
        self.record(())
    }

    async fn update_password(&self, _password: &str) -> Result<(), ClientError> {
        self.record(())
    }

    async fn update_password_with_token(
        &self,
        _token: &str,
        _password: &str,
    ) -> Result<(), ClientError> {
        self.record(())
    }

    async fn update_account(&self, update: UpdateAccount) -> Result<UserInfo, ClientError> {
        self.record(UserInfo {
            first_name: update.first_name,
            last_name: update.last_name,
            phone: update.phone,
            website: update.website,
            bio: update.bio,
            ..sample_user()
        })
    }

    async fn insert_class(&self, class: NewClass) -> Result<ClassInfo, ClientError> {
        self.record(ClassInfo {
            title: class.title,
            subject: class.subject,
            meeting_time: class.meeting_time,
            ..sample_class("c-new")
        })
    }

    async fn add_member(&self, member: NewMember) -> Result<ClassInfo, ClientError> {
        let mut class = sample_class(&member.class_id);
        class.members.push("u2".into());
        self.record(class)
    }

    async fn fetch_class(&self, id: &str) -> Result<ClassInfo, ClientError> {
        self.record(sample_class(id))
    }

    async fn insert_report(&self, report: NewReport) -> Result<ReportInfo, ClientError> {
        self.record(ReportInfo {
            id: "r1".into(),
            title: report.title,
            description: report.description,
            reporter_id: "u1".into(),
            target_id: report.target_id,
            status: "open".into(),
            report_type: report.report_type,
            created_at: "2026-01-01T00:00:00Z".into(),
        })
    }

    async fn insert_note(&self, note: NewNote) -> Result<NoteInfo, ClientError> {
        self.record(NoteInfo {
            id: "n1".into(),
            class_id: note.class_id,
            title: note.title,
            content: note.content,
            creator_id: "u1".into(),
        })
    }

    async fn insert_flashcard_set(
        &self,
        set: NewFlashcardSet,
    ) -> Result<FlashcardSetInfo, ClientError> {
        self.record(FlashcardSetInfo {
            id: "f1".into(),
            class_id: set.class_id,
            title: set.title,
            cards: set.cards,
            creator_id: "u1".into(),
        })
    }

    async fn insert_test(&self, test: NewTest) -> Result<TestInfo, ClientError> {
        self.record(TestInfo {
            id: "t1".into(),
            class_id: test.class_id,
            title: test.title,
            duration_minutes: test.duration_minutes.unwrap_or(0),
            questions: test.questions,
            creator_id: "u1".into(),
        })
    }
}
