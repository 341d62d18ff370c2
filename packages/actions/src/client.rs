//! The client-side seam to the remote auth and data service.
//!
//! [`DataClient`] has one method per remote operation the handlers consume.
//! The production implementation forwards each method to a server function
//! (`ui::ServerClient`); tests substitute a scripted mock that counts
//! invocations.

use std::future::Future;

use model::{
    ClassInfo, FlashcardSetInfo, NewClass, NewFlashcardSet, NewMember, NewNote, NewReport,
    NewTest, NoteInfo, ProfileAttributes, ReportInfo, TestInfo, UpdateAccount, UserInfo,
};

/// Failure reported by the remote service boundary.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// The remote service rejected the operation; the message is shown to
    /// the user as-is.
    #[error("{0}")]
    Remote(String),
    /// Transport-level fault with no usable message.
    #[error("Something went wrong. Please try again.")]
    Unexpected,
}

/// Async interface to the remote auth + row storage service.
pub trait DataClient {
    fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<UserInfo, ClientError>>;
    fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: ProfileAttributes,
    ) -> impl Future<Output = Result<UserInfo, ClientError>>;
    fn reset_password_for_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<(), ClientError>>;
    fn update_password(
        &self,
        password: &str,
    ) -> impl Future<Output = Result<(), ClientError>>;
    fn update_password_with_token(
        &self,
        token: &str,
        password: &str,
    ) -> impl Future<Output = Result<(), ClientError>>;
    fn update_account(
        &self,
        update: UpdateAccount,
    ) -> impl Future<Output = Result<UserInfo, ClientError>>;
    fn insert_class(
        &self,
        class: NewClass,
    ) -> impl Future<Output = Result<ClassInfo, ClientError>>;
    fn add_member(
        &self,
        member: NewMember,
    ) -> impl Future<Output = Result<ClassInfo, ClientError>>;
    fn fetch_class(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<ClassInfo, ClientError>>;
    fn insert_report(
        &self,
        report: NewReport,
    ) -> impl Future<Output = Result<ReportInfo, ClientError>>;
    fn insert_note(
        &self,
        note: NewNote,
    ) -> impl Future<Output = Result<NoteInfo, ClientError>>;
    fn insert_flashcard_set(
        &self,
        set: NewFlashcardSet,
    ) -> impl Future<Output = Result<FlashcardSetInfo, ClientError>>;
    fn insert_test(
        &self,
        test: NewTest,
    ) -> impl Future<Output = Result<TestInfo, ClientError>>;
}
