//! Production `DataClient` backed by the api server functions.
//!
//! Each method forwards to one server function and folds its error into
//! [`ClientError`]: a message produced by the server surfaces as-is, any
//! transport fault becomes the generic variant.

use actions::{ClientError, DataClient};
use dioxus::prelude::ServerFnError;
use model::{
    ClassInfo, FlashcardSetInfo, NewClass, NewFlashcardSet, NewMember, NewNote, NewReport,
    NewTest, NoteInfo, ProfileAttributes, ReportInfo, TestInfo, UpdateAccount, UserInfo,
};

#[derive(Clone, Copy, Default)]
pub struct ServerClient;

pub(crate) fn to_client_error(e: ServerFnError) -> ClientError {
    match e {
        ServerFnError::ServerError(message) => ClientError::Remote(message),
        other => {
            tracing::error!("server call failed: {other}");
            ClientError::Unexpected
        }
    }
}

impl DataClient for ServerClient {
    async fn authenticate(&self, email: &str, password: &str) -> Result<UserInfo, ClientError> {
        api::login(email.to_string(), password.to_string())
            .await
            .map_err(to_client_error)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: ProfileAttributes,
    ) -> Result<UserInfo, ClientError> {
        api::register(email.to_string(), password.to_string(), profile)
            .await
            .map_err(to_client_error)
    }

    async fn reset_password_for_email(&self, email: &str) -> Result<(), ClientError> {
        api::reset_password(email.to_string())
            .await
            .map_err(to_client_error)
    }

    async fn update_password(&self, password: &str) -> Result<(), ClientError> {
        api::update_password(password.to_string())
            .await
            .map_err(to_client_error)
    }

    async fn update_password_with_token(
        &self,
        token: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        api::update_password_with_token(token.to_string(), password.to_string())
            .await
            .map_err(to_client_error)
    }

    async fn update_account(&self, update: UpdateAccount) -> Result<UserInfo, ClientError> {
        api::update_account(update).await.map_err(to_client_error)
    }

    async fn insert_class(&self, class: NewClass) -> Result<ClassInfo, ClientError> {
        api::create_class(class).await.map_err(to_client_error)
    }

    async fn add_member(&self, member: NewMember) -> Result<ClassInfo, ClientError> {
        api::add_member(member).await.map_err(to_client_error)
    }

    async fn fetch_class(&self, id: &str) -> Result<ClassInfo, ClientError> {
        api::get_class(id.to_string()).await.map_err(to_client_error)
    }

    async fn insert_report(&self, report: NewReport) -> Result<ReportInfo, ClientError> {
        api::create_report(report).await.map_err(to_client_error)
    }

    async fn insert_note(&self, note: NewNote) -> Result<NoteInfo, ClientError> {
        api::create_note(note).await.map_err(to_client_error)
    }

    async fn insert_flashcard_set(
        &self,
        set: NewFlashcardSet,
    ) -> Result<FlashcardSetInfo, ClientError> {
        api::create_flashcard_set(set).await.map_err(to_client_error)
    }

    async fn insert_test(&self, test: NewTest) -> Result<TestInfo, ClientError> {
        api::create_test(test).await.map_err(to_client_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_passes_through() {
        let e = to_client_error(ServerFnError::ServerError("Class not found".into()));
        assert_eq!(e, ClientError::Remote("Class not found".into()));
    }

    #[test]
    fn transport_fault_folds_to_generic() {
        let e = to_client_error(ServerFnError::Request("connection refused".into()));
        assert_eq!(e, ClientError::Unexpected);
    }
}
