//! Server-side helpers shared by the server functions.

use dioxus::prelude::ServerFnError;
use rand::RngCore;
use sqlx::PgPool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::auth::SESSION_USER_ID_KEY;

/// Map an internal error to a `ServerFnError`, logging the detail server-side
/// only.
pub fn internal(e: impl std::fmt::Display) -> ServerFnError {
    tracing::error!("server function error: {e}");
    ServerFnError::new("Something went wrong. Please try again.")
}

/// Read the user id stored in the session, if any.
pub async fn session_user_id(session: &Session) -> Result<Option<Uuid>, ServerFnError> {
    let stored: Option<String> = session.get(SESSION_USER_ID_KEY).await.map_err(internal)?;
    match stored {
        Some(id) => Ok(Some(Uuid::parse_str(&id).map_err(internal)?)),
        None => Ok(None),
    }
}

/// Session user id, or a uniform "not signed in" error.
pub async fn require_user(session: &Session) -> Result<Uuid, ServerFnError> {
    session_user_id(session)
        .await?
        .ok_or_else(|| ServerFnError::new("You must be signed in"))
}

/// Random 32-byte hex token for password resets.
pub fn reset_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// All member user ids of a class, as strings for the client.
pub async fn class_member_ids(pool: &PgPool, class_id: Uuid) -> Result<Vec<String>, ServerFnError> {
    let rows: Vec<(Uuid,)> =
        sqlx::query_as("SELECT user_id FROM class_members WHERE class_id = $1 ORDER BY joined_at")
            .bind(class_id)
            .fetch_all(pool)
            .await
            .map_err(internal)?;
    Ok(rows.into_iter().map(|(id,)| id.to_string()).collect())
}
