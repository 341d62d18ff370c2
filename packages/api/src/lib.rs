//! # API crate — shared fullstack server functions for StudyHall
//!
//! Defines every Dioxus server function the web frontend calls, along with
//! the supporting modules they depend on. This crate is the server half of
//! the remote data boundary: session-backed authentication, password reset,
//! and row inserts/selects for classes, reports, and study materials.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Password hashing (argon2) and the session user-id key |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database rows and their client-safe projections |
//!
//! Every server function returns `Result<_, ServerFnError>`; the error
//! message is what the client-side handlers surface to the user, so the
//! strings here are user-facing.

use dioxus::prelude::*;

use model::{
    ClassInfo, FlashcardSetInfo, NewClass, NewFlashcardSet, NewMember, NewNote, NewReport,
    NewTest, NoteInfo, ProfileAttributes, ReportInfo, TestInfo, UserInfo,
};

pub mod auth;
pub mod db;
pub mod models;

#[cfg(feature = "server")]
mod support;

/// Get the current authenticated user from the session.
#[server(endpoint = "auth/me")]
pub async fn current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::models::User;

    let session: tower_sessions::Session = extract().await?;
    let Some(user_id) = support::session_user_id(&session).await? else {
        return Ok(None);
    };

    let pool = db::get_pool().await.map_err(support::internal)?;
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(support::internal)?;

    Ok(user.map(|u| u.to_info()))
}

/// Log in with email and password, establishing a session.
#[server(endpoint = "auth/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::models::User;

    let session: tower_sessions::Session = extract().await?;
    let email = email.trim().to_lowercase();

    let pool = db::get_pool().await.map_err(support::internal)?;
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(support::internal)?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid =
        auth::verify_password(&password, &user.password_hash).map_err(ServerFnError::new)?;
    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(support::internal)?;

    Ok(user.to_info())
}

/// Register a new user with email, password, and profile attributes.
#[server(endpoint = "auth/register")]
pub async fn register(
    email: String,
    password: String,
    profile: ProfileAttributes,
) -> Result<UserInfo, ServerFnError> {
    use crate::models::User;

    let session: tower_sessions::Session = extract().await?;
    let email = email.trim().to_lowercase();

    let pool = db::get_pool().await.map_err(support::internal)?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(support::internal)?;
    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (email, first_name, last_name, role, password_hash) \
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(&email)
    .bind(profile.first_name.trim())
    .bind(profile.last_name.trim())
    .bind(&profile.role)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(support::internal)?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(support::internal)?;

    Ok(user.to_info())
}

/// Log out the current user by clearing the session.
#[server(endpoint = "auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    let session: tower_sessions::Session = extract().await?;
    session.flush().await.map_err(support::internal)?;
    Ok(())
}

/// Request a password reset for an email address.
///
/// Stores a one-time token and logs the reset URL. Always succeeds from the
/// client's perspective so the endpoint does not reveal which addresses
/// exist.
#[server(endpoint = "auth/reset-password")]
pub async fn reset_password(email: String) -> Result<(), ServerFnError> {
    let email = email.trim().to_lowercase();
    let pool = db::get_pool().await.map_err(support::internal)?;

    let user_id: Option<(uuid::Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(support::internal)?;

    if let Some((user_id,)) = user_id {
        let token = support::reset_token();
        sqlx::query(
            "INSERT INTO password_reset_tokens (user_id, token, expires_at) \
             VALUES ($1, $2, now() + interval '1 hour')",
        )
        .bind(user_id)
        .bind(&token)
        .execute(pool)
        .await
        .map_err(support::internal)?;

        tracing::info!(%email, "password reset requested: /update-password?token={}", token);
    }

    Ok(())
}

/// Change the authenticated user's password.
#[server(endpoint = "auth/update-password")]
pub async fn update_password(password: String) -> Result<(), ServerFnError> {
    let session: tower_sessions::Session = extract().await?;
    let user_id = support::require_user(&session).await?;

    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;
    let pool = db::get_pool().await.map_err(support::internal)?;
    sqlx::query("UPDATE users SET password_hash = $1, updated_at = now() WHERE id = $2")
        .bind(&password_hash)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(support::internal)?;

    Ok(())
}

/// Complete a password reset using an emailed token.
///
/// The token must exist and be unexpired. On success every outstanding token
/// for the user is consumed and the session is established, so the reset
/// link works for a logged-out user.
#[server(endpoint = "auth/update-password-token")]
pub async fn update_password_with_token(
    token: String,
    password: String,
) -> Result<(), ServerFnError> {
    let session: tower_sessions::Session = extract().await?;

    let pool = db::get_pool().await.map_err(support::internal)?;
    let row: Option<(uuid::Uuid,)> = sqlx::query_as(
        "SELECT user_id FROM password_reset_tokens WHERE token = $1 AND expires_at > now()",
    )
    .bind(&token)
    .fetch_optional(pool)
    .await
    .map_err(support::internal)?;

    let Some((user_id,)) = row else {
        return Err(ServerFnError::new("Reset link is invalid or has expired"));
    };

    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;
    sqlx::query("UPDATE users SET password_hash = $1, updated_at = now() WHERE id = $2")
        .bind(&password_hash)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(support::internal)?;

    sqlx::query("DELETE FROM password_reset_tokens WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(support::internal)?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user_id.to_string())
        .await
        .map_err(support::internal)?;

    Ok(())
}

/// Update the authenticated user's profile.
#[server(endpoint = "account")]
pub async fn update_account(update: model::UpdateAccount) -> Result<UserInfo, ServerFnError> {
    use crate::models::User;

    let session: tower_sessions::Session = extract().await?;
    let user_id = support::require_user(&session).await?;

    let pool = db::get_pool().await.map_err(support::internal)?;
    let user: User = sqlx::query_as(
        "UPDATE users SET first_name = $1, last_name = $2, phone = $3, website = $4, \
         bio = $5, updated_at = now() WHERE id = $6 RETURNING *",
    )
    .bind(update.first_name.trim())
    .bind(update.last_name.trim())
    .bind(&update.phone)
    .bind(&update.website)
    .bind(&update.bio)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(support::internal)?;

    Ok(user.to_info())
}

/// Create a class owned by the authenticated user.
#[server(endpoint = "classes")]
pub async fn create_class(class: NewClass) -> Result<ClassInfo, ServerFnError> {
    use crate::models::ClassRow;

    let session: tower_sessions::Session = extract().await?;
    let user_id = support::require_user(&session).await?;

    let pool = db::get_pool().await.map_err(support::internal)?;
    let row: ClassRow = sqlx::query_as(
        "INSERT INTO classes (title, subject, meeting_time, creator_id) \
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(class.title.trim())
    .bind(class.subject.trim())
    .bind(class.meeting_time.trim())
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(support::internal)?;

    sqlx::query("INSERT INTO class_members (class_id, user_id) VALUES ($1, $2)")
        .bind(row.id)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(support::internal)?;

    Ok(row.into_info(vec![user_id.to_string()]))
}

/// List the classes the authenticated user belongs to.
#[server(endpoint = "classes/list")]
pub async fn list_classes() -> Result<Vec<ClassInfo>, ServerFnError> {
    use crate::models::ClassRow;

    let session: tower_sessions::Session = extract().await?;
    let user_id = support::require_user(&session).await?;

    let pool = db::get_pool().await.map_err(support::internal)?;
    let rows: Vec<ClassRow> = sqlx::query_as(
        "SELECT c.* FROM classes c \
         JOIN class_members m ON m.class_id = c.id \
         WHERE m.user_id = $1 ORDER BY c.created_at",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(support::internal)?;

    let mut classes = Vec::with_capacity(rows.len());
    for row in rows {
        let members = support::class_member_ids(pool, row.id).await?;
        classes.push(row.into_info(members));
    }
    Ok(classes)
}

/// Fetch one class by id.
#[server(endpoint = "classes/get")]
pub async fn get_class(id: String) -> Result<ClassInfo, ServerFnError> {
    use crate::models::ClassRow;

    let class_id =
        uuid::Uuid::parse_str(&id).map_err(|_| ServerFnError::new("Class not found"))?;

    let pool = db::get_pool().await.map_err(support::internal)?;
    let row: Option<ClassRow> = sqlx::query_as("SELECT * FROM classes WHERE id = $1")
        .bind(class_id)
        .fetch_optional(pool)
        .await
        .map_err(support::internal)?;

    let Some(row) = row else {
        return Err(ServerFnError::new("Class not found"));
    };
    let members = support::class_member_ids(pool, row.id).await?;
    Ok(row.into_info(members))
}

/// Add a member to a class by email. Only the class creator may add members.
#[server(endpoint = "classes/members")]
pub async fn add_member(member: NewMember) -> Result<ClassInfo, ServerFnError> {
    use crate::models::ClassRow;

    let session: tower_sessions::Session = extract().await?;
    let user_id = support::require_user(&session).await?;

    let class_id = uuid::Uuid::parse_str(&member.class_id)
        .map_err(|_| ServerFnError::new("Class not found"))?;
    let email = member.email.trim().to_lowercase();

    let pool = db::get_pool().await.map_err(support::internal)?;
    let row: Option<ClassRow> = sqlx::query_as("SELECT * FROM classes WHERE id = $1")
        .bind(class_id)
        .fetch_optional(pool)
        .await
        .map_err(support::internal)?;
    let Some(row) = row else {
        return Err(ServerFnError::new("Class not found"));
    };
    if row.creator_id != user_id {
        return Err(ServerFnError::new("Only the class creator can add members"));
    }

    let target: Option<(uuid::Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(support::internal)?;
    let Some((target_id,)) = target else {
        return Err(ServerFnError::new("No user with that email"));
    };

    sqlx::query(
        "INSERT INTO class_members (class_id, user_id) VALUES ($1, $2) \
         ON CONFLICT DO NOTHING",
    )
    .bind(class_id)
    .bind(target_id)
    .execute(pool)
    .await
    .map_err(support::internal)?;

    let members = support::class_member_ids(pool, class_id).await?;
    Ok(row.into_info(members))
}

/// Submit a report against a piece of content.
#[server(endpoint = "reports")]
pub async fn create_report(report: NewReport) -> Result<ReportInfo, ServerFnError> {
    use crate::models::ReportRow;

    let session: tower_sessions::Session = extract().await?;
    let user_id = support::require_user(&session).await?;

    let pool = db::get_pool().await.map_err(support::internal)?;
    let row: ReportRow = sqlx::query_as(
        "INSERT INTO reports (title, description, reporter_id, target_id, status, report_type) \
         VALUES ($1, $2, $3, $4, 'open', $5) RETURNING *",
    )
    .bind(report.title.trim())
    .bind(report.description.trim())
    .bind(user_id)
    .bind(report.target_id.trim())
    .bind(&report.report_type)
    .fetch_one(pool)
    .await
    .map_err(support::internal)?;

    Ok(row.to_info())
}

/// Create a note in a class.
#[server(endpoint = "notes")]
pub async fn create_note(note: NewNote) -> Result<NoteInfo, ServerFnError> {
    use crate::models::NoteRow;

    let session: tower_sessions::Session = extract().await?;
    let user_id = support::require_user(&session).await?;
    let class_id = uuid::Uuid::parse_str(&note.class_id)
        .map_err(|_| ServerFnError::new("Class not found"))?;

    let pool = db::get_pool().await.map_err(support::internal)?;
    let row: NoteRow = sqlx::query_as(
        "INSERT INTO notes (class_id, title, content, creator_id) \
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(class_id)
    .bind(note.title.trim())
    .bind(&note.content)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(support::internal)?;

    Ok(row.to_info())
}

/// Create a flashcard set in a class.
#[server(endpoint = "flashcards")]
pub async fn create_flashcard_set(
    set: NewFlashcardSet,
) -> Result<FlashcardSetInfo, ServerFnError> {
    use crate::models::FlashcardSetRow;

    let session: tower_sessions::Session = extract().await?;
    let user_id = support::require_user(&session).await?;
    let class_id = uuid::Uuid::parse_str(&set.class_id)
        .map_err(|_| ServerFnError::new("Class not found"))?;

    let pool = db::get_pool().await.map_err(support::internal)?;
    let row: FlashcardSetRow = sqlx::query_as(
        "INSERT INTO flashcard_sets (class_id, title, cards, creator_id) \
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(class_id)
    .bind(set.title.trim())
    .bind(sqlx::types::Json(&set.cards))
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(support::internal)?;

    Ok(row.to_info())
}

/// Create a test in a class.
#[server(endpoint = "tests")]
pub async fn create_test(test: NewTest) -> Result<TestInfo, ServerFnError> {
    use crate::models::TestRow;

    let session: tower_sessions::Session = extract().await?;
    let user_id = support::require_user(&session).await?;
    let class_id = uuid::Uuid::parse_str(&test.class_id)
        .map_err(|_| ServerFnError::new("Class not found"))?;
    let Some(duration) = test.duration_minutes else {
        return Err(ServerFnError::new("Duration must be a whole number"));
    };

    let pool = db::get_pool().await.map_err(support::internal)?;
    let row: TestRow = sqlx::query_as(
        "INSERT INTO tests (class_id, title, duration_minutes, questions, creator_id) \
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(class_id)
    .bind(test.title.trim())
    .bind(duration)
    .bind(sqlx::types::Json(&test.questions))
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(support::internal)?;

    Ok(row.to_info())
}
