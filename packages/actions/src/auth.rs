//! Authentication handlers: login, register, forgot/update password, and
//! account profile updates.

use model::{Outcome, ProfileAttributes, UpdateAccount, UserInfo};
use schema::auth::{
    ForgotPasswordPayload, LoginPayload, RegisterPayload, UpdatePasswordPayload,
};

use crate::{field, raw_field, DataClient, RawForm};

pub async fn login(client: &impl DataClient, form: &RawForm) -> Outcome<UserInfo> {
    let payload = LoginPayload {
        email: field(form, "email"),
        password: raw_field(form, "password"),
    };
    if let Err(errors) = schema::auth::login().validate(&payload) {
        return Outcome::err(errors.first_message());
    }
    match client.authenticate(&payload.email, &payload.password).await {
        Ok(user) => Outcome::ok_with("Logged in successfully", user),
        Err(e) => Outcome::err(e.to_string()),
    }
}

/// Register returns the same uniform outcome as every other handler; the
/// caller decides where to navigate on success.
pub async fn register(client: &impl DataClient, form: &RawForm) -> Outcome<UserInfo> {
    let payload = RegisterPayload {
        email: field(form, "email"),
        password: raw_field(form, "password"),
        confirm_password: raw_field(form, "confirmPassword"),
        first_name: field(form, "firstName"),
        last_name: field(form, "lastName"),
        role: field(form, "role"),
    };
    if let Err(errors) = schema::auth::register().validate(&payload) {
        return Outcome::err(errors.first_message());
    }
    let profile = ProfileAttributes {
        first_name: payload.first_name.clone(),
        last_name: payload.last_name.clone(),
        role: payload.role.clone(),
    };
    match client
        .sign_up(&payload.email, &payload.password, profile)
        .await
    {
        Ok(user) => Outcome::ok_with("Account created successfully", user),
        Err(e) => Outcome::err(e.to_string()),
    }
}

pub async fn forgot_password(client: &impl DataClient, form: &RawForm) -> Outcome {
    let payload = ForgotPasswordPayload {
        email: field(form, "email"),
    };
    if let Err(errors) = schema::auth::forgot_password().validate(&payload) {
        return Outcome::err(errors.first_message());
    }
    match client.reset_password_for_email(&payload.email).await {
        Ok(()) => Outcome::ok("If that address exists, a reset link has been sent"),
        Err(e) => Outcome::err(e.to_string()),
    }
}

pub async fn update_password(client: &impl DataClient, form: &RawForm) -> Outcome {
    let payload = UpdatePasswordPayload {
        password: raw_field(form, "password"),
        confirm_password: raw_field(form, "confirmPassword"),
    };
    if let Err(errors) = schema::auth::update_password().validate(&payload) {
        return Outcome::err(errors.first_message());
    }
    match client.update_password(&payload.password).await {
        Ok(()) => Outcome::ok("Password updated successfully"),
        Err(e) => Outcome::err(e.to_string()),
    }
}

/// Complete a password reset from an emailed link. The token comes from the
/// route, not the form; the remote side consumes it.
pub async fn update_password_with_token(
    client: &impl DataClient,
    form: &RawForm,
    token: &str,
) -> Outcome {
    let payload = UpdatePasswordPayload {
        password: raw_field(form, "password"),
        confirm_password: raw_field(form, "confirmPassword"),
    };
    if let Err(errors) = schema::auth::update_password().validate(&payload) {
        return Outcome::err(errors.first_message());
    }
    match client
        .update_password_with_token(token, &payload.password)
        .await
    {
        Ok(()) => Outcome::ok("Password updated successfully"),
        Err(e) => Outcome::err(e.to_string()),
    }
}

pub async fn update_account(client: &impl DataClient, form: &RawForm) -> Outcome<UserInfo> {
    // Empty optional fields normalize to absent before validation runs.
    let payload = UpdateAccount {
        first_name: field(form, "firstName"),
        last_name: field(form, "lastName"),
        phone: schema::optional(&raw_field(form, "phone")),
        website: schema::optional(&raw_field(form, "website")),
        bio: schema::optional(&raw_field(form, "bio")),
    };
    if let Err(errors) = schema::account::update_account().validate(&payload) {
        return Outcome::err(errors.first_message());
    }
    match client.update_account(payload).await {
        Ok(user) => Outcome::ok_with("Profile updated successfully", user),
        Err(e) => Outcome::err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockClient;
    use crate::ClientError;

    fn register_form() -> RawForm {
        RawForm::from([
            ("email".to_string(), "ada@example.com".to_string()),
            ("password".to_string(), "correct horse".to_string()),
            ("confirmPassword".to_string(), "correct horse".to_string()),
            ("firstName".to_string(), "Ada".to_string()),
            ("lastName".to_string(), "Lovelace".to_string()),
            ("role".to_string(), "student".to_string()),
        ])
    }

    #[tokio::test]
    async fn register_success_forwards_user_data() {
        let client = MockClient::ok();
        let outcome = register(&client, &register_form()).await;
        assert!(outcome.success);
        assert_eq!(outcome.message, "Account created successfully");
        assert_eq!(outcome.data.unwrap().email, "ada@example.com");
        assert_eq!(client.calls.get(), 1);
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_client() {
        let client = MockClient::ok();
        let mut form = register_form();
        form.insert("confirmPassword".into(), "different".into());
        let outcome = register(&client, &form).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Passwords do not match");
        assert_eq!(client.calls.get(), 0);
    }

    #[tokio::test]
    async fn remote_failure_surfaces_the_remote_message() {
        let client =
            MockClient::failing(ClientError::Remote("Invalid email or password".into()));
        let form = RawForm::from([
            ("email".to_string(), "ada@example.com".to_string()),
            ("password".to_string(), "wrong password".to_string()),
        ]);
        let outcome = login(&client, &form).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Invalid email or password");
        assert!(outcome.data.is_none());
        assert_eq!(client.calls.get(), 1);
    }

    #[tokio::test]
    async fn unexpected_failure_maps_to_generic_message() {
        let client = MockClient::failing(ClientError::Unexpected);
        let form = RawForm::from([
            ("email".to_string(), "ada@example.com".to_string()),
            ("password".to_string(), "pw".to_string()),
        ]);
        let outcome = login(&client, &form).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Something went wrong. Please try again.");
    }

    #[tokio::test]
    async fn missing_form_fields_read_as_empty_and_fail_validation() {
        let client = MockClient::ok();
        let outcome = login(&client, &RawForm::new()).await;
        assert!(!outcome.success);
        assert_eq!(client.calls.get(), 0);
    }

    fn password_pair(password: &str, confirm: &str) -> RawForm {
        RawForm::from([
            ("password".to_string(), password.to_string()),
            ("confirmPassword".to_string(), confirm.to_string()),
        ])
    }

    #[tokio::test]
    async fn token_reset_with_matching_pair_succeeds() {
        let client = MockClient::ok();
        let form = password_pair("longenough", "longenough");
        let outcome = update_password_with_token(&client, &form, "tok-1").await;
        assert!(outcome.success);
        assert_eq!(client.calls.get(), 1);
    }

    #[tokio::test]
    async fn token_reset_validates_before_the_client() {
        let client = MockClient::ok();
        let form = password_pair("longenough", "different");
        let outcome = update_password_with_token(&client, &form, "tok-1").await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Passwords do not match");
        assert_eq!(client.calls.get(), 0);
    }

    #[tokio::test]
    async fn stale_token_error_surfaces() {
        let client = MockClient::failing(ClientError::Remote(
            "Reset link is invalid or has expired".into(),
        ));
        let form = password_pair("longenough", "longenough");
        let outcome = update_password_with_token(&client, &form, "tok-stale").await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Reset link is invalid or has expired");
    }

    #[tokio::test]
    async fn update_account_normalizes_empty_optionals() {
        let client = MockClient::ok();
        let form = RawForm::from([
            ("firstName".to_string(), "Ada".to_string()),
            ("lastName".to_string(), "Lovelace".to_string()),
            ("phone".to_string(), "".to_string()),
            ("website".to_string(), "".to_string()),
        ]);
        let outcome = update_account(&client, &form).await;
        assert!(outcome.success);
        let user = outcome.data.unwrap();
        assert_eq!(user.phone, None);
        assert_eq!(user.website, None);
    }
}
