//! Schemas for the authentication flows: register, login, update password.

use serde::{Deserialize, Serialize};

use crate::engine::{email_shape, min_len, required, Schema};

/// Raw register form payload, prior to the sign-up call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

pub fn register() -> Schema<RegisterPayload> {
    Schema::new()
        .rule("email", |p: &RegisterPayload| {
            email_shape(&p.email, "Email")
        })
        .rule("password", |p: &RegisterPayload| {
            min_len(&p.password, 8, "Password")
        })
        .rule("confirmPassword", |p: &RegisterPayload| {
            required(&p.confirm_password, "Password confirmation")
        })
        .rule("firstName", |p: &RegisterPayload| {
            required(&p.first_name, "First name")
        })
        .rule("lastName", |p: &RegisterPayload| {
            required(&p.last_name, "Last name")
        })
        .rule("role", |p: &RegisterPayload| match p.role.as_str() {
            "student" | "teacher" => Ok(()),
            _ => Err("Role must be student or teacher".to_string()),
        })
        .refine("confirmPassword", |p: &RegisterPayload| {
            if p.password == p.confirm_password {
                Ok(())
            } else {
                Err("Passwords do not match".to_string())
            }
        })
}

/// Login form payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

pub fn login() -> Schema<LoginPayload> {
    Schema::new()
        .rule("email", |p: &LoginPayload| email_shape(&p.email, "Email"))
        .rule("password", |p: &LoginPayload| {
            required(&p.password, "Password")
        })
}

/// Forgot-password form payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForgotPasswordPayload {
    pub email: String,
}

pub fn forgot_password() -> Schema<ForgotPasswordPayload> {
    Schema::new().rule("email", |p: &ForgotPasswordPayload| {
        email_shape(&p.email, "Email")
    })
}

/// Update-password form payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordPayload {
    pub password: String,
    pub confirm_password: String,
}

pub fn update_password() -> Schema<UpdatePasswordPayload> {
    Schema::new()
        .rule("password", |p: &UpdatePasswordPayload| {
            min_len(&p.password, 8, "Password")
        })
        .refine("confirmPassword", |p: &UpdatePasswordPayload| {
            if p.password == p.confirm_password {
                Ok(())
            } else {
                Err("Passwords do not match".to_string())
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register() -> RegisterPayload {
        RegisterPayload {
            email: "ada@example.com".into(),
            password: "correct horse".into(),
            confirm_password: "correct horse".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role: "student".into(),
        }
    }

    #[test]
    fn register_accepts_valid_payload() {
        assert!(register().validate(&valid_register()).is_ok());
    }

    #[test]
    fn mismatched_confirmation_attaches_to_confirm_field() {
        let payload = RegisterPayload {
            confirm_password: "something else".into(),
            ..valid_register()
        };
        let errors = register().validate(&payload).unwrap_err();
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
        assert_eq!(errors.get("password"), None);
    }

    #[test]
    fn short_password_fails_before_confirmation_check() {
        let payload = RegisterPayload {
            password: "short".into(),
            confirm_password: "short".into(),
            ..valid_register()
        };
        let errors = register().validate(&payload).unwrap_err();
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn unknown_role_rejected() {
        let payload = RegisterPayload {
            role: "admin".into(),
            ..valid_register()
        };
        assert!(register().validate(&payload).is_err());
    }

    #[test]
    fn update_password_matching_pair_passes() {
        let payload = UpdatePasswordPayload {
            password: "longenough".into(),
            confirm_password: "longenough".into(),
        };
        assert!(update_password().validate(&payload).is_ok());
    }

    #[test]
    fn update_password_mismatch_attaches_to_confirm_field() {
        let payload = UpdatePasswordPayload {
            password: "longenough".into(),
            confirm_password: "different".into(),
        };
        let errors = update_password().validate(&payload).unwrap_err();
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
        assert_eq!(errors.get("password"), None);
    }
}
