use lazy_static::lazy_static;
use regex::Regex;

use super::{NewApplication, NewUser};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// What the caller is about to do with the payload. Rules differ per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Login,
}

/// First rule broken wins; rules never accumulate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);

pub fn validate_user(user: &NewUser, action: Action) -> Result<(), ValidationError> {
    match action {
        Action::Create => {
            if user.email.is_empty() {
                return Err(ValidationError("Required Email"));
            }
            if user.password.is_empty() {
                return Err(ValidationError("Required Password"));
            }
            if !EMAIL_RE.is_match(&user.email) {
                return Err(ValidationError("Invalid Email"));
            }
            if user.first_name.is_empty() {
                return Err(ValidationError("Required First Name"));
            }
            if user.last_name.is_empty() {
                return Err(ValidationError("Required Last Name"));
            }
            Ok(())
        }
        Action::Login => {
            if user.email.is_empty() {
                return Err(ValidationError("Required Email"));
            }
            if user.password.is_empty() {
                return Err(ValidationError("Required Password"));
            }
            if !EMAIL_RE.is_match(&user.email) {
                return Err(ValidationError("Invalid Email"));
            }
            Ok(())
        }
    }
}

pub fn validate_application(
    application: &NewApplication,
    action: Action,
) -> Result<(), ValidationError> {
    match action {
        Action::Create => {
            if application.job_title.is_empty() {
                return Err(ValidationError("Required Job Title"));
            }
            if application.company.is_empty() {
                return Err(ValidationError("Required Company"));
            }
            if application.user_id.is_nil() {
                return Err(ValidationError("Required User ID"));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
