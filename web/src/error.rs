use leptos::prelude::ServerFnError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("Cannot change status from {from} to {to}")]
    InvalidTransition { from: String, to: String },
    #[error("The {time} slot on {date} is already booked")]
    SlotUnavailable { date: String, time: String },
    #[error("Invalid email or password")]
    Unauthorized,
}

pub type AppResult<T> = Result<T, AppError>;

// `?` turns an `AppError` into `ServerFnError::ServerError` through the
// blanket `From<E: Error>` impl in server_fn.

/// Strips the transport prefix leptos puts in front of server errors so the
/// message can be shown to the user as-is.
pub fn user_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(AppError::NotFound("Artist 9".into()).to_string(), "Artist 9 not found");
        assert_eq!(
            AppError::SlotUnavailable {
                date: "2026-11-02".into(),
                time: "14:00".into()
            }
            .to_string(),
            "The 14:00 slot on 2026-11-02 is already booked"
        );
        assert_eq!(
            AppError::InvalidTransition {
                from: "Resolved".into(),
                to: "Dismissed".into()
            }
            .to_string(),
            "Cannot change status from Resolved to Dismissed"
        );
    }

    #[test]
    fn test_server_fn_conversion_keeps_message() {
        let err: ServerFnError = AppError::Unauthorized.into();
        assert_eq!(user_message(&err), "Invalid email or password");
    }
}
