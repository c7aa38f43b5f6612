/***
success 0
common 1
notify api 2000

error message is correspond with error code
*/

use thiserror::Error;

pub trait ErrorCode {
    fn code(&self) -> u16;
    fn http_status(&self) -> u16;
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("internal error: {0}")]
    Internal(String),
    #[error("user_id or message is missing or empty")]
    MissingFields,
    #[error("user_id is not an 8 to 12 digit number")]
    InvalidUserId,
    #[error("message body exceeds the byte limit")]
    MessageTooLong,
    #[error("phone number {0} carries an unsupported prefix")]
    InvalidPhoneFormat(String),
    #[error("no record stored for user {0}")]
    UserNotFound(String),
    #[error("recipient list is empty after resolution")]
    NoRecipients,
    #[error("source ip {0} is outside the user's allowed ranges")]
    AuthorizationDenied(String),
}

impl ErrorCode for NotifyError {
    fn code(&self) -> u16 {
        match self {
            Self::Internal(_) => 1,
            Self::MissingFields => 2001,
            Self::InvalidUserId => 2002,
            Self::MessageTooLong => 2003,
            Self::InvalidPhoneFormat(_) => 2004,
            Self::UserNotFound(_) => 2005,
            Self::NoRecipients => 2006,
            Self::AuthorizationDenied(_) => 2007,
        }
    }

    fn http_status(&self) -> u16 {
        match self {
            Self::Internal(_) => 500,
            //the denial must not be readable as access control from outside
            Self::AuthorizationDenied(_) => 418,
            _ => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_per_kind() {
        let all = [
            NotifyError::Internal("x".to_string()),
            NotifyError::MissingFields,
            NotifyError::InvalidUserId,
            NotifyError::MessageTooLong,
            NotifyError::InvalidPhoneFormat("+1".to_string()),
            NotifyError::UserNotFound("00000000".to_string()),
            NotifyError::NoRecipients,
            NotifyError::AuthorizationDenied("198.51.100.7".to_string()),
        ];
        let mut codes: Vec<u16> = all.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn status_classes() {
        assert_eq!(NotifyError::Internal("x".to_string()).http_status(), 500);
        assert_eq!(
            NotifyError::AuthorizationDenied("10.0.0.1".to_string()).http_status(),
            418
        );
        assert_eq!(NotifyError::MissingFields.http_status(), 400);
        assert_eq!(NotifyError::NoRecipients.http_status(), 400);
    }
}
