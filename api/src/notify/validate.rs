//! request format checks, run in order before any external call

use lazy_static::lazy_static;
use regex::Regex;

use common::constants::{ACCEPTED_PHONE_PREFIXES, MAX_MESSAGE_BYTES, USER_ID_PATTERN};
use common::error_code::NotifyError;

lazy_static! {
    static ref USER_ID_RE: Regex = Regex::new(USER_ID_PATTERN).unwrap();
}

pub fn require_fields<'a>(
    user_id: &'a Option<String>,
    message: &'a Option<String>,
) -> Result<(&'a str, &'a str), NotifyError> {
    match (user_id.as_deref(), message.as_deref()) {
        (Some(user_id), Some(message)) if !user_id.is_empty() && !message.is_empty() => {
            Ok((user_id, message))
        }
        _ => Err(NotifyError::MissingFields),
    }
}

pub fn check_user_id(user_id: &str) -> Result<(), NotifyError> {
    if USER_ID_RE.is_match(user_id) {
        Ok(())
    } else {
        Err(NotifyError::InvalidUserId)
    }
}

//str::len is the utf-8 byte length, which is what the limit counts
pub fn check_message_size(message: &str) -> Result<(), NotifyError> {
    if message.len() <= MAX_MESSAGE_BYTES {
        Ok(())
    } else {
        Err(NotifyError::MessageTooLong)
    }
}

pub fn check_phone_numbers(phone_numbers: &[String]) -> Result<(), NotifyError> {
    for number in phone_numbers {
        if !ACCEPTED_PHONE_PREFIXES
            .iter()
            .any(|prefix| number.starts_with(prefix))
        {
            return Err(NotifyError::InvalidPhoneFormat(number.clone()));
        }
    }
    Ok(())
}
