use std::borrow::Cow;

use validator::ValidationError;

pub fn required() -> ValidationError {
    let mut error = ValidationError::new("required");
    error.message = Some(Cow::Borrowed("This field is required"));
    error
}

pub fn invalid() -> ValidationError {
    let mut error = ValidationError::new("invalid");
    error.message = Some(Cow::Borrowed("This value is not valid"));
    error
}

pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(required());
    }

    Ok(())
}
