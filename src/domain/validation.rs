use unicode_segmentation::UnicodeSegmentation;

use crate::domain::{error::ValidationError, models::registration::RegistrationForm};

pub type ValidationResult = Result<(), ValidationError>;

const MIN_PASSWORD_CHARS: usize = 6;

/// Spaces and tabs. Line and paragraph separators are not included.
fn is_inline_whitespace(c: char) -> bool {
    c.is_whitespace()
        && !matches!(
            c,
            '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
}

fn is_blank(value: &str) -> bool {
    value.trim_matches(is_inline_whitespace).is_empty()
}

/// Check a submitted form, stopping at the first failing rule.
///
/// Rules run in a fixed order: required fields, email shape, password
/// length, password confirmation. A required field is blank when only spaces
/// and tabs remain; a line break counts as content. The email rule only looks
/// for an `@` and a `.` anywhere in the string. Password length counts
/// user-perceived characters (grapheme clusters) of the untrimmed password.
pub fn validate(form: &RegistrationForm) -> ValidationResult {
    if is_blank(&form.name) || is_blank(&form.email) || is_blank(&form.password) {
        return Err(ValidationError::MissingFields);
    }

    if !(form.email.contains('@') && form.email.contains('.')) {
        return Err(ValidationError::InvalidEmail);
    }

    if form.password.graphemes(true).count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }

    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}
