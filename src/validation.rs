/// Keystroke-level character filters for the contact form. These mirror what
/// the form applies on every write: disallowed characters are dropped, nothing
/// is rejected. They are display-time constraints, not server-side validation.

pub fn filter_name(input: &str) -> String {
    // Letters only
    input.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

pub fn filter_phone(input: &str) -> String {
    // Digits only
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn filter_email(input: &str) -> String {
    // Letters, digits, and the usual address punctuation
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '_' | '-'))
        .collect()
}
