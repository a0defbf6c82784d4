//! Numeric input validation
//!
//! Numeric steps accept an edit only when the resulting text is still a
//! plain non-negative number within the upper bound. Rejected edits are
//! dropped without feedback.

/// Check a candidate value for a numeric field after a keystroke.
///
/// # Examples
/// ```
/// use quizfunnel::quiz::input::accept_numeric_edit;
///
/// assert!(accept_numeric_edit("200", 200.0));
/// assert!(!accept_numeric_edit("201", 200.0));
/// assert!(accept_numeric_edit("", 200.0));
/// ```
pub fn accept_numeric_edit(candidate: &str, limit: f64) -> bool {
    if candidate.is_empty() {
        return true;
    }

    let mut separators = 0;
    for c in candidate.chars() {
        match c {
            '0'..='9' => {}
            '.' | ',' => separators += 1,
            _ => return false,
        }
    }
    if separators > 1 {
        return false;
    }

    match candidate.replace(',', ".").parse::<f64>() {
        Ok(value) => value <= limit,
        Err(_) => false,
    }
}

/// Whether a character can start or extend a numeric entry
pub fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ','
}
