//! Per-field rule checks — pure logic, no I/O.
//!
//! Each check returns `Some(message)` on the first violated rule for that
//! field, `None` when the field passes. Messages are the exact strings shown
//! inline in the form, so both sides report identically.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::DbId;

/// `local@domain.tld`, no whitespace in any part.
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"))
}

/// Name: required, trimmed length at least 2.
pub fn check_name(name: &str) -> Option<&'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Some("Name is required")
    } else if trimmed.chars().count() < 2 {
        Some("Name must be at least 2 characters")
    } else {
        None
    }
}

/// Email: required, `local@domain.tld` shape.
pub fn check_email(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some("Email is required")
    } else if !email_regex().is_match(email) {
        Some("Please enter a valid email address")
    } else {
        None
    }
}

/// Age: required, in [1, 150]. Integrality is enforced by the type here;
/// free-text input goes through [`parse_age`] first.
pub fn check_age(age: Option<i32>) -> Option<&'static str> {
    match age {
        None => Some("Age is required"),
        Some(a) if !(1..=150).contains(&a) => Some("Please enter a realistic age! (1-150)"),
        Some(_) => None,
    }
}

/// Parse a free-text age entry, distinguishing empty, non-numeric,
/// non-integer, and out-of-range input with separate messages.
pub fn parse_age(input: &str) -> Result<i32, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Age is required");
    }
    let value: f64 = trimmed.parse().map_err(|_| "Age must be a number!")?;
    if value.fract() != 0.0 {
        return Err("Age must be a whole number!");
    }
    let age = value as i32;
    if !(1..=150).contains(&age) {
        return Err("Please enter a realistic age! (1-150)");
    }
    Ok(age)
}

/// State: required and positive. Whether the id actually exists is checked
/// against the state table by the persistence gateway.
pub fn check_state(state_id: Option<DbId>) -> Option<&'static str> {
    match state_id {
        None => Some("Please select a state"),
        Some(id) if id <= 0 => Some("Please select a state"),
        Some(_) => None,
    }
}
