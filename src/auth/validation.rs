//! Registration input rules and employee ID handling.

use std::sync::LazyLock;

use regex::Regex;

use crate::store::Users;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>_-\\/[]";

/// Check an email has the `local@domain.tld` shape.
pub fn validate_email_format(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check password strength. The first failing rule produces the message.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must include at least one uppercase letter.");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must include at least one lowercase letter.");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must include at least one digit.");
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err("Password must include at least one special character (e.g. !@#$%).");
    }
    Ok(())
}

fn has_emp_prefix(id: &str) -> bool {
    id.get(..3).is_some_and(|prefix| prefix.eq_ignore_ascii_case("EMP"))
}

/// Turn user input into an employee ID.
///
/// `"123"` becomes `EMP000123`; anything already starting with `EMP` is
/// upper-cased and kept. Returns `None` for empty or non-numeric input.
pub fn build_employee_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if has_emp_prefix(input) {
        return Some(input.to_uppercase());
    }
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("EMP{:0>6}", input))
}

/// Next free `EMPnnnnnn` after the highest numeric ID among `users`.
pub fn next_employee_id(users: &Users) -> String {
    let next = users
        .values()
        .filter(|user| has_emp_prefix(&user.employee_id))
        .filter_map(|user| user.employee_id[3..].trim().parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1);
    format!("EMP{:06}", next)
}
