//! Email address value type and syntax checking.
//!
//! The checker follows the RFC 5322 address shape: a dot-atom or quoted local
//! part, a single separating `@`, and a domain of at least two labels. No
//! length limits are applied.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters allowed in an unquoted local part besides alphanumerics.
const ATEXT_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidEmail`] when the value does not
    /// match the address grammar.
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectDomainError> {
        let raw = value.into();
        if !is_valid_email(&raw) {
            return Err(ProjectDomainError::InvalidEmail(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ProjectDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns `true` when `candidate` is a syntactically valid email address.
///
/// # Examples
///
/// ```
/// use project_registry::project::domain::is_valid_email;
///
/// assert!(is_valid_email("student@course.example.org"));
/// assert!(!is_valid_email("student@localhost"));
/// assert!(!is_valid_email("not-an-address"));
/// ```
#[must_use]
pub fn is_valid_email(candidate: &str) -> bool {
    // The domain grammar never contains `@`, so the last one separates the
    // parts even when a quoted local part carries its own.
    let Some((local, domain)) = candidate.rsplit_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.starts_with('"') {
        return is_valid_quoted_string(local);
    }
    !local.is_empty() && local.split('.').all(is_valid_atom)
}

fn is_valid_atom(atom: &str) -> bool {
    !atom.is_empty() && atom.chars().all(is_atext)
}

fn is_atext(character: char) -> bool {
    character.is_ascii_alphanumeric()
        || ATEXT_SPECIALS.contains(character)
        || (!character.is_ascii() && !character.is_whitespace() && !character.is_control())
}

fn is_valid_quoted_string(local: &str) -> bool {
    let Some(inner) = local
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return false;
    };

    let mut characters = inner.chars();
    while let Some(character) = characters.next() {
        match character {
            '\\' => {
                if !characters.next().is_some_and(is_printable_ascii) {
                    return false;
                }
            }
            '"' => return false,
            other if !is_printable_ascii(other) => return false,
            _ => {}
        }
    }
    true
}

const fn is_printable_ascii(character: char) -> bool {
    matches!(character, ' '..='~')
}

fn is_valid_domain(domain: &str) -> bool {
    let mut label_count = 0_usize;
    for label in domain.split('.') {
        if !is_valid_label(label) {
            return false;
        }
        label_count += 1;
    }
    label_count >= 2
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|character| character.is_alphanumeric() || character == '-')
}
