use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long";

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A named input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The input's `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// In-memory contents of the contact form. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-field validation messages, parallel to [`ContactDraft`]. The subject
/// has no rule and therefore no slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Message => self.message.as_deref(),
            Field::Subject => None,
        }
    }

    /// Drop one field's error. Returns whether there was one.
    pub fn clear(&mut self, field: Field) -> bool {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
            Field::Subject => return false,
        };
        slot.take().is_some()
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::Name, self.name.as_deref()),
            (Field::Email, self.email.as_deref()),
            (Field::Message, self.message.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, msg)| msg.map(|m| (field, m)))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check every rule and collect all failures; nothing short-circuits.
pub fn validate_contact_draft(draft: &ContactDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.name.trim().chars().count() < MIN_NAME_CHARS {
        errors.name = Some(NAME_TOO_SHORT.to_string());
    }
    if !is_valid_email(draft.email.trim()) {
        errors.email = Some(EMAIL_INVALID.to_string());
    }
    if draft.message.trim().chars().count() < MIN_MESSAGE_CHARS {
        errors.message = Some(MESSAGE_TOO_SHORT.to_string());
    }
    errors
}

/// Lifecycle of the (simulated) submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    #[default]
    Idle,
    /// Idle, with validation errors on display.
    Invalid,
    Submitting,
    Submitted,
}

impl FormPhase {
    /// Whether a new submission may start.
    pub fn accepts_submit(self) -> bool {
        matches!(self, Self::Idle | Self::Invalid)
    }
}

/// The contact form: draft, errors, and where the submission stands.
///
/// Submitting never leaves the page. The "sending" delay is a stand-in for
/// a backend that does not exist; no network call is made.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    errors: FieldErrors,
    phase: FormPhase,
    /// Bumped on every accepted submission so stale timers can be told apart.
    round: u64,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    /// Store a field value. Returns `true` when this cleared a shown error.
    pub fn update(&mut self, field: Field, value: impl Into<String>) -> bool {
        self.draft.set(field, value);
        let cleared = self.errors.clear(field);
        if cleared && self.errors.is_empty() && self.phase == FormPhase::Invalid {
            self.phase = FormPhase::Idle;
        }
        cleared
    }

    /// Validate and, when clean, move to `Submitting`. Returns the new round
    /// on success or the collected errors on failure.
    pub fn begin_submit(&mut self) -> Result<u64, FieldErrors> {
        let errors = validate_contact_draft(&self.draft);
        if !errors.is_empty() {
            self.errors = errors.clone();
            self.phase = FormPhase::Invalid;
            return Err(errors);
        }
        self.errors = FieldErrors::default();
        self.phase = FormPhase::Submitting;
        self.round += 1;
        Ok(self.round)
    }

    /// `Submitting → Submitted`; the draft is cleared. Ignored for a stale
    /// round or a form that is not submitting.
    pub fn complete(&mut self, round: u64) -> bool {
        if round != self.round || self.phase != FormPhase::Submitting {
            return false;
        }
        self.phase = FormPhase::Submitted;
        self.draft.clear();
        true
    }

    /// `Submitted → Idle`.
    pub fn revert(&mut self, round: u64) -> bool {
        if round != self.round || self.phase != FormPhase::Submitted {
            return false;
        }
        self.phase = FormPhase::Idle;
        true
    }

    pub fn reset(&mut self) {
        self.draft.clear();
        self.errors = FieldErrors::default();
        self.phase = FormPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.into(),
            email: email.into(),
            subject: String::new(),
            message: message.into(),
        }
    }

    #[test]
    fn all_failures_reported_together() {
        let errors = validate_contact_draft(&draft("A", "bad", "short"));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.name.as_deref(), Some(NAME_TOO_SHORT));
        assert_eq!(errors.email.as_deref(), Some(EMAIL_INVALID));
        assert_eq!(errors.message.as_deref(), Some(MESSAGE_TOO_SHORT));
    }

    #[test]
    fn minimal_valid_draft() {
        let errors = validate_contact_draft(&draft("Jo", "a@b.co", "1234567890"));
        assert!(errors.is_empty());
    }

    #[test]
    fn lengths_ignore_surrounding_whitespace() {
        let errors = validate_contact_draft(&draft("  J  ", "a@b.co", "   123456789   "));
        assert!(errors.name.is_some());
        assert!(errors.message.is_some());
        assert!(errors.email.is_none());
    }

    #[test]
    fn subject_is_never_validated() {
        let mut d = draft("Jo", "a@b.co", "1234567890");
        d.subject = String::new();
        assert!(validate_contact_draft(&d).get(Field::Subject).is_none());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("jo@example.com"));
        assert!(is_valid_email("a@b.c.d"));
        assert!(!is_valid_email("jo@example"));
        assert!(!is_valid_email("jo example@x.com"));
        assert!(!is_valid_email("jo@@x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn name_counts_characters_not_bytes() {
        let errors = validate_contact_draft(&draft("Zoë", "a@b.co", "1234567890"));
        assert!(errors.is_empty());
        let errors = validate_contact_draft(&draft("é", "a@b.co", "1234567890"));
        assert!(errors.name.is_some());
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("message".parse::<Field>(), Ok(Field::Message));
        assert!("phone".parse::<Field>().is_err());
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = ContactForm::default();
        assert!(form.begin_submit().is_err());
        assert_eq!(form.phase(), FormPhase::Invalid);

        assert!(form.update(Field::Name, "Jo"));
        assert!(!form.update(Field::Subject, "Hi"));
        assert!(form.errors().name.is_none());
        assert!(form.errors().email.is_some());
    }

    #[test]
    fn submission_lifecycle() {
        let mut form = ContactForm::default();
        form.update(Field::Name, "Jo");
        form.update(Field::Email, "a@b.co");
        form.update(Field::Message, "1234567890");

        let round = form.begin_submit().unwrap_or_default();
        assert_eq!(round, 1);
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert!(!form.phase().accepts_submit());

        assert!(!form.revert(round));
        assert!(form.complete(round));
        assert_eq!(form.draft(), &ContactDraft::default());
        assert!(form.revert(round));
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn stale_round_is_ignored() {
        let mut form = ContactForm::default();
        form.update(Field::Name, "Jo");
        form.update(Field::Email, "a@b.co");
        form.update(Field::Message, "1234567890");
        let round = form.begin_submit().unwrap_or_default();
        form.reset();
        assert!(!form.complete(round));
        assert_eq!(form.phase(), FormPhase::Idle);
    }
}
