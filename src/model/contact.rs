//! Contact form state and validation

use crate::error::ContactError;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Same shape the hosted relay template expects
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Editable fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn all() -> [ContactField; 4] {
        [
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject (optional)",
            ContactField::Message => "Message",
        }
    }

    pub fn next(self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Subject,
            ContactField::Subject => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn prev(self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Subject => ContactField::Email,
            ContactField::Message => ContactField::Subject,
        }
    }
}

/// Payload handed to the mail relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub to_email: String,
}

/// In-progress contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub focus: ContactField,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn input(&mut self, c: char) {
        if c == '\n' && self.focus != ContactField::Message {
            return;
        }
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate the trimmed fields and build the relay payload
    pub fn validate(&self, to_email: &str) -> Result<ContactMessage, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(ContactMessage {
            from_name: name.to_string(),
            from_email: email.to_string(),
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message: message.to_string(),
            to_email: to_email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Loved the web projects".to_string(),
            focus: ContactField::Name,
        }
    }

    #[test]
    fn test_validate_builds_trimmed_payload() {
        let message = filled().validate("owner@example.com").unwrap();
        assert_eq!(message.from_name, "Ada");
        assert_eq!(message.from_email, "ada@example.com");
        assert_eq!(message.subject.as_deref(), Some("Hello"));
        assert_eq!(message.to_email, "owner@example.com");
    }

    #[test]
    fn test_blank_subject_is_omitted() {
        let mut form = filled();
        form.subject = "   ".to_string();
        let message = form.validate("owner@example.com").unwrap();
        assert!(message.subject.is_none());

        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("subject").is_none());
    }

    #[test]
    fn test_missing_required_fields() {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            let mut form = filled();
            form.focus = field;
            *form.focused_mut() = "  ".to_string();
            assert_eq!(
                form.validate("owner@example.com"),
                Err(ContactError::MissingFields)
            );
        }
    }

    #[test]
    fn test_invalid_emails_rejected() {
        for email in ["ada", "ada@", "ada@example", "a da@example.com", "@example.com"] {
            let mut form = filled();
            form.email = email.to_string();
            assert_eq!(
                form.validate("owner@example.com"),
                Err(ContactError::InvalidEmail),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_input_goes_to_focused_field() {
        let mut form = ContactForm::default();
        form.input('A');
        form.focus_next();
        form.input('b');
        form.input('\n');
        form.focus_prev();
        form.focus_prev();
        assert_eq!(form.focus, ContactField::Message);
        form.input('x');
        form.input('\n');
        form.input('y');
        form.backspace();

        assert_eq!(form.name, "A");
        assert_eq!(form.email, "b");
        assert_eq!(form.message, "x\n");
    }
}
