use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Please provide a valid email address.")]
    InvalidEmail,
}

/// Raw contact form input. Fields missing from the request decode as "".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A contact form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !email.contains('@') {
            return Err(ContactError::InvalidEmail);
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

impl ContactSubmission {
    /// Plain-text notification relayed to the team chat.
    pub fn relay_text(&self) -> String {
        format!(
            "New Contact Form Submission:\nName: {}\nEmail: {}\nMessage: {}",
            self.name, self.email, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn rejects_empty_fields() {
        assert_eq!(
            form("", "a@b.c", "hi").validate(),
            Err(ContactError::MissingFields)
        );
        assert_eq!(
            form("Ada", "", "hi").validate(),
            Err(ContactError::MissingFields)
        );
        assert_eq!(
            form("Ada", "a@b.c", "   ").validate(),
            Err(ContactError::MissingFields)
        );
        assert_eq!(
            ContactForm::default().validate(),
            Err(ContactError::MissingFields)
        );
    }

    #[test]
    fn rejects_email_without_at() {
        let err = form("Ada", "ada.example.com", "hi").validate().unwrap_err();
        assert_eq!(err, ContactError::InvalidEmail);
        assert_eq!(err.to_string(), "Please provide a valid email address.");
    }

    #[test]
    fn accepts_and_formats() {
        let submission = form(" Ada ", "ada@example.com", "Hello there")
            .validate()
            .unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(
            submission.relay_text(),
            "New Contact Form Submission:\nName: Ada\nEmail: ada@example.com\nMessage: Hello there"
        );
    }

    #[test]
    fn decodes_partial_form() {
        let form: ContactForm = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(form.name, "Ada");
        assert!(form.email.is_empty());
        assert_eq!(form.validate(), Err(ContactError::MissingFields));
    }
}
