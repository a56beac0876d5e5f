//! Contact form payload and its presence checks.

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::result::Result;

/// Raw form as posted. Every field is optional so that absent keys surface as
/// [`QuoteError::InvalidContact`] rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    /// Sender's name.
    pub full_name: Option<String>,
    /// Sender's email address.
    pub email: Option<String>,
    /// Free-form message.
    pub message: Option<String>,
}

/// Contact form with every field present and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Sender's name.
    pub full_name: String,
    /// Sender's email address.
    pub email: String,
    /// Free-form message.
    pub message: String,
}

fn required(name: &str, value: Option<String>) -> Result<String> {
    let value = value.as_deref().map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(QuoteError::InvalidContact(format!("{name} is required")));
    }
    Ok(value.to_string())
}

impl ContactRequest {
    /// Check presence of every field and the basic shape of the email.
    pub fn validate(self) -> Result<ContactMessage> {
        let full_name = required("fullName", self.full_name)?;
        let email = required("email", self.email)?;
        let message = required("message", self.message)?;

        if !email.contains('@') {
            return Err(QuoteError::InvalidContact(format!(
                "email {email:?} is not an address"
            )));
        }

        Ok(ContactMessage {
            full_name,
            email,
            message,
        })
    }
}

impl ContactMessage {
    /// Acknowledgement sentence returned to the sender.
    pub fn confirmation(&self) -> String {
        format!(
            "Thank you {}, we received your message and will reply to {}.",
            self.full_name, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(full_name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            full_name: Some(full_name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    #[test]
    fn fields_are_trimmed() {
        let contact = request("  Jane Doe ", "jane@example.com", " Hi ").validate().unwrap();
        assert_eq!(contact.full_name, "Jane Doe");
        assert_eq!(contact.message, "Hi");
        assert!(contact.confirmation().starts_with("Thank you Jane Doe,"));
    }

    #[test]
    fn blank_or_missing_fields_are_rejected() {
        let err = request("Jane", "jane@example.com", "   ").validate().unwrap_err();
        assert_eq!(err, QuoteError::InvalidContact("message is required".into()));

        let err = ContactRequest::default().validate().unwrap_err();
        assert_eq!(err, QuoteError::InvalidContact("fullName is required".into()));
    }

    #[test]
    fn email_needs_an_at_sign() {
        let err = request("Jane", "jane.example.com", "Hi").validate().unwrap_err();
        assert_eq!(err.kind(), "invalid_contact");
    }

    #[test]
    fn deserializes_camel_case() {
        let raw = r#"{"fullName":"Jane","email":"jane@example.com"}"#;
        let req: ContactRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.full_name.as_deref(), Some("Jane"));
        assert!(req.message.is_none());
    }
}
