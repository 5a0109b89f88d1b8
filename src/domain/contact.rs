use super::*;
use serde::{Deserialize, Deserializer, Serialize};

/// Stored in place of an email address the user left blank.
pub const EMAIL_PLACEHOLDER: &str = "—";

/// Phone/email pair kept under one contact name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    phone: String,

    #[serde(default = "default_email", deserialize_with = "deserialize_email")]
    email: String,
}

/// User-facing requirement messages for rejected input.
pub struct ValidationReq;

impl ValidationReq {
    pub fn name_req() -> String {
        "Name is required and must not be blank".to_string()
    }

    pub fn phone_req() -> String {
        "Phone is required and must not be blank".to_string()
    }
}

impl ContactRecord {
    /// Builds a record from raw user input. Surrounding whitespace is dropped
    /// and a blank email is replaced by [`EMAIL_PLACEHOLDER`].
    pub fn new(phone: &str, email: &str) -> Self {
        let email = email.trim();

        ContactRecord {
            phone: phone.trim().to_string(),
            email: if email.is_empty() {
                EMAIL_PLACEHOLDER.to_string()
            } else {
                email.to_string()
            },
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn has_email(&self) -> bool {
        self.email != EMAIL_PLACEHOLDER
    }

    /// Email as a user would retype it: empty when only the placeholder is stored.
    pub fn editable_email(&self) -> &str {
        if self.has_email() { &self.email } else { "" }
    }

    pub fn has_phone(&self) -> bool {
        !self.phone.trim().is_empty()
    }
}

/// Presence check shared by every mutation: name and phone must survive trimming.
pub fn validate_required(name: &str, phone: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation(ValidationReq::name_req()));
    }

    if phone.trim().is_empty() {
        return Err(AppError::Validation(ValidationReq::phone_req()));
    }

    Ok(())
}

fn default_email() -> String {
    EMAIL_PLACEHOLDER.to_string()
}

fn deserialize_email<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value {
        Some(email) if !email.trim().is_empty() => Ok(email),
        _ => Ok(default_email()), // null or blank on disk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_email_becomes_placeholder() {
        let record = ContactRecord::new("555-0100", "   ");

        assert_eq!(record.email(), EMAIL_PLACEHOLDER);
        assert!(!record.has_email());
        assert_eq!(record.editable_email(), "");
    }

    #[test]
    fn input_is_trimmed() {
        let record = ContactRecord::new("  555-0100 ", " alice@example.com\n");

        assert_eq!(record.phone(), "555-0100");
        assert_eq!(record.email(), "alice@example.com");
        assert_eq!(record.editable_email(), "alice@example.com");
    }

    #[test]
    fn name_and_phone_are_required() {
        assert!(validate_required("Alice", "555-0100").is_ok());

        match validate_required("   ", "555-0100") {
            Err(AppError::Validation(msg)) => assert_eq!(msg, ValidationReq::name_req()),
            other => panic!("unexpected result: {other:?}"),
        }

        match validate_required("Alice", "\t") {
            Err(AppError::Validation(msg)) => assert_eq!(msg, ValidationReq::phone_req()),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn deserializes_missing_or_blank_email_as_placeholder() -> Result<(), AppError> {
        let missing: ContactRecord = serde_json::from_str(r#"{"phone": "555-0100"}"#)?;
        let blank: ContactRecord = serde_json::from_str(r#"{"phone": "555-0100", "email": ""}"#)?;
        let null: ContactRecord = serde_json::from_str(r#"{"phone": "555-0100", "email": null}"#)?;

        for record in [missing, blank, null] {
            assert_eq!(record.email(), EMAIL_PLACEHOLDER);
        }
        Ok(())
    }

    #[test]
    fn serializes_phone_and_email_fields() -> Result<(), AppError> {
        let record = ContactRecord::new("555-0142", "");
        let json = serde_json::to_value(&record)?;

        assert_eq!(
            json,
            serde_json::json!({"phone": "555-0142", "email": EMAIL_PLACEHOLDER})
        );
        Ok(())
    }
}
