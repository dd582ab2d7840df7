//! Model for `POST /leads/`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LeadError;

/// A model for describing a sales lead created from the contact form.
/// Consists of:
/// 1. Name of the person, required
/// 2. Phone number, required
/// 3. Telegram username, optional
/// 4. Free-form note, optional
/// 5. Client-generated submission key so a double send cannot create a
///    duplicate lead on the backend
#[derive(Debug, Deserialize, Serialize)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub telegram_username: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    pub submission_key: String,
}

impl Lead {
    pub fn new(
        name: String,
        phone: String,
        telegram_username: Option<String>,
        note: Option<String>,
    ) -> Self {
        Lead {
            name,
            phone,
            telegram_username,
            note,
            submission_key: Uuid::new_v4().to_string(),
        }
    }

    /// Client-side validation mirroring the form: `name` and `phone` must be
    /// non-empty after trimming, everything else is optional.
    pub fn validate(&self) -> Result<(), LeadError> {
        if self.name.trim().is_empty() {
            return Err(LeadError::MissingField("name"));
        }
        if self.phone.trim().is_empty() {
            return Err(LeadError::MissingField("phone"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_without_name_is_invalid() {
        let lead = Lead::new(String::new(), "+998901234567".to_string(), None, None);
        assert!(matches!(lead.validate(), Err(LeadError::MissingField("name"))));
    }

    #[test]
    fn lead_with_blank_phone_is_invalid() {
        let lead = Lead::new("Aziza".to_string(), "   ".to_string(), None, None);
        assert!(matches!(lead.validate(), Err(LeadError::MissingField("phone"))));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let lead = Lead::new("Aziza".to_string(), "+998901234567".to_string(), None, None);
        assert!(lead.validate().is_ok());
        assert!(!lead.submission_key.is_empty());
    }

    #[test]
    fn submission_keys_differ_between_leads() {
        let first = Lead::new("A".to_string(), "+998900000000".to_string(), None, None);
        let second = Lead::new("A".to_string(), "+998900000000".to_string(), None, None);
        assert_ne!(first.submission_key, second.submission_key);
    }
}
