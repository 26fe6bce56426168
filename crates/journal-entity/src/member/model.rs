//! Organization member model, parsed from the identity provider's
//! loosely-typed membership payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use journal_core::error::{AppError, ErrorKind};
use journal_core::AppResult;

/// A member of the journal's organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgMember {
    /// Identity-provider user id.
    pub user_id: String,
    /// Primary identifier (email address).
    pub identifier: String,
    /// Given name, when the provider has one.
    pub first_name: Option<String>,
    /// Family name, when the provider has one.
    pub last_name: Option<String>,
    /// Organization role (e.g. `org:admin`, `org:member`).
    pub role: String,
}

impl OrgMember {
    /// Parse a member from one element of the provider's membership list.
    ///
    /// The payload nests user fields under `public_user_data`; `user_id`,
    /// `identifier`, and `role` are required and a missing or mistyped
    /// field fails the whole call rather than defaulting.
    pub fn from_value(value: &Value) -> AppResult<Self> {
        let role = required_str(value, "role")?;
        let user_data = value.get("public_user_data").ok_or_else(|| {
            shape_error("membership entry has no public_user_data object")
        })?;

        Ok(Self {
            user_id: required_str(user_data, "user_id")?,
            identifier: required_str(user_data, "identifier")?,
            first_name: optional_str(user_data, "first_name"),
            last_name: optional_str(user_data, "last_name"),
            role,
        })
    }

    /// Human-readable display name: full name when present, else the
    /// identifier.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.identifier.clone(),
        }
    }

    /// Whether this membership carries the given admin role marker.
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}

fn required_str(value: &Value, field: &str) -> AppResult<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .ok_or_else(|| shape_error(format!("membership entry missing required field '{field}'")))
}

fn optional_str(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn shape_error(message: impl Into<String>) -> AppError {
    AppError::new(ErrorKind::Serialization, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_complete_member() {
        let value = json!({
            "role": "org:admin",
            "public_user_data": {
                "user_id": "user_123",
                "identifier": "editor@ucla.edu",
                "first_name": "Ada",
                "last_name": "Alvarez",
            }
        });
        let member = OrgMember::from_value(&value).unwrap();
        assert_eq!(member.user_id, "user_123");
        assert_eq!(member.display_name(), "Ada Alvarez");
        assert!(member.has_role("org:admin"));
    }

    #[test]
    fn test_missing_required_field_fails_fast() {
        let value = json!({
            "role": "org:member",
            "public_user_data": { "identifier": "someone@ucla.edu" }
        });
        let err = OrgMember::from_value(&value).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
        assert!(err.message.contains("user_id"));
    }

    #[test]
    fn test_display_name_falls_back_to_identifier() {
        let value = json!({
            "role": "org:member",
            "public_user_data": {
                "user_id": "user_9",
                "identifier": "anon@ucla.edu",
                "first_name": null,
            }
        });
        let member = OrgMember::from_value(&value).unwrap();
        assert_eq!(member.display_name(), "anon@ucla.edu");
    }
}
