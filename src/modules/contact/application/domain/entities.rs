use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::store::PatchField;
use crate::shared::validation::{
    email, optional_text, patch_optional_text, patch_required, required_text, ValidationError,
};

pub const DEFAULT_INBOX_LIMIT: u64 = 100;
pub const MAX_INBOX_LIMIT: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub id: i32,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub twitter_url: Option<String>,
    pub website_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
}

impl NewContactInfo {
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            email: email("email", &self.email)?,
            phone: optional_text(self.phone),
            location: optional_text(self.location),
            linkedin_url: optional_text(self.linkedin_url),
            github_url: optional_text(self.github_url),
            twitter_url: optional_text(self.twitter_url),
            website_url: optional_text(self.website_url),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactInfoChanges {
    #[serde(default)]
    pub email: PatchField<String>,
    #[serde(default)]
    pub phone: PatchField<String>,
    #[serde(default)]
    pub location: PatchField<String>,
    #[serde(default)]
    pub linkedin_url: PatchField<String>,
    #[serde(default)]
    pub github_url: PatchField<String>,
    #[serde(default)]
    pub twitter_url: PatchField<String>,
    #[serde(default)]
    pub website_url: PatchField<String>,
}

impl ContactInfoChanges {
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            email: patch_required("email", self.email, |v| email("email", &v))?,
            phone: patch_optional_text(self.phone),
            location: patch_optional_text(self.location),
            linkedin_url: patch_optional_text(self.linkedin_url),
            github_url: patch_optional_text(self.github_url),
            twitter_url: patch_optional_text(self.twitter_url),
            website_url: patch_optional_text(self.website_url),
        })
    }
}

/// Visitor message. Only `is_read` changes after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Newest first; id breaks ties between messages stored in the same instant.
    pub fn inbox_key(&self) -> (std::cmp::Reverse<DateTime<Utc>>, std::cmp::Reverse<i32>) {
        (
            std::cmp::Reverse(self.created_at),
            std::cmp::Reverse(self.id),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

impl NewContactMessage {
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("name", &self.name)?,
            email: email("email", &self.email)?,
            subject: optional_text(self.subject),
            message: required_text("message", &self.message)?,
        })
    }
}

/// `?unread_only=&skip=&limit=` on the inbox listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MessageQuery {
    #[serde(default)]
    pub unread_only: bool,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_INBOX_LIMIT
}

impl Default for MessageQuery {
    fn default() -> Self {
        Self {
            unread_only: false,
            skip: 0,
            limit: DEFAULT_INBOX_LIMIT,
        }
    }
}

impl MessageQuery {
    pub fn unread() -> Self {
        Self {
            unread_only: true,
            ..Self::default()
        }
    }

    /// Bounds paging so both values fit the signed OFFSET/LIMIT columns.
    pub fn validated(self) -> Result<Self, ValidationError> {
        if self.skip > i64::MAX as u64 {
            return Err(ValidationError::new(
                "skip",
                format!("must be at most {}", i64::MAX),
            ));
        }
        if self.limit > MAX_INBOX_LIMIT {
            return Err(ValidationError::new(
                "limit",
                format!("must be at most {MAX_INBOX_LIMIT}"),
            ));
        }
        Ok(self)
    }

    pub fn matches(&self, message: &ContactMessage) -> bool {
        !self.unread_only || !message.is_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_requires_valid_email() {
        let msg = NewContactMessage {
            name: "Visitor".to_string(),
            email: "visitor-at-example".to_string(),
            subject: None,
            message: "Hello".to_string(),
        };
        assert_eq!(msg.validated().unwrap_err().field, "email");
    }

    #[test]
    fn test_message_blank_subject_is_dropped() {
        let msg = NewContactMessage {
            name: " Visitor ".to_string(),
            email: "visitor@example.com".to_string(),
            subject: Some("   ".to_string()),
            message: "Hello".to_string(),
        }
        .validated()
        .unwrap();
        assert_eq!(msg.name, "Visitor");
        assert_eq!(msg.subject, None);
    }

    #[test]
    fn test_query_defaults() {
        let query: MessageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, MessageQuery::default());
        assert_eq!(query.validated(), Ok(query));
        assert_eq!(query.limit, 100);
    }

    #[test]
    fn test_info_changes_reject_bad_email_and_null() {
        let bad = ContactInfoChanges {
            email: PatchField::Value("nope".to_string()),
            ..Default::default()
        };
        assert_eq!(bad.validated().unwrap_err().field, "email");

        let null = ContactInfoChanges {
            email: PatchField::Null,
            ..Default::default()
        };
        assert!(null.validated().is_err());
    }

    #[test]
    fn test_info_changes_clear_links() {
        let changes: ContactInfoChanges =
            serde_json::from_str(r#"{"twitter_url":null,"phone":""}"#).unwrap();
        let changes = changes.validated().unwrap();
        assert!(changes.twitter_url.is_null());
        assert!(changes.phone.is_null());
        assert!(changes.email.is_unset());
    }

    #[test]
    fn test_message_query_bounds_paging() {
        let huge_skip = MessageQuery {
            skip: u64::MAX,
            ..MessageQuery::default()
        };
        assert_eq!(huge_skip.validated().unwrap_err().field, "skip");

        let huge_limit = MessageQuery {
            limit: MAX_INBOX_LIMIT + 1,
            ..MessageQuery::default()
        };
        assert_eq!(huge_limit.validated().unwrap_err().field, "limit");

        let edge = MessageQuery {
            unread_only: true,
            skip: i64::MAX as u64,
            limit: MAX_INBOX_LIMIT,
        };
        assert_eq!(edge.validated(), Ok(edge));
    }
}
