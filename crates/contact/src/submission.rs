use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::Validate;

use crate::RelayError;

/// Contact form payload as posted by the website
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "text")]
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "text")]
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Parse a request body. Anything that is not a JSON object yields an
    /// empty submission, which then fails validation. Fields that are not
    /// strings are dropped one by one.
    pub fn from_body(body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<Value>(body).and_then(|value| match value {
            Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        });

        match parsed {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(error = %e, "Unreadable contact body");
                Self::default()
            }
        }
    }

    pub fn validated(self) -> Result<ValidSubmission, RelayError> {
        self.validate().map_err(|_| RelayError::MissingFields)?;

        let (Some(name), Some(email), Some(message)) = (self.name, self.email, self.message)
        else {
            return Err(RelayError::MissingFields);
        };

        Ok(ValidSubmission {
            name,
            email,
            subject: self.subject.filter(|subject| !subject.is_empty()),
            message,
        })
    }
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}

/// A submission whose required fields are present and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}
