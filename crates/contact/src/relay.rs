use std::sync::Arc;

use jetfuel_notification::{MailCredentials, Mailer};

use crate::ContactSubmission;

/// Inbox used when no destination address is configured
pub const DEFAULT_RECIPIENT: &str = "jetfuelcreatives@gmail.com";

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Missing required fields: name, email, message")]
    MissingFields,

    #[error("Email not configured")]
    NotConfigured,

    #[error("Failed to send message")]
    SendFailed,
}

#[derive(Debug, Clone, Default)]
pub struct RelaySettings {
    pub username: Option<String>,
    pub password: Option<String>,
    pub contact_to: Option<String>,
    pub contact_from: Option<String>,
}

impl RelaySettings {
    pub fn credentials(&self) -> Option<MailCredentials> {
        let username = self.username.as_deref().filter(|v| !v.is_empty())?;
        let password = self.password.as_deref().filter(|v| !v.is_empty())?;

        Some(MailCredentials::new(username, password))
    }

    pub fn recipient(&self) -> &str {
        self.contact_to
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_RECIPIENT)
    }

    pub fn sender<'a>(&'a self, credentials: &'a MailCredentials) -> &'a str {
        self.contact_from
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(credentials.username.as_str())
    }
}

/// Turns contact submissions into emails
#[derive(Clone)]
pub struct ContactRelay {
    settings: RelaySettings,
    mailer: Arc<dyn Mailer>,
}

impl ContactRelay {
    pub fn new(settings: RelaySettings, mailer: Arc<dyn Mailer>) -> Self {
        if settings.credentials().is_none() {
            tracing::warn!("Mail account not configured, contact submissions will be refused");
        }

        if settings.contact_to.as_deref().is_none_or(str::is_empty) {
            tracing::warn!(
                recipient = DEFAULT_RECIPIENT,
                "No contact destination configured, falling back to the default inbox"
            );
        }

        Self { settings, mailer }
    }

    pub fn settings(&self) -> &RelaySettings {
        &self.settings
    }

    #[tracing::instrument(skip_all)]
    pub async fn relay(&self, submission: ContactSubmission) -> Result<(), RelayError> {
        let submission = submission.validated()?;

        let Some(credentials) = self.settings.credentials() else {
            tracing::error!("Mail username/password not set");
            return Err(RelayError::NotConfigured);
        };

        let email = submission.compose(
            self.settings.sender(&credentials),
            self.settings.recipient(),
        );

        if let Err(e) = self.mailer.send(&credentials, &email).await {
            tracing::error!(error = %e, to = %email.to, "Failed to send contact email");
            return Err(RelayError::SendFailed);
        }

        tracing::info!(to = %email.to, "Contact email sent");

        Ok(())
    }
}
