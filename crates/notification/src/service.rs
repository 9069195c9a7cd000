//! Email transport using lettre

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

use crate::{MailCredentials, OutboundEmail};

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid address {address:?}: {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("smtp: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Something that can deliver an [`OutboundEmail`]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(
        &self,
        credentials: &MailCredentials,
        email: &OutboundEmail,
    ) -> Result<(), MailError>;
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub tls: bool,
    pub timeout_secs: u64,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_owned(),
            port: 465,
            tls: true,
            timeout_secs: 30,
        }
    }
}

/// SMTP relay client. A transport is built per send from the caller's credentials.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        tracing::info!(
            smtp_host = %config.host,
            smtp_port = config.port,
            tls = config.tls,
            "SMTP mailer initialized"
        );

        Self { config }
    }

    fn transport(
        &self,
        credentials: &MailCredentials,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
        // Port 465 uses implicit TLS (SMTPS), other ports use STARTTLS
        let builder = if !self.config.tls {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.host)
        } else if self.config.port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
        };

        let creds = Credentials::new(
            credentials.username.to_owned(),
            credentials.password.to_owned(),
        );

        Ok(builder
            .port(self.config.port)
            .credentials(creds)
            .timeout(Some(Duration::from_secs(self.config.timeout_secs)))
            .build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn send(
        &self,
        credentials: &MailCredentials,
        email: &OutboundEmail,
    ) -> Result<(), MailError> {
        let message = email.to_message()?;

        tracing::info!("Sending email");

        self.transport(credentials)?.send(message).await?;

        Ok(())
    }
}
