use lettre::{
    Message,
    message::{Mailbox, MultiPart},
};

use crate::MailError;

/// Account used to authenticate against the relay
#[derive(Clone, PartialEq, Eq)]
pub struct MailCredentials {
    pub username: String,
    pub password: String,
}

impl MailCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// A fully composed email, ready to hand to a [`crate::Mailer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl OutboundEmail {
    /// Build the MIME message (multipart/alternative with plain and html parts).
    /// A reply-to that is not a valid mailbox is left out of the headers; the
    /// bodies still carry it.
    pub fn to_message(&self) -> Result<Message, MailError> {
        let mut builder = Message::builder()
            .from(parse_mailbox(&self.from)?)
            .to(parse_mailbox(&self.to)?);

        match parse_mailbox(&self.reply_to) {
            Ok(reply_to) => builder = builder.reply_to(reply_to),
            Err(e) => tracing::warn!(error = %e, "Reply-To omitted"),
        }

        let message = builder
            .subject(self.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(
                self.text.to_owned(),
                self.html.to_owned(),
            ))?;

        Ok(message)
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_owned(),
        source,
    })
}
