use std::sync::{Arc, Mutex};

use jetfuel_contact::{ContactRelay, ContactSubmission, RelaySettings};
use jetfuel_notification::{MailCredentials, MailError, Mailer, OutboundEmail};

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(MailCredentials, OutboundEmail)>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::default(),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(MailCredentials, OutboundEmail)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(
        &self,
        credentials: &MailCredentials,
        email: &OutboundEmail,
    ) -> Result<(), MailError> {
        self.sent
            .lock()
            .unwrap()
            .push((credentials.clone(), email.clone()));

        if self.fail {
            return Err(transport_error(email));
        }

        Ok(())
    }
}

pub const TRANSPORT_ERROR: &str = "535 5.7.8 Username and Password not accepted";

/// A real `MailError` whose text must never reach the caller
fn transport_error(email: &OutboundEmail) -> MailError {
    let broken = OutboundEmail {
        to: TRANSPORT_ERROR.to_owned(),
        ..email.clone()
    };

    match broken.to_message() {
        Err(e) => e,
        Ok(_) => unreachable!("recipient is not an address"),
    }
}

pub fn settings() -> RelaySettings {
    RelaySettings {
        username: Some("agency@gmail.com".to_owned()),
        password: Some("app-password".to_owned()),
        contact_to: Some("inbox@jetfuel.io".to_owned()),
        contact_from: None,
    }
}

pub fn relay(settings: RelaySettings, mailer: Arc<RecordingMailer>) -> ContactRelay {
    ContactRelay::new(settings, mailer)
}

pub fn submission(subject: Option<&str>) -> ContactSubmission {
    ContactSubmission {
        name: Some("Ada Lovelace".to_owned()),
        email: Some("ada@example.com".to_owned()),
        subject: subject.map(str::to_owned),
        message: Some("<b>hi</b> & 'quote'\nsee you".to_owned()),
    }
}
