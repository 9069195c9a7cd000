use jetfuel_notification::OutboundEmail;

use crate::ValidSubmission;

/// Escape text for interpolation into the HTML body.
pub fn escape_html(unsafe_text: &str) -> String {
    unsafe_text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

impl ValidSubmission {
    pub fn subject_line(&self) -> String {
        match &self.subject {
            Some(subject) => format!("Website Contact: {subject}"),
            None => format!("Website Contact from {}", self.name),
        }
    }

    pub fn text_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    pub fn html_body(&self) -> String {
        let mut html = format!(
            "<p><strong>Name:</strong> {}</p><p><strong>Email:</strong> {}</p>",
            escape_html(&self.name),
            escape_html(&self.email)
        );

        if let Some(subject) = &self.subject {
            html.push_str(&format!(
                "<p><strong>Subject:</strong> {}</p>",
                escape_html(subject)
            ));
        }

        html.push_str(&format!(
            "<hr/><p>{}</p>",
            escape_html(&self.message).replace('\n', "<br/>")
        ));

        html
    }

    pub fn compose(&self, from: impl Into<String>, to: impl Into<String>) -> OutboundEmail {
        OutboundEmail {
            from: from.into(),
            to: to.into(),
            reply_to: self.email.to_owned(),
            subject: self.subject_line(),
            text: self.text_body(),
            html: self.html_body(),
        }
    }
}
