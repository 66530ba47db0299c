//! Interpretation of the contact form endpoint's reply.
//!
//! The endpoint answers with a JSON envelope such as `{"ok": true}`,
//! `{"error": "..."}` or `{"errors": [{"message": "..."}]}`.

use serde::Deserialize;

use crate::config::ContactMessages;

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    ok: Option<bool>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Vec<FieldError>,
}

#[derive(Debug, Deserialize)]
struct FieldError {
    message: String,
}

impl Envelope {
    fn server_message(&self) -> Option<String> {
        let mut messages: Vec<&str> = self.error.iter().map(String::as_str).collect();
        messages.extend(self.errors.iter().map(|e| e.message.as_str()));
        messages.retain(|m| !m.trim().is_empty());
        if messages.is_empty() {
            None
        } else {
            Some(messages.join(", "))
        }
    }
}

/// Result of one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// The server answered but refused; carries its explanation if it gave one.
    Rejected(Option<String>),
    /// The request never got an answer.
    NetworkFailure(String),
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }

    /// Text shown to the visitor.
    pub fn user_message(&self, messages: &ContactMessages) -> String {
        match self {
            SubmitOutcome::Sent => messages.sent.clone(),
            SubmitOutcome::Rejected(Some(reason)) => reason.clone(),
            SubmitOutcome::Rejected(None) => messages.rejected.clone(),
            SubmitOutcome::NetworkFailure(_) => messages.network.clone(),
        }
    }
}

/// Classify a reply from its HTTP success flag and body.
///
/// A successful status with a body that is not JSON still counts as sent.
pub fn interpret_response(status_ok: bool, body: &str) -> SubmitOutcome {
    let envelope: Envelope = serde_json::from_str(body).unwrap_or_default();
    let message = envelope.server_message();
    if status_ok && message.is_none() && envelope.ok != Some(false) {
        return SubmitOutcome::Sent;
    }
    SubmitOutcome::Rejected(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_is_sent() {
        assert_eq!(interpret_response(true, r#"{"ok":true}"#), SubmitOutcome::Sent);
        assert_eq!(interpret_response(true, ""), SubmitOutcome::Sent);
    }

    #[test]
    fn server_errors_are_joined() {
        let body = r#"{"errors":[{"message":"email invalide"},{"message":"message vide"}]}"#;
        assert_eq!(
            interpret_response(false, body),
            SubmitOutcome::Rejected(Some("email invalide, message vide".into()))
        );
    }

    #[test]
    fn error_field_overrides_success_status() {
        assert_eq!(
            interpret_response(true, r#"{"error":"spam"}"#),
            SubmitOutcome::Rejected(Some("spam".into()))
        );
        assert_eq!(
            interpret_response(true, r#"{"ok":false}"#),
            SubmitOutcome::Rejected(None)
        );
    }

    #[test]
    fn failed_status_without_envelope_is_generic() {
        assert_eq!(
            interpret_response(false, "<html>502</html>"),
            SubmitOutcome::Rejected(None)
        );
    }

    #[test]
    fn user_messages() {
        let messages = ContactMessages::default();
        assert_eq!(SubmitOutcome::Sent.user_message(&messages), messages.sent);
        assert_eq!(
            SubmitOutcome::Rejected(Some("spam".into())).user_message(&messages),
            "spam"
        );
        assert_eq!(
            SubmitOutcome::Rejected(None).user_message(&messages),
            messages.rejected
        );
        assert_eq!(
            SubmitOutcome::NetworkFailure("TypeError".into()).user_message(&messages),
            messages.network
        );
        assert!(SubmitOutcome::Sent.is_sent());
    }
}
