use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, Utc};
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::config::EmailJsConfig;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const SUCCESS_STATUS_TIMEOUT_MS: u64 = 8000;

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;
// Asia/Manila, no DST
const SENT_DATE_UTC_OFFSET_SECS: i32 = 8 * 3600;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name (at least 2 characters)")]
    InvalidName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a message (at least 10 characters)")]
    InvalidMessage,
    #[error("Email service not configured")]
    NotConfigured,
    #[error("Failed to send message: {0}")]
    Transport(String),
    #[error("Email service rejected the message ({status}): {text}")]
    Rejected { status: u16, text: String },
}

impl ContactError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidName | Self::InvalidEmail | Self::InvalidMessage
        )
    }

    /// Text shown to the visitor. Anything past validation points them at
    /// the direct address instead.
    pub fn status_message(&self, contact_email: &str) -> String {
        match self {
            Self::InvalidName | Self::InvalidEmail | Self::InvalidMessage => format!("❌ {self}"),
            Self::NotConfigured => format!(
                "⚠️ Email service not configured. Please contact me directly at {contact_email}"
            ),
            Self::Transport(_) => format!(
                "❌ Failed to send message. Please email me directly at {contact_email}"
            ),
            Self::Rejected { status, text } => {
                let reason = match status {
                    400 => "❌ Invalid email configuration. Please check the email service settings.".to_string(),
                    401 => "❌ Unauthorized. Please verify the email service public key is correct.".to_string(),
                    404 => "❌ Service or Template not found. Please check the service and template IDs.".to_string(),
                    412 => "❌ Template variables mismatch. Make sure the template uses: {{from_name}}, {{from_email}}, {{message}}".to_string(),
                    _ if text.trim().is_empty() => "❌ Failed to send message.".to_string(),
                    _ => format!("❌ Failed to send message. {}", text.trim()),
                };
                format!("{reason} Please email me directly at {contact_email}")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(from_name: &str, from_email: &str, message: &str) -> Self {
        Self {
            from_name: from_name.trim().to_string(),
            from_email: from_email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.from_name.chars().count() < MIN_NAME_CHARS {
            return Err(ContactError::InvalidName);
        }
        if !EMAIL_RE.is_match(&self.from_email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.chars().count() < MIN_MESSAGE_CHARS {
            return Err(ContactError::InvalidMessage);
        }
        Ok(())
    }
}

/// Variables handed to the email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_email: String,
    pub sent_date: String,
}

impl TemplateParams {
    pub fn new(form: &ContactForm, to_email: &str, now: DateTime<Utc>) -> Self {
        Self {
            from_name: form.from_name.clone(),
            from_email: form.from_email.clone(),
            message: form.message.clone(),
            to_email: to_email.to_string(),
            sent_date: format_sent_date(now),
        }
    }
}

/// e.g. "Monday, October 19, 2026 at 3:04 PM", Manila time.
pub fn format_sent_date(now: DateTime<Utc>) -> String {
    let local = FixedOffset::east_opt(SENT_DATE_UTC_OFFSET_SECS)
        .map_or_else(|| now.fixed_offset(), |tz| now.with_timezone(&tz));
    local.format("%A, %B %-d, %Y at %-I:%M %p").to_string()
}

#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

impl<'a> SendRequest<'a> {
    pub fn new(config: &'a EmailJsConfig, template_params: &'a TemplateParams) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params,
        }
    }
}

/// Checks configuration, then the form, and builds what gets sent.
pub fn prepare(
    form: &ContactForm,
    config: &EmailJsConfig,
    to_email: &str,
    now: DateTime<Utc>,
) -> Result<TemplateParams, ContactError> {
    if !config.is_configured() {
        log::warn!("email service not configured, set EMAILJS_* at build time");
        return Err(ContactError::NotConfigured);
    }
    form.validate()?;
    Ok(TemplateParams::new(form, to_email, now))
}

#[cfg(feature = "hydrate")]
pub async fn deliver(config: &EmailJsConfig, params: &TemplateParams) -> Result<(), ContactError> {
    use gloo_net::http::Request;

    let body = SendRequest::new(config, params);
    let response = Request::post(EMAILJS_SEND_URL)
        .json(&body)
        .map_err(|e| ContactError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Transport(e.to_string()))?;
    if response.ok() {
        log::info!("message from {} sent", params.from_email);
        return Ok(());
    }
    Err(rejection(response.status(), response.text().await))
}

/// Builds the error for a non-2xx reply. An unreadable body leaves the
/// reason empty.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn rejection<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> ContactError {
    let text = body.unwrap_or_else(|e| {
        log::debug!("couldn't read email service response body: {e}");
        String::new()
    });
    log::error!("email service returned {status}: {text}");
    ContactError::Rejected { status, text }
}

#[cfg(not(feature = "hydrate"))]
pub async fn deliver(_config: &EmailJsConfig, _params: &TemplateParams) -> Result<(), ContactError> {
    Err(ContactError::Transport(
        "messages are only sent from the browser".to_string(),
    ))
}

/// Numbers each send, so a hide timer left over from an earlier send can
/// tell its message has been replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendCounter(u64);

impl SendCounter {
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl FormStatus {
    pub fn sending() -> Self {
        Self {
            kind: StatusKind::Info,
            message: "📤 Sending your message...".to_string(),
        }
    }

    pub fn sent(params: &TemplateParams) -> Self {
        Self {
            kind: StatusKind::Success,
            message: format!(
                "✓ Thank you, {}! Your message has been sent successfully. I'll respond to {} as soon as possible!",
                params.from_name, params.from_email
            ),
        }
    }

    pub fn failed(err: &ContactError, contact_email: &str) -> Self {
        Self {
            kind: StatusKind::Error,
            message: err.status_message(contact_email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn configured() -> EmailJsConfig {
        EmailJsConfig {
            service_id: "service_abc1234".to_string(),
            template_id: "template_xyz5678".to_string(),
            public_key: "abcDEF123xyz456".to_string(),
        }
    }

    fn valid_form() -> ContactForm {
        ContactForm::new("Ada", "ada@example.com", "Hello there, nice site!")
    }

    #[test]
    fn test_form_fields_are_trimmed() {
        let form = ContactForm::new("  Ada ", "\tada@example.com\n", "  hi  ");
        assert_eq!(form.from_name, "Ada");
        assert_eq!(form.from_email, "ada@example.com");
        assert_eq!(form.message, "hi");
    }

    #[test]
    fn test_validation_order() {
        let form = ContactForm::new("A", "nope", "short");
        assert_eq!(form.validate(), Err(ContactError::InvalidName));

        let form = ContactForm::new("Ada", "nope", "short");
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));

        let form = ContactForm::new("Ada", "ada@example.com", "short");
        assert_eq!(form.validate(), Err(ContactError::InvalidMessage));

        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_email_pattern() {
        for good in ["a@b.co", "first.last@sub.example.org"] {
            assert!(ContactForm::new("Ada", good, "long enough message").validate().is_ok());
        }
        for bad in ["", "a@b", "a b@c.d", "@b.co", "a@@b.co", "a@b."] {
            assert_eq!(
                ContactForm::new("Ada", bad, "long enough message").validate(),
                Err(ContactError::InvalidEmail),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_minimums_count_chars_after_trim() {
        assert_eq!(
            ContactForm::new(" é ", "a@b.co", "long enough message").validate(),
            Err(ContactError::InvalidName)
        );
        assert!(ContactForm::new("Zoë", "a@b.co", "ünïcödé!!!").validate().is_ok());
    }

    #[test]
    fn test_sent_date_in_manila_time() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 7, 4, 0).unwrap();
        assert_eq!(format_sent_date(now), "Monday, October 19, 2026 at 3:04 PM");

        // crosses midnight local time
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 16, 30, 0).unwrap();
        assert_eq!(format_sent_date(now), "Tuesday, October 20, 2026 at 12:30 AM");
    }

    #[test]
    fn test_prepare_checks_config_before_form() {
        let bad_form = ContactForm::new("", "", "");
        let err = prepare(
            &bad_form,
            &EmailJsConfig::default(),
            "me@example.com",
            Utc::now(),
        )
        .unwrap_err();
        assert_eq!(err, ContactError::NotConfigured);

        let err = prepare(&bad_form, &configured(), "me@example.com", Utc::now()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_prepare_builds_template_params() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let params = prepare(&valid_form(), &configured(), "me@example.com", now).unwrap();
        assert_eq!(params.from_name, "Ada");
        assert_eq!(params.to_email, "me@example.com");
        assert_eq!(params.sent_date, "Friday, January 2, 2026 at 11:04 AM");
    }

    #[test]
    fn test_send_request_body() {
        let config = configured();
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let params = TemplateParams::new(&valid_form(), "me@example.com", now);
        let body = serde_json::to_value(SendRequest::new(&config, &params)).unwrap();

        assert_eq!(body["service_id"], "service_abc1234");
        assert_eq!(body["template_id"], "template_xyz5678");
        assert_eq!(body["user_id"], "abcDEF123xyz456");
        assert_eq!(body["template_params"]["from_email"], "ada@example.com");
        assert_eq!(body["template_params"]["message"], "Hello there, nice site!");
        assert_eq!(body["template_params"]["to_email"], "me@example.com");
    }

    #[test]
    fn test_rejection_messages() {
        let contact = "me@example.com";
        let rejected = |status, text: &str| ContactError::Rejected {
            status,
            text: text.to_string(),
        };

        let msg = rejected(400, "").status_message(contact);
        assert!(msg.starts_with("❌ Invalid email configuration."));
        assert!(msg.ends_with("Please email me directly at me@example.com"));

        let msg = rejected(404, "Not found").status_message(contact);
        assert!(msg.starts_with("❌ Service or Template not found."));
        assert!(!msg.contains("Not found"));

        let msg = rejected(401, "").status_message(contact);
        assert!(msg.starts_with("❌ Unauthorized."));
        assert!(msg.ends_with("Please email me directly at me@example.com"));

        let msg = rejected(412, "").status_message(contact);
        assert!(msg.contains("{{from_name}}"));

        let msg = rejected(500, "The service is down").status_message(contact);
        assert!(msg.starts_with("❌ Failed to send message. The service is down"));

        let msg = ContactError::NotConfigured.status_message(contact);
        assert!(msg.contains("not configured"));
        assert!(msg.ends_with(contact));
    }

    #[test]
    fn test_transport_failure_message() {
        let err = ContactError::Transport("network down".to_string());
        let msg = err.status_message("me@example.com");
        assert_eq!(
            msg,
            "❌ Failed to send message. Please email me directly at me@example.com"
        );
    }

    #[test]
    fn test_rejection_with_unreadable_body() {
        let err = rejection(500, Err::<String, _>("body stream closed"));
        assert_eq!(
            err,
            ContactError::Rejected {
                status: 500,
                text: String::new()
            }
        );
        assert!(err
            .status_message("me@example.com")
            .starts_with("❌ Failed to send message. Please"));

        let err = rejection::<&str>(412, Ok("bad vars".to_string()));
        assert!(
            matches!(err, ContactError::Rejected { status: 412, ref text } if text == "bad vars")
        );
    }

    #[test]
    fn test_earlier_send_is_stale() {
        let mut sends = SendCounter::default();
        let first = sends.next();
        assert!(sends.is_current(first));

        let second = sends.next();
        assert!(!sends.is_current(first));
        assert!(sends.is_current(second));
    }

    #[test]
    fn test_status_constructors() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let params = TemplateParams::new(&valid_form(), "me@example.com", now);

        let sent = FormStatus::sent(&params);
        assert_eq!(sent.kind.as_str(), "success");
        assert!(sent.message.contains("Thank you, Ada!"));
        assert!(sent.message.contains("ada@example.com"));

        assert_eq!(FormStatus::sending().kind, StatusKind::Info);

        let failed = FormStatus::failed(&ContactError::InvalidEmail, "me@example.com");
        assert_eq!(failed.kind, StatusKind::Error);
        assert_eq!(failed.message, "❌ Please enter a valid email address");
    }
}
