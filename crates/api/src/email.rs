//! Contact-notification delivery via SMTP.
//!
//! [`ContactNotifier`] wraps the `lettre` async SMTP transport to send a
//! plain-text email for each persisted contact submission. Configuration is
//! loaded from environment variables; if `SMTP_HOST` is not set,
//! [`EmailConfig::from_env`] returns `None` and no notifier is constructed.
//! Delivery failures never affect the submitter-visible outcome.

use portfolio_store::models::ContactMessage;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@portfolio.local";

/// Configuration for the SMTP contact notifier.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Where contact notifications are delivered; defaults to the sender.
    pub to_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable        | Required | Default                    |
    /// |-----------------|----------|----------------------------|
    /// | `SMTP_HOST`     | yes      | —                          |
    /// | `SMTP_PORT`     | no       | `587`                      |
    /// | `SMTP_FROM`     | no       | `noreply@portfolio.local`  |
    /// | `SMTP_TO`       | no       | value of `SMTP_FROM`       |
    /// | `SMTP_USER`     | no       | —                          |
    /// | `SMTP_PASSWORD` | no       | —                          |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        let from_address =
            std::env::var("SMTP_FROM").unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string());
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            to_address: std::env::var("SMTP_TO").unwrap_or_else(|_| from_address.clone()),
            from_address,
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// ContactNotifier
// ---------------------------------------------------------------------------

/// Sends a notification email for each persisted contact submission.
pub struct ContactNotifier {
    config: EmailConfig,
}

impl ContactNotifier {
    /// Create a new notifier with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Subject line and plain-text body for a submission notification.
    fn compose(message: &ContactMessage) -> (String, String) {
        let subject = format!("[Portfolio] New contact message: {}", message.subject);
        let body = format!(
            "From: {} {} <{}>\nSubject: {}\nNewsletter signup: {}\nReceived: {}\n\n{}\n",
            message.first_name,
            message.last_name,
            message.email,
            message.subject,
            if message.newsletter_signup { "yes" } else { "no" },
            message.created_at,
            message.message,
        );
        (subject, body)
    }

    /// Send the notification over STARTTLS, authenticating when credentials
    /// are configured.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), EmailError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let (subject, body) = Self::compose(message);

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .reply_to(message.email.parse()?)
            .to(self.config.to_address.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = %self.config.to_address, "Contact notification email sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
