use crate::{abstract_trait::NotifierTrait, config::EmailConfig, errors::ServiceError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
    message::{Mailbox, Message, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::{error, info};

type SmtpTransport = AsyncSmtpTransport<Tokio1Executor>;

/// SMTP-backed notifier used for customer-facing order emails.
#[derive(Clone)]
pub struct EmailNotifier {
    mailer: SmtpTransport,
    from: Mailbox,
}

impl EmailNotifier {
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let creds = Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone());

        let mailer = SmtpTransport::starttls_relay(&config.smtp_host)
            .context("Failed to create SMTP relay")?
            .credentials(creds)
            .port(config.smtp_port)
            .build();

        let from: Mailbox = config
            .from_address
            .parse()
            .context("Invalid sender email format")?;

        Ok(Self { mailer, from })
    }
}

#[async_trait]
impl NotifierTrait for EmailNotifier {
    async fn send(&self, to: &str, subject: &str, html_body: String) -> Result<(), ServiceError> {
        let to: Mailbox = to.parse().map_err(|e| {
            error!("❌ Invalid recipient email: {}", e);
            ServiceError::Custom(format!("Invalid recipient email: {e}"))
        })?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to.clone())
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body)
            .map_err(|e| {
                error!("❌ Failed to build email: {}", e);
                ServiceError::Custom(format!("Failed to build email: {e}"))
            })?;

        match self.mailer.send(email).await {
            Ok(_) => {
                info!("✅ Email sent to {}", to);
                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to send email to {}: {}", to, e);
                Err(ServiceError::Custom(format!("Failed to send email: {e}")))
            }
        }
    }
}
