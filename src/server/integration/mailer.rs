use std::sync::Arc;

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{config::MailConfig, error::integration::IntegrationError};

/// Async SMTP mailer. Operates in no-op mode when SMTP credentials are not configured.
#[derive(Clone)]
pub struct Mailer {
    transport: Option<Arc<AsyncSmtpTransport<Tokio1Executor>>>,
    from: Option<Mailbox>,
}

impl Mailer {
    /// Builds the mailer from configuration.
    ///
    /// # Arguments
    /// - `config` - SMTP settings, `None` to run disabled
    ///
    /// # Returns
    /// - `Ok(Mailer)` - Configured (or disabled) mailer
    /// - `Err(IntegrationError::Mail)` - Invalid sender address or SMTP relay host
    pub fn new(config: Option<&MailConfig>) -> Result<Self, IntegrationError> {
        let Some(config) = config else {
            tracing::warn!("Email credentials not configured, email delivery is disabled");
            return Ok(Self::disabled());
        };

        let address = config
            .from
            .parse::<Address>()
            .map_err(|e| IntegrationError::Mail(format!("invalid MAIL_FROM address: {}", e)))?;
        let from = Mailbox::new(Some(config.from_name.clone()), address);

        let builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.server)
        }
        .map_err(|e| IntegrationError::Mail(format!("failed to configure SMTP relay: {}", e)))?
        .port(config.port)
        .credentials(Credentials::new(
            config.username.clone(),
            config.password.clone(),
        ));

        tracing::info!("Email service initialized with SMTP server {}", config.server);

        Ok(Self {
            transport: Some(Arc::new(builder.build())),
            from: Some(from),
        })
    }

    /// A mailer that never sends anything.
    pub fn disabled() -> Self {
        Self {
            transport: None,
            from: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }

    /// Sends one HTML message to all `recipients`.
    ///
    /// Recipients are placed in Bcc so subscribers never see each other's addresses.
    /// Addresses that fail to parse are skipped with a warning.
    ///
    /// # Returns
    /// - `Ok(())` - Message accepted by the SMTP relay
    /// - `Err(IntegrationError::NotConfigured)` - Mailer is disabled
    /// - `Err(IntegrationError::Mail)` - Message could not be built or sent
    pub async fn send(
        &self,
        recipients: &[String],
        subject: &str,
        html_body: &str,
    ) -> Result<(), IntegrationError> {
        let (Some(transport), Some(from)) = (&self.transport, &self.from) else {
            return Err(IntegrationError::NotConfigured("Email"));
        };

        let mut builder = Message::builder()
            .from(from.clone())
            .to(from.clone())
            .subject(subject)
            .header(ContentType::TEXT_HTML);

        let mut accepted = 0;
        for recipient in recipients {
            match recipient.parse::<Mailbox>() {
                Ok(mailbox) => {
                    builder = builder.bcc(mailbox);
                    accepted += 1;
                }
                Err(e) => tracing::warn!("Skipping invalid recipient {}: {}", recipient, e),
            }
        }

        if accepted == 0 {
            return Err(IntegrationError::Mail("no valid recipients".to_string()));
        }

        let message = builder
            .body(html_body.to_string())
            .map_err(|e| IntegrationError::Mail(e.to_string()))?;

        transport
            .send(message)
            .await
            .map_err(|e| IntegrationError::Mail(e.to_string()))?;

        tracing::info!("Email sent successfully to {} recipients", accepted);

        Ok(())
    }
}
