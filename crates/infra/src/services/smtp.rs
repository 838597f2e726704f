use super::{DispatchError, Sent};
use crate::config::SmtpConfig;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Email transport over an SMTP relay.
pub struct SmtpClient {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpClient {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        let from = config
            .from_address
            .parse::<Mailbox>()
            .map_err(|e| anyhow::anyhow!("Invalid SMTP from address: {}", e))?;
        Ok(Self { transport, from })
    }

    pub async fn send(&self, to: &str, subject: &str, body: &str) -> Result<Sent, DispatchError> {
        let to = to
            .parse::<Mailbox>()
            .map_err(|e| DispatchError::Provider(format!("Invalid recipient address: {}", e)))?;
        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| DispatchError::Provider(format!("Unable to build message: {}", e)))?;
        self.transport
            .send(message)
            .await
            .map_err(|e| DispatchError::Provider(e.to_string()))?;
        Ok(Sent { message_id: None })
    }
}
