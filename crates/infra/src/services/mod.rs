mod inmemory;
mod sms;
mod smtp;
mod whatsapp;

pub use inmemory::{InMemoryDispatcher, SentMessage};
pub use sms::SmsClient;
pub use smtp::SmtpClient;
pub use whatsapp::WhatsappClient;

use crate::config::Config;
use lexbase_reminders_domain::Channel;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The provider for this channel is not configured; the candidate is
    /// skipped for the channel and never retried within the tick.
    #[error("The {0} channel has no provider configured")]
    ChannelUnavailable(Channel),
    #[error("Provider rejected the dispatch: {0}")]
    Provider(String),
}

#[derive(Debug, Clone)]
pub struct Sent {
    pub message_id: Option<String>,
}

/// Pure adapter over the external provider clients. Holds no business
/// state; which channel a message goes through is decided by the caller.
#[async_trait::async_trait]
pub trait IDispatcher: Send + Sync {
    async fn send(
        &self,
        channel: Channel,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<Sent, DispatchError>;
}

pub struct ProviderDispatcher {
    email: Option<SmtpClient>,
    sms: Option<SmsClient>,
    whatsapp: Option<WhatsappClient>,
}

impl ProviderDispatcher {
    pub fn from_config(config: &Config) -> Self {
        let email = config.smtp.as_ref().and_then(|cfg| match SmtpClient::new(cfg) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!(
                    "Unable to create SMTP client: {:?}. The email channel will be unavailable.",
                    e
                );
                None
            }
        });
        Self {
            email,
            sms: config.sms.as_ref().map(SmsClient::new),
            whatsapp: config.whatsapp.as_ref().map(WhatsappClient::new),
        }
    }
}

#[async_trait::async_trait]
impl IDispatcher for ProviderDispatcher {
    async fn send(
        &self,
        channel: Channel,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<Sent, DispatchError> {
        match channel {
            Channel::Email => match &self.email {
                Some(client) => client.send(recipient, subject, body).await,
                None => Err(DispatchError::ChannelUnavailable(channel)),
            },
            Channel::Sms => match &self.sms {
                Some(client) => client.send(recipient, body).await,
                None => Err(DispatchError::ChannelUnavailable(channel)),
            },
            Channel::Whatsapp => match &self.whatsapp {
                Some(client) => client.send(recipient, body).await,
                None => Err(DispatchError::ChannelUnavailable(channel)),
            },
        }
    }
}
