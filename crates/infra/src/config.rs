use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Seconds between periodic reminder ticks started by the host binary.
    /// `0` disables the periodic trigger; the manual run-now endpoint keeps
    /// working either way.
    pub tick_interval_secs: u64,
    pub smtp: Option<SmtpConfig>,
    pub sms: Option<SmsGatewayConfig>,
    pub whatsapp: Option<WhatsappConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

#[derive(Debug, Clone)]
pub struct SmsGatewayConfig {
    pub url: String,
    pub api_key: String,
    pub sender_id: String,
}

#[derive(Debug, Clone)]
pub struct WhatsappConfig {
    pub access_token: String,
    pub phone_number_id: String,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let default_tick_interval = "3600";
        let tick_interval = std::env::var("REMINDER_TICK_INTERVAL_SECS")
            .unwrap_or(default_tick_interval.into());
        let tick_interval_secs = match tick_interval.parse::<u64>() {
            Ok(secs) => secs,
            Err(_) => {
                warn!(
                    "The given REMINDER_TICK_INTERVAL_SECS: {} is not valid, falling back to the default: {}.",
                    tick_interval, default_tick_interval
                );
                default_tick_interval.parse::<u64>().unwrap()
            }
        };

        Self {
            port,
            tick_interval_secs,
            smtp: Self::smtp_config(),
            sms: Self::sms_config(),
            whatsapp: Self::whatsapp_config(),
        }
    }

    fn smtp_config() -> Option<SmtpConfig> {
        let host = match std::env::var("SMTP_HOST") {
            Ok(host) => host,
            Err(_) => {
                info!("Did not find SMTP_HOST environment variable. The email channel will be unavailable.");
                return None;
            }
        };
        let port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
            .unwrap_or(587);
        Some(SmtpConfig {
            host,
            port,
            username: std::env::var("SMTP_USERNAME").unwrap_or_default(),
            password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
            from_address: std::env::var("SMTP_FROM_ADDRESS")
                .unwrap_or_else(|_| "reminders@lexbase.app".into()),
        })
    }

    fn sms_config() -> Option<SmsGatewayConfig> {
        let url = match std::env::var("SMS_GATEWAY_URL") {
            Ok(url) => url,
            Err(_) => {
                info!("Did not find SMS_GATEWAY_URL environment variable. The sms channel will be unavailable.");
                return None;
            }
        };
        Some(SmsGatewayConfig {
            url,
            api_key: std::env::var("SMS_GATEWAY_API_KEY").unwrap_or_default(),
            sender_id: std::env::var("SMS_SENDER_ID").unwrap_or_else(|_| "LexBase".into()),
        })
    }

    fn whatsapp_config() -> Option<WhatsappConfig> {
        let access_token = match std::env::var("WHATSAPP_ACCESS_TOKEN") {
            Ok(token) => token,
            Err(_) => {
                info!("Did not find WHATSAPP_ACCESS_TOKEN environment variable. The whatsapp channel will be unavailable.");
                return None;
            }
        };
        let phone_number_id = match std::env::var("WHATSAPP_PHONE_NUMBER_ID") {
            Ok(id) => id,
            Err(_) => {
                info!("Did not find WHATSAPP_PHONE_NUMBER_ID environment variable. The whatsapp channel will be unavailable.");
                return None;
            }
        };
        Some(WhatsappConfig {
            access_token,
            phone_number_id,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
