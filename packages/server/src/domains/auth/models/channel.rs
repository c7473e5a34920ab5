use serde::Serialize;
use twilio::Channel;

/// How the provider delivers the code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryChannel {
    #[default]
    Sms,
    Whatsapp,
}

impl DeliveryChannel {
    /// Lenient request parsing: exactly `"whatsapp"` selects WhatsApp,
    /// anything else (including nothing) means SMS.
    pub fn from_request(raw: Option<&str>) -> Self {
        match raw {
            Some("whatsapp") => DeliveryChannel::Whatsapp,
            _ => DeliveryChannel::Sms,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryChannel::Sms => "sms",
            DeliveryChannel::Whatsapp => "whatsapp",
        }
    }
}

impl From<DeliveryChannel> for Channel {
    fn from(channel: DeliveryChannel) -> Self {
        match channel {
            DeliveryChannel::Sms => Channel::Sms,
            DeliveryChannel::Whatsapp => Channel::Whatsapp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request() {
        assert_eq!(DeliveryChannel::from_request(None), DeliveryChannel::Sms);
        assert_eq!(DeliveryChannel::from_request(Some("sms")), DeliveryChannel::Sms);
        assert_eq!(
            DeliveryChannel::from_request(Some("whatsapp")),
            DeliveryChannel::Whatsapp
        );
        assert_eq!(DeliveryChannel::from_request(Some("WhatsApp")), DeliveryChannel::Sms);
        assert_eq!(DeliveryChannel::from_request(Some("voice")), DeliveryChannel::Sms);
    }
}
