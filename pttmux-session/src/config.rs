//! Channel session configuration.

use pttmux_protocol::LogonRequest;

/// Parameters for logging on to one channel.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// Channel API auth token.
    pub auth_token: String,
    /// Name of the channel to log on to.
    pub channel: String,
}

impl ChannelConfig {
    pub fn new(auth_token: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            channel: channel.into(),
        }
    }

    /// Builds the logon message sent once after the transport connects.
    pub fn logon_request(&self, seq: u64) -> LogonRequest {
        LogonRequest::new(seq, self.auth_token.clone(), self.channel.clone())
    }
}
