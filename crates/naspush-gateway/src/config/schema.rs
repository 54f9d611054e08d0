/// Suffix of the Gotify message-submission endpoint; appended to the
/// configured URL when absent.
pub const MESSAGE_SUFFIX: &str = "/message";

/// Startup configuration, built once by the loader in [`crate::config`].
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Full message-submission URL (always ends in `/message`).
    pub gotify_url: String,
    /// Gotify application token, forwarded on every push.
    pub gotify_token: String,
    pub listen_host: String,
    pub listen_port: u16,
    /// Mounts `/metrics` and records instruments when set.
    pub metrics_enabled: bool,
    /// Logs raw inbound payloads when set.
    pub debug_mode: bool,
}

impl RelayConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.listen_port)
    }
}
