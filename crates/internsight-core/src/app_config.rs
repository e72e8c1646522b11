#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the recommendation service. Required; there is no
    /// hard-coded service URL anywhere in the client.
    pub api_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
