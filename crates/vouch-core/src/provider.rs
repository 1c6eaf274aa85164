use crate::error::{Result, VouchError};

/// External model endpoint configuration.
pub struct ProviderConfig {
    pub api_base: &'static str,
    pub model: &'static str,
    pub env_var: &'static str,
}

/// The analysis backend. Accepts inline audio and a declared response
/// schema, so the reply is structured JSON rather than free text.
pub const GEMINI: ProviderConfig = ProviderConfig {
    api_base: "https://generativelanguage.googleapis.com/v1beta/models",
    model: "gemini-2.5-flash",
    env_var: "GEMINI_API_KEY",
};

impl ProviderConfig {
    pub fn generate_content_url(&self, api_key: &str) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.api_base, self.model, api_key
        )
    }

    /// Validate that the API key is set for this provider
    pub fn validate_api_key(&self) -> Result<String> {
        std::env::var(self.env_var).map_err(|_| VouchError::MissingApiKey {
            env_var: self.env_var.to_string(),
        })
    }
}
