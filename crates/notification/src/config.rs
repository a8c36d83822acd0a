use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Resend HTTP API, authenticated with `api_key`.
    #[default]
    Resend,
    /// SMTP relay, authenticated with `smtp_username` / `smtp_password`.
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: EmailProvider,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_smtp_username")]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: Option<String>,
    /// Sender shown on every contact email.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Owner mailbox that receives contact emails.
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::default(),
            api_key: None,
            api_url: default_api_url(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: default_smtp_username(),
            smtp_password: None,
            from_address: default_from_address(),
            contact_address: default_contact_address(),
        }
    }
}

impl EmailConfig {
    /// The secret the selected provider needs, if it is set and non-empty.
    pub fn credential(&self) -> Option<&str> {
        let credential = match self.provider {
            EmailProvider::Resend => self.api_key.as_deref(),
            EmailProvider::Smtp => self.smtp_password.as_deref(),
        };

        credential.filter(|value| !value.trim().is_empty())
    }
}

pub fn default_api_url() -> String {
    "https://api.resend.com".to_owned()
}

pub fn default_smtp_host() -> String {
    "smtp.resend.com".to_owned()
}

pub fn default_smtp_port() -> u16 {
    587
}

pub fn default_smtp_username() -> String {
    "resend".to_owned()
}

pub fn default_from_address() -> String {
    "Portfolio <onboarding@resend.dev>".to_owned()
}

pub fn default_contact_address() -> String {
    "tristan.david1503@icloud.com".to_owned()
}
