//! Tests for configuration system

use portfolio::Config;
use portfolio_notification::EmailProvider;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("portfolio.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[email]
provider = "smtp"
smtp_host = "smtp.example.com"
contact_address = "me@example.com"
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.email.provider, EmailProvider::Smtp);
    assert_eq!(config.email.smtp_host, "smtp.example.com");
    assert_eq!(config.email.smtp_port, 587);
    assert_eq!(config.email.contact_address, "me@example.com");
    assert_eq!(config.email.from_address, "Portfolio <onboarding@resend.dev>");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_defaults_without_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.child("missing.toml");

    let config = Config::load(Some(missing.to_string_lossy().into_owned()))?;

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.email.provider, EmailProvider::Resend);
    assert_eq!(config.email.api_url, "https://api.resend.com");
    assert_eq!(config.observability.log_level, "info");

    Ok(())
}
