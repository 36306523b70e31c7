use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub from_address: String,
}

impl EmailConfig {
    /// Returns `None` when SMTP_HOST is absent; the notifier is simply not
    /// configured in that case and no emails are sent.
    pub fn init() -> Result<Option<Self>> {
        let smtp_host = match std::env::var("SMTP_HOST") {
            Ok(host) => host,
            Err(_) => return Ok(None),
        };

        let smtp_user =
            std::env::var("SMTP_USERNAME").context("Missing environment variable: SMTP_USERNAME")?;
        let smtp_pass =
            std::env::var("SMTP_PASSWORD").context("Missing environment variable: SMTP_PASSWORD")?;
        let smtp_port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .context("SMTP_PORT must be a valid u16 integer")?;
        let from_address = std::env::var("SMTP_FROM")
            .unwrap_or_else(|_| "no-reply@impresiones-lowcost.test".to_string());

        Ok(Some(Self {
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_pass,
            from_address,
        }))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub run_migrations: bool,
    pub upload_dir: String,
    pub email: Option<EmailConfig>,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let run_migrations = match std::env::var("RUN_MIGRATIONS")
            .unwrap_or_else(|_| "true".to_string())
            .as_str()
        {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());

        let email = EmailConfig::init().context("failed email config")?;

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            run_migrations,
            upload_dir,
            email,
        })
    }
}
