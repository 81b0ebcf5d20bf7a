use anyhow::{Context, Result};
use clap::Parser;
use std::{env, fmt};

const DEFAULT_PORT: u16 = 1337;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub aws_region: String,
    pub bucket_name: String,
    pub app_url: String,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Authenticated file upload/download gateway")]
pub struct Args {
    /// Port to bind to (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Target bucket (overrides BUCKET_NAME)
    #[arg(long)]
    pub bucket_name: Option<String>,

    /// Object-store region (overrides AWS_REGION)
    #[arg(long)]
    pub aws_region: Option<String>,

    /// Base URL used to build retrieval links (overrides APP_URL)
    #[arg(long)]
    pub app_url: Option<String>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        // Parse CLI once
        let args = Args::parse();

        // --- Environment fallback ---
        let env_port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => DEFAULT_PORT,
            Err(err) => return Err(err).context("reading PORT"),
        };
        let jwt_secret = env::var("JWT_SECRET").context("reading JWT_SECRET")?;
        let access_key_id = env::var("ACCESS_KEY_ID").context("reading ACCESS_KEY_ID")?;
        let secret_access_key =
            env::var("SECRET_ACCESS_KEY").context("reading SECRET_ACCESS_KEY")?;
        let env_region = env::var("AWS_REGION").ok();
        let env_bucket = env::var("BUCKET_NAME").ok();
        let env_app_url = env::var("APP_URL").ok();

        // --- Merge ---
        let port = args.port.unwrap_or(env_port);
        let cfg = Self {
            port,
            jwt_secret,
            access_key_id,
            secret_access_key,
            aws_region: args
                .aws_region
                .or(env_region)
                .context("reading AWS_REGION")?,
            bucket_name: args
                .bucket_name
                .or(env_bucket)
                .context("reading BUCKET_NAME")?,
            app_url: args
                .app_url
                .or(env_app_url)
                .unwrap_or_else(|| format!("http://localhost:{}", port)),
        };

        Ok(cfg)
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// The config is logged at startup; secrets must never reach the log output.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("aws_region", &self.aws_region)
            .field("bucket_name", &self.bucket_name)
            .field("app_url", &self.app_url)
            .finish()
    }
}
