use anyhow::Context;
use std::env;

const DEFAULT_TTL_MINUTES: i64 = 60;

/// Access token settings
///
/// Environment variables:
/// - JWT_SECRET: HMAC secret used to sign tokens (required)
/// - JWT_TTL_MINUTES: Token lifetime in minutes (default: 60)
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub ttl_minutes: i64,
}

impl AuthConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        let ttl_minutes = parse_ttl(env::var("JWT_TTL_MINUTES").ok().as_deref())?;

        Ok(Self {
            jwt_secret,
            ttl_minutes,
        })
    }

    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.ttl_minutes)
    }
}

fn parse_ttl(raw: Option<&str>) -> anyhow::Result<i64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TTL_MINUTES);
    };
    let minutes: i64 = raw
        .trim()
        .parse()
        .with_context(|| format!("JWT_TTL_MINUTES is not a number: {raw}"))?;
    anyhow::ensure!(minutes > 0, "JWT_TTL_MINUTES must be positive");
    Ok(minutes)
}
