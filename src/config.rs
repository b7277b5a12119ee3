//! Environment-driven configuration.
//!
//! Everything has a demo-friendly default so the server boots with no setup,
//! but secret material (admin credentials, JWT signing key) always routes
//! through here rather than living as literals next to the code that uses it.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Fallback signing key for local demos only.
const DEMO_JWT_SECRET: &str = "gaima-demo-secret-change-me";

pub struct Config {
    pub port: u16,
    pub admin_username: String,
    pub admin_password: String,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub redis_url: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        let jwt_secret = var("GAIMA_JWT_SECRET").unwrap_or_else(|_| {
            warn!("GAIMA_JWT_SECRET not set, using the built-in demo secret");
            DEMO_JWT_SECRET.to_string()
        });

        Self {
            port: try_load("GAIMA_PORT", "8000"),
            admin_username: try_load("GAIMA_ADMIN_USERNAME", "idot_admin"),
            admin_password: try_load("GAIMA_ADMIN_PASSWORD", "password123"),
            jwt_secret,
            token_ttl_secs: try_load("GAIMA_TOKEN_TTL_SECS", "86400"),
            redis_url: var("REDIS_URL").ok(),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| ())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_unset() {
        let port: u16 = try_load("GAIMA_TEST_UNSET_PORT", "8000");
        assert_eq!(port, 8000);
    }

    #[test]
    fn test_env_value_overrides_default() {
        env::set_var("GAIMA_TEST_SET_PORT", "9100");
        let port: u16 = try_load("GAIMA_TEST_SET_PORT", "8000");
        assert_eq!(port, 9100);
        env::remove_var("GAIMA_TEST_SET_PORT");
    }
}
