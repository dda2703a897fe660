use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct CoffeeConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl CoffeeConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let uri = match env::var("MONGODB_URI") {
            Ok(uri) => uri,
            Err(_) => compose_uri(is_prod)?,
        };

        Ok(CoffeeConfig {
            common,
            mongodb: MongoConfig {
                uri,
                database: get_env("MONGODB_DATABASE", Some("coffeeDB"), is_prod)?,
            },
        })
    }
}

/// Combine the credential pair into a connection string when no full URI
/// is configured.
fn compose_uri(is_prod: bool) -> Result<String, AppError> {
    let host = match env::var("DB_HOST") {
        Ok(host) => host,
        Err(_) if !is_prod => return Ok("mongodb://localhost:27017".to_string()),
        Err(_) => {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "DB_HOST is required in production but not set"
            )))
        }
    };
    let user = get_env("DB_USER", None, is_prod)?;
    let pass = get_env("DB_PASS", None, is_prod)?;

    Ok(format!(
        "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
        urlencoding::encode(&user),
        urlencoding::encode(&pass),
        host
    ))
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the DB_* environment mutations cannot race each
    // other across test threads.
    #[test]
    fn compose_uri_from_credentials() {
        env::remove_var("DB_HOST");
        let uri = compose_uri(false).expect("Failed to compose URI");
        assert_eq!(uri, "mongodb://localhost:27017");

        env::set_var("DB_HOST", "cluster0.example.mongodb.net");
        env::set_var("DB_USER", "coffee admin");
        env::set_var("DB_PASS", "p@ss/word");

        let uri = compose_uri(false).expect("Failed to compose URI");

        assert!(uri.starts_with("mongodb+srv://"));
        assert!(uri.contains("coffee%20admin"));
        assert!(uri.contains("p%40ss%2Fword"));
        assert!(uri.ends_with("@cluster0.example.mongodb.net/?retryWrites=true&w=majority"));

        env::remove_var("DB_HOST");
        env::remove_var("DB_USER");
        env::remove_var("DB_PASS");
    }
}
