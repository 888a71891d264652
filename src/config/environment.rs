// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, database URL, JWT settings, CORS origins, and deployment mode from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{defaults, limits, ports};
use anyhow::{Context, Result};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational
    #[default]
    Info,
    /// Debugging detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL
    pub url: String,
}

/// Token signing settings
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    /// Access token lifetime
    pub jwt_expiry_hours: i64,
    /// True when no `JWT_SECRET` was configured and one was generated for this process
    pub secret_generated: bool,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .field("secret_generated", &self.secret_generated)
            .finish()
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*`
    pub allowed_origins: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Database settings
    pub database: DatabaseConfig,
    /// Token settings
    pub auth: AuthConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            host: defaults::DEFAULT_HOST.to_owned(),
            log_level: LogLevel::default(),
            environment: Environment::default(),
            database: DatabaseConfig {
                url: defaults::DEFAULT_DATABASE_URL.to_owned(),
            },
            auth: AuthConfig {
                jwt_secret: generate_jwt_secret(),
                jwt_expiry_hours: limits::DEFAULT_JWT_EXPIRY_HOURS,
                secret_generated: true,
            },
            cors: CorsConfig {
                allowed_origins: defaults::DEFAULT_CORS_ORIGINS.to_owned(),
            },
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A numeric variable cannot be parsed
    /// - `JWT_SECRET` is missing in production
    /// - The resulting configuration fails [`ServerConfig::validate`]
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let environment = Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development"));

        let (jwt_secret, secret_generated) = if let Ok(secret) = env::var("JWT_SECRET") {
            (secret, false)
        } else {
            if environment.is_production() {
                anyhow::bail!("JWT_SECRET must be set in production");
            }
            warn!("JWT_SECRET not set; generated a per-process secret, tokens will not survive a restart");
            (generate_jwt_secret(), true)
        };

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_var_or("HOST", defaults::DEFAULT_HOST),
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),
            environment,
            database: DatabaseConfig {
                url: env_var_or("DATABASE_URL", defaults::DEFAULT_DATABASE_URL),
            },
            auth: AuthConfig {
                jwt_secret,
                jwt_expiry_hours: env_var_or(
                    "JWT_EXPIRY_HOURS",
                    &limits::DEFAULT_JWT_EXPIRY_HOURS.to_string(),
                )
                .parse()
                .context("Invalid JWT_EXPIRY_HOURS value")?,
                secret_generated,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", defaults::DEFAULT_CORS_ORIGINS),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `HTTP_PORT` is 0
    /// - `JWT_EXPIRY_HOURS` is outside 1..=720
    /// - In production, the JWT secret was generated or is shorter than 32 bytes
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            anyhow::bail!("HTTP_PORT must be non-zero");
        }

        if !(1..=limits::MAX_JWT_EXPIRY_HOURS).contains(&self.auth.jwt_expiry_hours) {
            anyhow::bail!(
                "JWT_EXPIRY_HOURS must be between 1 and {}, got {}",
                limits::MAX_JWT_EXPIRY_HOURS,
                self.auth.jwt_expiry_hours
            );
        }

        if self.environment.is_production() {
            if self.auth.secret_generated {
                anyhow::bail!("JWT_SECRET must be set in production");
            }
            if self.auth.jwt_secret.len() < limits::MIN_JWT_SECRET_LEN {
                anyhow::bail!(
                    "JWT_SECRET must be at least {} bytes in production",
                    limits::MIN_JWT_SECRET_LEN
                );
            }
        }

        Ok(())
    }

    /// `host:port` the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrifit Server Configuration:\n\
             - Environment: {}\n\
             - Bind Address: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - JWT Expiry: {}h\n\
             - JWT Secret: {}\n\
             - CORS Origins: {}",
            self.environment,
            self.bind_address(),
            self.log_level,
            redact_database_url(&self.database.url),
            self.auth.jwt_expiry_hours,
            if self.auth.secret_generated {
                "Generated"
            } else {
                "Configured"
            },
            self.cors.allowed_origins,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// 32 random bytes, hex encoded
fn generate_jwt_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Strip any query string (connection options may carry credentials)
fn redact_database_url(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
