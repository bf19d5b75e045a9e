use std::env;

/// Runtime settings resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub bind_addr: String,
    /// SQLite connection string.
    pub database_url: String,
    /// Base URL of the external crop/price predictor service.
    pub predictor_base_url: String,
    /// Directory uploaded images are written to.
    pub media_root: String,
    /// Directory rolling log files are written to.
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("FARMLEASE_BIND_ADDR", "127.0.0.1:8000"),
            database_url: env_or("DATABASE_URL", "sqlite://farmlease.db"),
            predictor_base_url: env_or("PREDICTOR_BASE_URL", "http://127.0.0.1:9000"),
            media_root: env_or("MEDIA_ROOT", "./media"),
            log_dir: env_or("LOG_DIR", "./logs"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_unset() {
        std::env::remove_var("FARMLEASE_BIND_ADDR");
        let cfg = Config::from_env();
        assert_eq!(cfg.bind_addr, "127.0.0.1:8000");
    }
}
