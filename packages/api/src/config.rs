use std::env;

/// Server settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path every route is mounted under, e.g. `/api`. Empty mounts at the root.
    pub prefix: String,
    pub auth_header: String,
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            prefix: "/api".to_string(),
            auth_header: "X-Remote-User".to_string(),
            debug: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("APP_HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("APP_PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }

        if let Some(prefix) = lookup("APP_PREFIX") {
            config.prefix = normalize_prefix(&prefix);
        }

        if let Some(auth_header) = lookup("AUTH_HEADER_NAME") {
            config.auth_header = auth_header;
        }

        if let Some(debug) = lookup("APP_DEBUG") {
            config.debug = debug.eq_ignore_ascii_case("true");
        }

        config
    }

    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
