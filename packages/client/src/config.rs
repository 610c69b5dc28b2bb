use std::env;

/// Where the API lives and who we are, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Origin serving the API; request paths are appended after `/api`.
    pub api_url: String,
    /// Username sent in `auth_header`. Left unset when a proxy injects it.
    pub user: Option<String>,
    pub auth_header: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            user: None,
            auth_header: "X-Remote-User".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(api_url) = lookup("PRENOMS_API_URL") {
            config.api_url = api_url;
        }

        if let Some(user) = lookup("PRENOMS_USER").filter(|u| !u.trim().is_empty()) {
            config.user = Some(user);
        }

        if let Some(auth_header) = lookup("AUTH_HEADER_NAME") {
            config.auth_header = auth_header;
        }

        config
    }
}
