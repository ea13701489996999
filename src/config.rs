use std::env;

const DEFAULT_BIND: &str = "0.0.0.0:8081";
const DEFAULT_PUBLIC_URL: &str = "http://localhost:8081/";
const DEFAULT_CLIENT_ID: &str = "LocalClient";

/// Demo server settings, read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    /// `BIND_ADDR`
    pub bind: String,
    /// `PUBLIC_URL`, the page the provider redirects back to.
    pub public_url: String,
    /// `ASANA_CLIENT_ID`
    pub client_id: String,
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        Config {
            bind: get("BIND_ADDR", DEFAULT_BIND),
            public_url: get("PUBLIC_URL", DEFAULT_PUBLIC_URL),
            client_id: get("ASANA_CLIENT_ID", DEFAULT_CLIENT_ID),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset_or_blank() {
        let config = Config::from_lookup(|key| match key {
            "PUBLIC_URL" => Some("  ".to_owned()),
            _ => None,
        });

        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.public_url, DEFAULT_PUBLIC_URL);
        assert_eq!(config.client_id, DEFAULT_CLIENT_ID);
    }

    #[test]
    fn environment_overrides() {
        let config = Config::from_lookup(|key| match key {
            "ASANA_CLIENT_ID" => Some("1200000000000".to_owned()),
            "BIND_ADDR" => Some("127.0.0.1:9000".to_owned()),
            _ => None,
        });

        assert_eq!(config.client_id, "1200000000000");
        assert_eq!(config.bind, "127.0.0.1:9000");
    }
}
