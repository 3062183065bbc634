// Environment configuration, 12-factor style.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Absent or empty disables the Postgres backend; the service then serves
    /// only the in memory routes.
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST")
                .ok()
                .filter(|host| !host.is_empty())
                .unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_port(env::var("PORT").ok()),
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|port| port.parse().ok()).unwrap_or(5678)
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 5678)]
    #[case(Some("8080".into()), 8080)]
    #[case(Some("not-a-port".into()), 5678)]
    #[case(Some(String::new()), 5678)]
    fn it_should_fall_back_to_the_default_port(#[case] raw: Option<String>, #[case] expected: u16) {
        assert_eq!(parse_port(raw), expected);
    }

    #[test]
    fn it_should_format_the_listen_address() {
        let config = Config {
            host: "127.0.0.1".into(),
            port: 5678,
            database_url: None,
        };
        assert_eq!(config.listen_addr(), "127.0.0.1:5678");
    }
}
