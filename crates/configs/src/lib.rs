use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub people: PeopleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// Settings for the in-memory person directory.
#[derive(Debug, Clone, Deserialize)]
pub struct PeopleConfig {
    /// Start with the three fixed records instead of an empty directory.
    #[serde(default = "default_seed")]
    pub seed: bool,
}

impl Default for PeopleConfig {
    fn default() -> Self {
        Self { seed: default_seed() }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8080 }
fn default_seed() -> bool { true }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

/// Build a config from `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS` and `PEOPLE_SEED`.
pub fn from_env() -> AppConfig {
    from_lookup(|key| std::env::var(key).ok())
}

fn from_lookup<F>(get: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = ServerConfig::default();
    let server = ServerConfig {
        host: get("SERVER_HOST").unwrap_or(defaults.host),
        port: get("SERVER_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port),
        worker_threads: get("TOKIO_WORKER_THREADS")
            .and_then(|v| v.parse::<usize>().ok())
            .or(defaults.worker_threads),
    };
    let people = PeopleConfig {
        seed: get("PEOPLE_SEED")
            .and_then(|v| parse_bool(&v))
            .unwrap_or_else(default_seed),
    };
    AppConfig { server, people }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file if present, environment otherwise; validated either way.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    /// Only a missing file falls back to the environment; unreadable or malformed files are errors.
    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = match std::fs::read_to_string(path) {
            Ok(content) => parse(&content).map_err(|e| anyhow!("{path}: {e}"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => from_env(),
            Err(e) => return Err(anyhow!("cannot read {path}: {e}")),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.people.seed);
    }

    #[test]
    fn parses_sections() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            worker_threads = 2

            [people]
            seed = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert!(!cfg.people.seed);
    }

    #[test]
    fn normalize_fills_blank_host_and_zero_threads() {
        let mut cfg = parse("[server]\nhost = \"  \"\nport = 8081\nworker_threads = 0\n").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut cfg = parse("[server]\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn env_lookup_overrides_defaults() {
        let vars: HashMap<&str, &str> = [
            ("SERVER_HOST", "10.0.0.1"),
            ("SERVER_PORT", "8181"),
            ("PEOPLE_SEED", "off"),
        ]
        .into_iter()
        .collect();
        let cfg = from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.server.bind_addr(), "10.0.0.1:8181");
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert!(!cfg.people.seed);
    }

    fn temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir()
            .join(format!("people_api_{}_{}.toml", name, std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn malformed_file_is_an_error_not_a_fallback() {
        let path = temp_config("malformed", "[server]\nport = \"not a number\"\n[people]\nseed = false\n");
        let res = AppConfig::load_or_env_from(path.to_str().unwrap());
        let _ = std::fs::remove_file(&path);
        assert!(res.is_err());
    }

    #[test]
    fn existing_file_wins_over_environment() {
        let path = temp_config("valid", "[people]\nseed = false\n");
        let cfg = AppConfig::load_or_env_from(path.to_str().unwrap()).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(!cfg.people.seed);
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn missing_file_falls_back_to_environment() {
        let path = std::env::temp_dir()
            .join(format!("people_api_missing_{}.toml", std::process::id()));
        let cfg = AppConfig::load_or_env_from(path.to_str().unwrap());
        assert!(cfg.is_ok());
    }

    #[test]
    fn bad_env_values_fall_back() {
        let cfg = from_lookup(|k| match k {
            "SERVER_PORT" => Some("not-a-port".into()),
            "PEOPLE_SEED" => Some("maybe".into()),
            _ => None,
        });
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.people.seed);
    }
}
