//! Central configuration.
//!
//! Environment variables (and a `.env` file) are bound onto [`Settings`];
//! `config/config.yaml` supplies structured sections such as risk limits.
//! Environment values take precedence over the YAML file.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use dotenv::dotenv;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::ConfigError;

/// YAML location used when no explicit path is given.
pub const DEFAULT_YAML_PATH: &str = "config/config.yaml";

/// Environment-bound settings. Variable names are matched case-insensitively.
#[derive(Clone, PartialEq, Serialize)]
pub struct Settings {
    // App
    pub app_env: String,
    pub debug: bool,
    pub host: String,
    pub port: u16,
    pub log_level: String,

    // Database
    pub database_url: Option<String>,
    pub database_echo: bool,

    // Dhan (broker/data)
    pub dhan_base_url: Option<String>,
    pub dhan_trading_client_id: Option<String>,
    pub dhan_trading_access_token: Option<String>,
    pub dhan_data_client_id: Option<String>,
    pub dhan_data_access_token: Option<String>,
    pub dhan_sandbox: bool,

    // Telegram
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,

    pub secret_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_env: "development".to_string(),
            debug: false,
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "INFO".to_string(),
            database_url: None,
            database_echo: false,
            dhan_base_url: None,
            dhan_trading_client_id: None,
            dhan_trading_access_token: None,
            dhan_data_client_id: None,
            dhan_data_access_token: None,
            dhan_sandbox: true,
            telegram_bot_token: None,
            telegram_chat_id: None,
            secret_key: None,
        }
    }
}

impl Settings {
    /// Load `.env` (if any) and bind the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Bind settings from arbitrary `(name, value)` pairs.
    ///
    /// Unrecognised names are ignored. Empty values for typed fields fall back
    /// to the field default; values that do not parse are an error.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.as_ref().to_string()))
            .collect();
        let text = |name: &str| vars.get(name).cloned();

        let mut settings = Settings::default();

        if let Some(v) = text("app_env") {
            settings.app_env = v;
        }
        settings.debug = parse_bool(&vars, "DEBUG", settings.debug)?;
        if let Some(v) = text("host") {
            settings.host = v;
        }
        settings.port = parse_port(&vars, settings.port)?;
        if let Some(v) = text("log_level") {
            settings.log_level = v;
        }

        settings.database_url = text("database_url");
        settings.database_echo = parse_bool(&vars, "DATABASE_ECHO", settings.database_echo)?;

        settings.dhan_base_url = text("dhan_base_url");
        settings.dhan_trading_client_id = text("dhan_trading_client_id");
        settings.dhan_trading_access_token = text("dhan_trading_access_token");
        settings.dhan_data_client_id = text("dhan_data_client_id");
        settings.dhan_data_access_token = text("dhan_data_access_token");
        settings.dhan_sandbox = parse_bool(&vars, "DHAN_SANDBOX", settings.dhan_sandbox)?;

        settings.telegram_bot_token = text("telegram_bot_token");
        settings.telegram_chat_id = text("telegram_chat_id");
        settings.secret_key = text("secret_key");

        Ok(settings)
    }

    /// Settings as a JSON object keyed by lower-case field name. Unset values are `null`.
    pub fn to_value_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Case-insensitive lookup of a single setting. `None` for unknown names.
    pub fn value_of(&self, key: &str) -> Option<Value> {
        self.to_value_map().remove(&key.to_ascii_lowercase())
    }
}

fn parse_bool(
    vars: &HashMap<String, String>,
    key: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(raw) = vars.get(&key.to_ascii_lowercase()) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" | "y" | "t" => Ok(true),
        "0" | "false" | "no" | "off" | "n" | "f" => Ok(false),
        _ => Err(ConfigError::InvalidSetting {
            key,
            value: raw.clone(),
            reason: "expected a boolean".to_string(),
        }),
    }
}

fn parse_port(vars: &HashMap<String, String>, default: u16) -> Result<u16, ConfigError> {
    match vars.get("port").map(|v| v.trim()) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| {
            ConfigError::InvalidSetting {
                key: "PORT",
                value: raw.to_string(),
                reason: e.to_string(),
            }
        }),
    }
}

fn redact(secret: &Option<String>) -> Option<&'static str> {
    secret.as_ref().map(|_| "***")
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("app_env", &self.app_env)
            .field("debug", &self.debug)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("database_url", &self.database_url.as_deref().map(mask_url_password))
            .field("database_echo", &self.database_echo)
            .field("dhan_base_url", &self.dhan_base_url)
            .field("dhan_trading_client_id", &self.dhan_trading_client_id)
            .field("dhan_trading_access_token", &redact(&self.dhan_trading_access_token))
            .field("dhan_data_client_id", &self.dhan_data_client_id)
            .field("dhan_data_access_token", &redact(&self.dhan_data_access_token))
            .field("dhan_sandbox", &self.dhan_sandbox)
            .field("telegram_bot_token", &redact(&self.telegram_bot_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("secret_key", &redact(&self.secret_key))
            .finish()
    }
}

/// Replace the password component of a connection URL with `***`.
pub fn mask_url_password(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((userinfo, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };
    match userinfo.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
        None => url.to_string(),
    }
}

/// Read the YAML file into a mapping of section name to value.
///
/// Never fails: a missing file, unreadable file, parse error or a top level
/// that is not a mapping all produce an empty mapping.
pub fn load_yaml(path: &Path) -> Map<String, Value> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!("No YAML config at {}: {}", path.display(), e);
            return Map::new();
        }
    };
    match parse_yaml(&content) {
        Ok(map) => map,
        Err(reason) => {
            warn!("Ignoring YAML config {}: {}", path.display(), reason);
            Map::new()
        }
    }
}

fn parse_yaml(content: &str) -> Result<Map<String, Value>, String> {
    let doc: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    if doc.is_null() {
        return Ok(Map::new());
    }
    match serde_json::to_value(doc).map_err(|e| e.to_string())? {
        Value::Object(map) => Ok(map),
        other => Err(format!("top level must be a mapping, found {}", kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// A value counts as set when it is non-null, not an empty string and not an empty sequence.
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Settings plus YAML behind one lookup surface.
#[derive(Debug, Clone, Default)]
pub struct Config {
    settings: Settings,
    yaml: Map<String, Value>,
}

impl Config {
    pub fn new(settings: Settings, yaml: Map<String, Value>) -> Self {
        Self { settings, yaml }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn yaml(&self) -> &Map<String, Value> {
        &self.yaml
    }

    /// Environment-backed setting by name, case-insensitive. Unset settings are `None`.
    pub fn get_env(&self, key: &str) -> Option<Value> {
        self.settings.value_of(key).filter(|v| !v.is_null())
    }

    pub fn get_env_or(&self, key: &str, default: Value) -> Value {
        self.get_env(key).unwrap_or(default)
    }

    /// Single value from a YAML section. `None` if the section is missing or not a mapping.
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.yaml.get(section)?.as_object()?.get(key)
    }

    pub fn get_or(&self, section: &str, key: &str, default: Value) -> Value {
        self.get(section, key).cloned().unwrap_or(default)
    }

    /// Whole YAML section.
    pub fn get_section(&self, section: &str) -> Option<&Value> {
        self.yaml.get(section)
    }

    pub fn get_section_or(&self, section: &str, default: Value) -> Value {
        self.get_section(section).cloned().unwrap_or(default)
    }

    /// Deserialize a YAML section into a typed struct.
    pub fn section_as<T: DeserializeOwned>(&self, section: &str) -> Option<T> {
        let value = self.get_section(section)?.clone();
        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("YAML section {} has an unexpected shape: {}", section, e);
                None
            }
        }
    }

    /// Combined lookup: a set environment value first, then the top-level YAML entry.
    pub fn lookup(&self, key: &str) -> Option<Value> {
        match self.get_env(key) {
            Some(value) if is_set(&value) => Some(value),
            _ => self.yaml.get(key).cloned(),
        }
    }

    /// YAML merged with every non-null setting; settings win on collision.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut merged = self.yaml.clone();
        merged.extend(
            self.settings
                .to_value_map()
                .into_iter()
                .filter(|(_, v)| !v.is_null()),
        );
        merged
    }
}

/// Builds [`Config`] once per YAML path and hands out shared references.
///
/// Construct one loader at startup and pass it (or the loaded config) to the
/// components that need it.
pub struct ConfigLoader {
    vars: Vec<(String, String)>,
    cache: Mutex<HashMap<Option<PathBuf>, Arc<Config>>>,
}

impl ConfigLoader {
    /// Snapshot the process environment after loading `.env`.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::with_vars(std::env::vars())
    }

    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached config for `yaml_path`, building it on first request.
    pub fn load(&self, yaml_path: Option<&Path>) -> Result<Arc<Config>, ConfigError> {
        let key = yaml_path.map(Path::to_path_buf);
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(config) = cache.get(&key) {
            return Ok(Arc::clone(config));
        }

        let settings = Settings::from_vars(self.vars.iter().map(|(k, v)| (k, v)))?;
        let yaml = load_yaml(yaml_path.unwrap_or_else(|| Path::new(DEFAULT_YAML_PATH)));
        debug!(
            "Loaded config (app_env={}, {} YAML sections)",
            settings.app_env,
            yaml.len()
        );
        let config = Arc::new(Config::new(settings, yaml));
        cache.insert(key, Arc::clone(&config));
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::io::Write;

    fn yaml_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn config_with(vars: &[(&str, &str)], yaml: &str) -> Config {
        let settings = Settings::from_vars(vars.iter().copied()).unwrap();
        let yaml = parse_yaml(yaml).unwrap();
        Config::new(settings, yaml)
    }

    #[test]
    fn test_defaults_without_environment() {
        let settings = Settings::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.app_env, "development");
        assert_eq!(settings.port, 8000);
        assert!(settings.dhan_sandbox);
        assert!(settings.database_url.is_none());
    }

    #[test]
    fn test_variable_names_are_case_insensitive() {
        let settings = Settings::from_vars([
            ("database_url", "postgresql://x"),
            ("Dhan_Sandbox", "false"),
            ("PORT", "9001"),
        ])
        .unwrap();
        assert_eq!(settings.database_url.as_deref(), Some("postgresql://x"));
        assert!(!settings.dhan_sandbox);
        assert_eq!(settings.port, 9001);
    }

    #[test]
    fn test_boolean_spellings() {
        for (raw, expected) in [("1", true), ("YES", true), ("on", true), ("0", false), ("Off", false)] {
            let settings = Settings::from_vars([("DEBUG", raw)]).unwrap();
            assert_eq!(settings.debug, expected, "DEBUG={raw}");
        }
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = Settings::from_vars([("DATABASE_ECHO", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting { key: "DATABASE_ECHO", .. }));

        let err = Settings::from_vars([("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting { key: "PORT", .. }));
    }

    #[test]
    fn test_get_env_prefers_environment_over_nested_yaml() {
        let config = config_with(
            &[("DATABASE_URL", "postgresql://x")],
            "storage:\n  database_url: postgresql://y\n",
        );
        assert_eq!(config.get_env("DATABASE_URL"), Some(json!("postgresql://x")));
        assert_eq!(config.get_env("database_url"), Some(json!("postgresql://x")));
    }

    #[test]
    fn test_get_env_defaults() {
        let config = config_with(&[], "");
        assert_eq!(config.get_env("APP_ENV"), Some(json!("development")));
        assert_eq!(config.get_env("DHAN_SANDBOX"), Some(json!(true)));
        assert_eq!(config.get_env("SECRET_KEY"), None);
        assert_eq!(config.get_env_or("SECRET_KEY", json!("fallback")), json!("fallback"));
        assert_eq!(config.get_env_or("NOT_A_SETTING", json!(7)), json!(7));
    }

    #[test]
    fn test_section_lookups() {
        let config = config_with(&[], "risk_limits:\n  max_position: 10\nversion: 3\n");
        assert_eq!(config.get_section("risk_limits"), Some(&json!({"max_position": 10})));
        assert_eq!(config.get("risk_limits", "max_position"), Some(&json!(10)));
        assert_eq!(config.get_or("risk_limits", "max_loss", json!(0)), json!(0));
        // a scalar section is not a mapping
        assert_eq!(config.get("version", "anything"), None);
        assert_eq!(config.get_section_or("missing", json!({"a": 1})), json!({"a": 1}));
    }

    #[test]
    fn test_section_as_typed() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct RiskLimits {
            max_position: u32,
        }
        let config = config_with(&[], "risk_limits:\n  max_position: 10\n");
        assert_eq!(
            config.section_as::<RiskLimits>("risk_limits"),
            Some(RiskLimits { max_position: 10 })
        );
        assert_eq!(config.section_as::<RiskLimits>("other"), None);
    }

    #[test]
    fn test_lookup_falls_back_to_yaml_for_empty_env_values() {
        let config = config_with(
            &[("TELEGRAM_CHAT_ID", ""), ("HOST", "127.0.0.1")],
            "telegram_chat_id: \"42\"\nhost: example.org\ndhan:\n  segment: NSE_EQ\n",
        );
        assert_eq!(config.lookup("TELEGRAM_CHAT_ID"), None);
        assert_eq!(config.lookup("telegram_chat_id"), Some(json!("42")));
        assert_eq!(config.lookup("host"), Some(json!("127.0.0.1")));
        assert_eq!(config.lookup("dhan"), Some(json!({"segment": "NSE_EQ"})));
        assert_eq!(config.lookup("nothing"), None);
    }

    #[test]
    fn test_to_dict_merges_with_environment_winning() {
        let config = config_with(
            &[("SECRET_KEY", "s3cret")],
            "secret_key: from-yaml\napp_env: yaml-env\nrisk_limits:\n  max_position: 10\n",
        );
        let merged = config.to_dict();
        assert_eq!(merged["secret_key"], json!("s3cret"));
        // app_env always has a value, so YAML never shows through
        assert_eq!(merged["app_env"], json!("development"));
        assert_eq!(merged["risk_limits"], json!({"max_position": 10}));
        assert!(!merged.contains_key("database_url"));
        assert_eq!(merged["port"], json!(8000));
    }

    #[test]
    fn test_to_dict_keeps_yaml_when_setting_is_null() {
        let config = config_with(&[], "database_url: \"sqlite::memory:\"\n");
        assert_eq!(config.to_dict()["database_url"], json!("sqlite::memory:"));
    }

    #[test]
    fn test_broken_yaml_is_empty() {
        let file = yaml_file("risk_limits: [unclosed\n");
        assert!(load_yaml(file.path()).is_empty());

        let file = yaml_file("- just\n- a list\n");
        assert!(load_yaml(file.path()).is_empty());

        assert!(load_yaml(Path::new("/nonexistent/config.yaml")).is_empty());
    }

    #[test]
    fn test_yaml_with_numeric_keys() {
        let file = yaml_file("lots:\n  1: one\n  2: two\n");
        let yaml = load_yaml(file.path());
        assert_eq!(yaml["lots"], json!({"1": "one", "2": "two"}));
    }

    #[test]
    fn test_shipped_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/config.yaml");
        let config = Config::new(Settings::default(), load_yaml(&path));
        assert_eq!(config.get("risk_limits", "max_position"), Some(&json!(10)));
        assert!(config.get_section("dhan").is_some_and(Value::is_object));
    }

    #[test]
    fn test_loader_caches_per_path() {
        let file = yaml_file("risk_limits:\n  max_position: 10\n");
        let loader = ConfigLoader::with_vars([("APP_ENV", "test")]);

        let first = loader.load(None).unwrap();
        let second = loader.load(None).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let custom = loader.load(Some(file.path())).unwrap();
        assert!(!Arc::ptr_eq(&first, &custom));
        assert!(Arc::ptr_eq(&custom, &loader.load(Some(file.path())).unwrap()));
        assert_eq!(custom.get("risk_limits", "max_position"), Some(&json!(10)));
        assert_eq!(custom.settings().app_env, "test");
    }

    #[test]
    fn test_loader_propagates_invalid_settings() {
        let loader = ConfigLoader::with_vars([("PORT", "-1")]);
        assert!(loader.load(None).is_err());
    }

    #[test]
    fn test_debug_output_hides_secrets() {
        let settings = Settings::from_vars([
            ("DATABASE_URL", "postgresql://algo:hunter2@db:5432/algo"),
            ("DHAN_TRADING_ACCESS_TOKEN", "tok"),
        ])
        .unwrap();
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("\"tok\""));
        assert!(rendered.contains("postgresql://algo:***@db:5432/algo"));
    }

    #[test]
    fn test_mask_url_password() {
        assert_eq!(mask_url_password("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(mask_url_password("mysql://root@localhost/db"), "mysql://root@localhost/db");
        assert_eq!(mask_url_password("postgresql://u:p@h/db"), "postgresql://u:***@h/db");
    }
}
