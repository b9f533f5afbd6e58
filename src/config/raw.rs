use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("userdel.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub webserver: Option<WebServer>,
    pub jwt: Option<Jwt>,
    pub profile_store: Option<ProfileStore>,
    pub identity_provider: Option<IdentityProvider>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Jwt {
    pub secret: Option<String>,
    #[serde(deserialize_with = "deserialize_duration")]
    pub token_valid_for: Duration,
}

impl Default for Jwt {
    fn default() -> Self {
        Config::default().jwt.expect("JWT configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProfileStore {
    pub gateway: ProfileStoreGateway,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Config::default()
            .profile_store
            .expect("Profile store configuration")
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileStoreGateway {
    JsonFile,
    Firestore,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IdentityProvider {
    pub gateway: IdentityProviderGateway,
}

impl Default for IdentityProvider {
    fn default() -> Self {
        Config::default()
            .identity_provider
            .expect("Identity provider configuration")
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentityProviderGateway {
    JsonFile,
    IdentityToolkit,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub json_file: Option<JsonFile>,
    pub firebase: Option<Firebase>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct JsonFile {
    pub profiles_dir: PathBuf,
    pub identities_dir: PathBuf,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Firebase {
    pub project_id: String,
    pub access_token: Option<String>,
    pub accounts_collection: Option<String>,
    pub firestore_api_url: Option<String>,
    pub identity_toolkit_api_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.webserver.is_some());
        assert!(cfg.profile_store.is_some());
        assert!(cfg.identity_provider.is_some());
        assert!(cfg.gateway.and_then(|gw| gw.json_file).is_some());
    }

    #[test]
    fn default_jwt_config() {
        let cfg = Jwt::default();
        assert!(cfg.secret.is_none());
        assert_eq!(cfg.token_valid_for, Duration::from_secs(24 * 60 * 60));
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string = fs::read_to_string("src/config/userdel.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        assert!(matches!(
            cfg.profile_store.unwrap().gateway,
            ProfileStoreGateway::Firestore
        ));
        assert!(matches!(
            cfg.identity_provider.unwrap().gateway,
            IdentityProviderGateway::IdentityToolkit
        ));
        assert_eq!(
            cfg.jwt.unwrap().token_valid_for,
            Duration::from_secs(12 * 60 * 60)
        );
    }
}
