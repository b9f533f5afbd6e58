use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, path::PathBuf, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "userdel.toml";

const ENV_NAME_JWT_SECRET: &str = "USERDEL_JWT_SECRET";
const ENV_NAME_FIREBASE_ACCESS_TOKEN: &str = "USERDEL_FIREBASE_ACCESS_TOKEN";

const DEFAULT_ACCOUNTS_COLLECTION: &str = "accounts";

pub struct Config {
    pub webserver: WebServer,
    pub jwt: Jwt,
    pub profile_store: ProfileStoreGateway,
    pub identity_provider: IdentityProviderGateway,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!("{} not found => load default configuration.", file_path.display());
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        apply_env_overrides(&mut raw_config);
        Self::try_from(raw_config)
    }
}

fn apply_env_overrides(cfg: &mut raw::Config) {
    if let Ok(secret) = env::var(ENV_NAME_JWT_SECRET) {
        cfg.jwt.get_or_insert_with(raw::Jwt::default).secret = Some(secret);
    }
    if let Ok(token) = env::var(ENV_NAME_FIREBASE_ACCESS_TOKEN) {
        if let Some(firebase) = cfg.gateway.as_mut().and_then(|gw| gw.firebase.as_mut()) {
            firebase.access_token = Some(token);
        }
    }
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Jwt {
    pub secret: Option<String>,
    pub token_valid_for: Duration,
}

#[derive(Debug, Clone)]
pub enum ProfileStoreGateway {
    /// For local operation and testing purposes
    JsonFile {
        /// File system directory with one JSON document per account.
        dir: PathBuf,
    },
    Firestore(Firebase),
}

#[derive(Debug, Clone)]
pub enum IdentityProviderGateway {
    /// For local operation and testing purposes
    JsonFile {
        /// File system directory with one JSON file per identity.
        dir: PathBuf,
    },
    IdentityToolkit(Firebase),
}

#[derive(Debug, Clone)]
pub struct Firebase {
    pub project_id: String,
    pub access_token: String,
    pub accounts_collection: String,
    pub firestore_api_url: Option<String>,
    pub identity_toolkit_api_url: Option<String>,
}

impl TryFrom<raw::Firebase> for Firebase {
    type Error = anyhow::Error;
    fn try_from(from: raw::Firebase) -> Result<Self> {
        let raw::Firebase {
            project_id,
            access_token,
            accounts_collection,
            firestore_api_url,
            identity_toolkit_api_url,
        } = from;
        if project_id.trim().is_empty() {
            return Err(anyhow!("Missing Firebase project id"));
        }
        let access_token = access_token.filter(|t| !t.is_empty()).ok_or_else(|| {
            anyhow!("Missing Firebase access token (set {ENV_NAME_FIREBASE_ACCESS_TOKEN})")
        })?;
        let accounts_collection =
            accounts_collection.unwrap_or_else(|| DEFAULT_ACCOUNTS_COLLECTION.to_string());
        Ok(Self {
            project_id,
            access_token,
            accounts_collection,
            firestore_api_url,
            identity_toolkit_api_url,
        })
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            webserver,
            jwt,
            profile_store,
            identity_provider,
            gateway,
        } = from;

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Jwt {
            secret,
            token_valid_for,
        } = jwt.unwrap_or_default();
        if token_valid_for.is_zero() {
            return Err(anyhow!("JWT tokens must be valid for a non-zero duration"));
        }
        let jwt = Jwt {
            secret: secret.filter(|s| !s.is_empty()),
            token_valid_for,
        };

        let gateway = gateway.unwrap_or_default();
        let json_file = || {
            gateway
                .json_file
                .clone()
                .ok_or_else(|| anyhow!("Missing 'json-file' gateway configuration"))
        };
        let firebase = || -> Result<Firebase> {
            gateway
                .firebase
                .clone()
                .ok_or_else(|| anyhow!("Missing 'firebase' gateway configuration"))?
                .try_into()
        };

        let profile_store = match profile_store.unwrap_or_default().gateway {
            raw::ProfileStoreGateway::JsonFile => {
                let dir = json_file()?.profiles_dir;
                log::info!("Use JSON file profile store ({})", dir.display());
                ProfileStoreGateway::JsonFile { dir }
            }
            raw::ProfileStoreGateway::Firestore => {
                log::info!("Use Firestore profile store");
                ProfileStoreGateway::Firestore(firebase()?)
            }
        };

        let identity_provider = match identity_provider.unwrap_or_default().gateway {
            raw::IdentityProviderGateway::JsonFile => {
                let dir = json_file()?.identities_dir;
                log::info!("Use JSON file identity provider ({})", dir.display());
                IdentityProviderGateway::JsonFile { dir }
            }
            raw::IdentityProviderGateway::IdentityToolkit => {
                log::info!("Use Identity Toolkit identity provider");
                IdentityProviderGateway::IdentityToolkit(firebase()?)
            }
        };

        Ok(Self {
            webserver,
            jwt,
            profile_store,
            identity_provider,
        })
    }
}
