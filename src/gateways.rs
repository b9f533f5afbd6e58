use std::sync::Arc;

use anyhow::{Context, Result};
use userdel_core::{gateways::identity::IdentityGateway, repositories::ProfileRepo};
use userdel_gateways::{
    identity::{self, IdentityToolkit, JsonFileIdentityStore},
    profiles::{self, Firestore, JsonFileProfileStore},
};
use userdel_webserver::Gateways;

use crate::config::{Config, Firebase, IdentityProviderGateway, ProfileStoreGateway};

pub fn from_config(cfg: &Config) -> Result<Gateways> {
    Ok(Gateways {
        profiles: profile_store(&cfg.profile_store)?,
        identities: identity_provider(&cfg.identity_provider)?,
    })
}

fn profile_store(gw: &ProfileStoreGateway) -> Result<Arc<dyn ProfileRepo + Send + Sync>> {
    Ok(match gw {
        ProfileStoreGateway::JsonFile { dir } => {
            let store = JsonFileProfileStore::try_new(dir)
                .with_context(|| format!("Unable to open profile store {}", dir.display()))?;
            Arc::new(store)
        }
        ProfileStoreGateway::Firestore(firebase) => {
            let Firebase {
                project_id,
                access_token,
                accounts_collection,
                firestore_api_url,
                ..
            } = firebase.clone();
            Arc::new(Firestore {
                api_base_url: firestore_api_url
                    .unwrap_or_else(|| profiles::DEFAULT_FIRESTORE_API_URL.to_string()),
                project_id,
                collection: accounts_collection,
                access_token,
            })
        }
    })
}

fn identity_provider(gw: &IdentityProviderGateway) -> Result<Arc<dyn IdentityGateway + Send + Sync>> {
    Ok(match gw {
        IdentityProviderGateway::JsonFile { dir } => {
            let store = JsonFileIdentityStore::try_new(dir)
                .with_context(|| format!("Unable to open identity store {}", dir.display()))?;
            Arc::new(store)
        }
        IdentityProviderGateway::IdentityToolkit(firebase) => {
            let Firebase {
                project_id,
                access_token,
                identity_toolkit_api_url,
                ..
            } = firebase.clone();
            Arc::new(IdentityToolkit {
                api_base_url: identity_toolkit_api_url
                    .unwrap_or_else(|| identity::DEFAULT_IDENTITY_TOOLKIT_API_URL.to_string()),
                project_id,
                access_token,
            })
        }
    })
}
