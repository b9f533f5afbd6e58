use anyhow::anyhow;
use reqwest::blocking::Client;
use serde::Serialize;
use userdel_core::{
    entities::AccountId,
    gateways::identity::{Error, IdentityGateway},
};

use crate::google_api::{api_error, endpoint, ApiError};

pub const DEFAULT_API_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

const USER_NOT_FOUND: &str = "USER_NOT_FOUND";

/// Identity provider backed by the Identity Toolkit REST API
/// (Firebase Authentication).
#[derive(Debug, Clone)]
pub struct IdentityToolkit {
    pub api_base_url: String,
    pub project_id: String,
    pub access_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteAccount<'a> {
    local_id: &'a str,
}

fn classify(err: ApiError) -> Error {
    // The message may carry a detail suffix, e.g. "USER_NOT_FOUND : ..."
    if err.message.starts_with(USER_NOT_FOUND) {
        Error::NotFound
    } else {
        Error::Provider(anyhow!(err))
    }
}

impl IdentityGateway for IdentityToolkit {
    fn delete_identity(&self, id: &AccountId) -> Result<(), Error> {
        let url = endpoint(
            &self.api_base_url,
            &["projects", self.project_id.as_str(), "accounts:delete"],
        )?;
        let body = DeleteAccount {
            local_id: id.as_str(),
        };
        debug!("Deleting account {id} via {url}");
        let response = Client::new()
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .map_err(|err| anyhow!(err))?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(classify(api_error(response)))
    }
}
