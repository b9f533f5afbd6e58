use anyhow::anyhow;
use reqwest::{blocking::Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use userdel_core::{
    entities::{AccountId, Profile},
    repositories::{self, ProfileRepo},
};

use crate::google_api::{api_error, endpoint};

pub const DEFAULT_API_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Profile store backed by the Cloud Firestore REST API.
#[derive(Debug, Clone)]
pub struct Firestore {
    pub api_base_url: String,
    pub project_id: String,
    pub collection: String,
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    fields: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Value {
    boolean_value: Option<bool>,
}

fn profile_from_document(id: &AccountId, doc: &Document) -> Profile {
    let is_admin = doc
        .fields
        .get("admin")
        .and_then(|value| value.boolean_value)
        .unwrap_or(false);
    Profile {
        id: id.clone(),
        is_admin,
    }
}

impl Firestore {
    fn get_document(&self, id: &AccountId) -> anyhow::Result<Option<Document>> {
        let url = endpoint(
            &self.api_base_url,
            &[
                "projects",
                self.project_id.as_str(),
                "databases",
                "(default)",
                "documents",
                self.collection.as_str(),
                id.as_str(),
            ],
        )?;
        debug!("Fetching profile document {url}");
        let response = Client::new()
            .get(url)
            .bearer_auth(&self.access_token)
            .send()?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json()?)),
            _ => Err(anyhow!(api_error(response))),
        }
    }
}

impl ProfileRepo for Firestore {
    fn try_get_profile(&self, id: &AccountId) -> Result<Option<Profile>, repositories::Error> {
        if !id.is_valid() {
            return Ok(None);
        }
        let doc = self.get_document(id)?;
        Ok(doc.map(|doc| profile_from_document(id, &doc)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Profile {
        let doc: Document = serde_json::from_str(json).unwrap();
        profile_from_document(&"admin-1".into(), &doc)
    }

    #[test]
    fn admin_flag_from_boolean_field() {
        let profile = parse(
            r#"{
              "name": "projects/p/databases/(default)/documents/accounts/admin-1",
              "fields": { "admin": { "booleanValue": true }, "name": { "stringValue": "Ann" } }
            }"#,
        );
        assert!(profile.is_admin);
        assert_eq!(profile.id.as_str(), "admin-1");
    }

    #[test]
    fn admin_flag_must_be_boolean_true() {
        assert!(!parse(r#"{"fields":{"admin":{"booleanValue":false}}}"#).is_admin);
        assert!(!parse(r#"{"fields":{"admin":{"stringValue":"true"}}}"#).is_admin);
        assert!(!parse(r#"{"fields":{}}"#).is_admin);
        assert!(!parse(r#"{}"#).is_admin);
    }
}
