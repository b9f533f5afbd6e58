use jfs::Store;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    io::{self, ErrorKind},
    path::Path,
};
use userdel_core::{
    entities::{AccountId, Profile},
    repositories::{self, ProfileRepo},
};

use crate::json_file::{is_valid_key, open_store};

/// Profile documents stored as `<dir>/<account-id>.json`.
///
/// Meant for local operation and testing.
pub struct JsonFileProfileStore {
    json_store: Store,
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonProfile {
    // Only a literal `true` grants the privilege.
    #[serde(default)]
    admin: Value,
}

impl JsonProfile {
    fn is_admin(&self) -> bool {
        self.admin == Value::Bool(true)
    }
}

impl JsonFileProfileStore {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = open_store(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }

    pub fn save_profile(&self, profile: &Profile) -> io::Result<()> {
        if !is_valid_key(profile.id.as_str()) {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("Invalid account id '{}'", profile.id),
            ));
        }
        let json = JsonProfile {
            admin: Value::Bool(profile.is_admin),
        };
        self.json_store.save_with_id(&json, profile.id.as_str())?;
        Ok(())
    }
}

impl ProfileRepo for JsonFileProfileStore {
    fn try_get_profile(&self, id: &AccountId) -> Result<Option<Profile>, repositories::Error> {
        if !is_valid_key(id.as_str()) {
            return Ok(None);
        }
        match self.json_store.get::<JsonProfile>(id.as_str()) {
            Ok(json) => Ok(Some(Profile {
                id: id.clone(),
                is_admin: json.is_admin(),
            })),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                warn!("Unable to read profile of {id}: {err}");
                Err(err.into())
            }
        }
    }
}
