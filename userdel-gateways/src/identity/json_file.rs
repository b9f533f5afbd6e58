use anyhow::anyhow;
use jfs::Store;
use serde::{Deserialize, Serialize};
use std::{
    io::{self, ErrorKind},
    path::Path,
};
use userdel_core::{
    entities::AccountId,
    gateways::identity::{Error, IdentityGateway},
};

use crate::json_file::{is_valid_key, open_store};

/// Identity records stored as `<dir>/<account-id>.json`.
///
/// A dummy identity provider for local operation and testing.
pub struct JsonFileIdentityStore {
    json_store: Store,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct JsonIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl JsonFileIdentityStore {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = open_store(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }

    pub fn create_identity(&self, id: &AccountId, email: Option<&str>) -> io::Result<()> {
        if !is_valid_key(id.as_str()) {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("Invalid account id '{id}'"),
            ));
        }
        let identity = JsonIdentity {
            email: email.map(ToOwned::to_owned),
        };
        self.json_store.save_with_id(&identity, id.as_str())?;
        Ok(())
    }

    pub fn contains(&self, id: &AccountId) -> bool {
        is_valid_key(id.as_str()) && self.json_store.get::<JsonIdentity>(id.as_str()).is_ok()
    }
}

impl IdentityGateway for JsonFileIdentityStore {
    fn delete_identity(&self, id: &AccountId) -> Result<(), Error> {
        if !is_valid_key(id.as_str()) {
            return Err(Error::NotFound);
        }
        match self.json_store.delete(id.as_str()) {
            Ok(()) => {
                debug!("Removed identity file of {id}");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Err(Error::NotFound),
            Err(err) => Err(Error::Provider(anyhow!(
                "Unable to remove identity {id}: {err}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::TempDir;

    #[test]
    fn delete_existing_identity_once() {
        let dir = TempDir::new();
        let store = JsonFileIdentityStore::try_new(dir.path()).unwrap();
        let id = AccountId::from("user-42");
        store.create_identity(&id, Some("user42@example.com")).unwrap();
        assert!(store.contains(&id));

        assert!(store.delete_identity(&id).is_ok());
        assert!(!store.contains(&id));
        assert!(matches!(store.delete_identity(&id), Err(Error::NotFound)));
    }

    #[test]
    fn unknown_and_path_like_ids_are_not_found() {
        let dir = TempDir::new();
        let store = JsonFileIdentityStore::try_new(dir.path()).unwrap();
        assert!(matches!(
            store.delete_identity(&"nobody".into()),
            Err(Error::NotFound)
        ));
        assert!(matches!(
            store.delete_identity(&"../nobody".into()),
            Err(Error::NotFound)
        ));
    }
}
