pub mod prelude {
    pub use crate::{
        entities::*,
        gateways::identity::{self, IdentityGateway},
        repositories::{self, ProfileRepo},
        usecases,
    };
    pub use userdel_entities::builders::Builder;

    use anyhow::anyhow;
    use std::{cell::RefCell, collections::HashMap};

    pub fn admin(id: &str) -> Profile {
        Profile::build().id(id).admin().finish()
    }

    pub fn user(id: &str) -> Profile {
        Profile::build().id(id).finish()
    }

    #[derive(Default)]
    pub struct MockProfiles {
        profiles: HashMap<AccountId, Profile>,
        failure: Option<&'static str>,
        pub lookups: RefCell<Vec<AccountId>>,
    }

    impl MockProfiles {
        pub fn with(profiles: Vec<Profile>) -> Self {
            let profiles = profiles.into_iter().map(|p| (p.id.clone(), p)).collect();
            Self {
                profiles,
                ..Default::default()
            }
        }

        pub fn failing(msg: &'static str) -> Self {
            Self {
                failure: Some(msg),
                ..Default::default()
            }
        }
    }

    impl ProfileRepo for MockProfiles {
        fn try_get_profile(
            &self,
            id: &AccountId,
        ) -> Result<Option<Profile>, repositories::Error> {
            self.lookups.borrow_mut().push(id.clone());
            if let Some(msg) = self.failure {
                return Err(anyhow!(msg).into());
            }
            Ok(self.profiles.get(id).cloned())
        }
    }

    #[derive(Default)]
    pub struct MockIdentities {
        existing: RefCell<Vec<AccountId>>,
        failure: Option<&'static str>,
        pub deletions: RefCell<Vec<AccountId>>,
    }

    impl MockIdentities {
        pub fn with(ids: &[&str]) -> Self {
            Self {
                existing: RefCell::new(ids.iter().map(|id| AccountId::from(*id)).collect()),
                ..Default::default()
            }
        }

        pub fn failing(msg: &'static str) -> Self {
            Self {
                failure: Some(msg),
                ..Default::default()
            }
        }

        pub fn contains(&self, id: &str) -> bool {
            self.existing.borrow().iter().any(|x| x.as_str() == id)
        }
    }

    impl IdentityGateway for MockIdentities {
        fn delete_identity(&self, id: &AccountId) -> Result<(), identity::Error> {
            self.deletions.borrow_mut().push(id.clone());
            if let Some(msg) = self.failure {
                return Err(anyhow!(msg).into());
            }
            let mut existing = self.existing.borrow_mut();
            let len = existing.len();
            existing.retain(|x| x != id);
            if existing.len() == len {
                return Err(identity::Error::NotFound);
            }
            Ok(())
        }
    }
}
