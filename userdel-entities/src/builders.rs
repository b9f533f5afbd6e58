use crate::account::{AccountId, Profile};

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

#[derive(Debug)]
pub struct ProfileBuild {
    profile: Profile,
}

impl ProfileBuild {
    pub fn id(mut self, id: &str) -> Self {
        self.profile.id = id.into();
        self
    }
    pub fn admin(mut self) -> Self {
        self.profile.is_admin = true;
        self
    }
    pub fn finish(self) -> Profile {
        self.profile
    }
}

impl Builder for Profile {
    type Build = ProfileBuild;
    fn build() -> Self::Build {
        ProfileBuild {
            profile: Profile {
                id: AccountId::default(),
                is_admin: false,
            },
        }
    }
}
