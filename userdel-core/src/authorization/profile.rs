use userdel_entities::account::Profile;

use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("admin privilege required")]
    NotAdmin,
}

pub type Result<T> = StdResult<T, Error>;

pub fn authorize_admin(profile: &Profile) -> Result<()> {
    if !profile.is_admin {
        return Err(Error::NotAdmin);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdel_entities::builders::Builder;

    #[test]
    fn only_admins_are_authorized() {
        let admin = Profile::build().id("admin-1").admin().finish();
        let user = Profile::build().id("user-2").finish();
        assert!(authorize_admin(&admin).is_ok());
        assert!(authorize_admin(&user).is_err());
    }
}
