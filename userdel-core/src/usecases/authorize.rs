use super::prelude::*;
use crate::authorization::profile::authorize_admin;

/// Loads the profile of `id` and checks that it carries admin privilege.
pub fn authorize_admin_by_id<R>(repo: &R, id: &AccountId) -> Result<Profile>
where
    R: ProfileRepo + ?Sized,
{
    let profile = repo.try_get_profile(id)?.ok_or(Error::CallerNotFound)?;
    authorize_admin(&profile)?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn unknown_account_is_not_found() {
        let profiles = MockProfiles::default();
        let err = usecases::authorize_admin_by_id(&profiles, &"nobody".into()).unwrap_err();
        assert!(matches!(err, usecases::Error::CallerNotFound));
    }

    #[test]
    fn admin_profile_is_returned() {
        let profiles = MockProfiles::with(vec![admin("admin-1"), user("user-2")]);
        let profile = usecases::authorize_admin_by_id(&profiles, &"admin-1".into()).unwrap();
        assert!(profile.is_admin);
        let err = usecases::authorize_admin_by_id(&profiles, &"user-2".into()).unwrap_err();
        assert!(matches!(err, usecases::Error::NotAdmin));
    }

    #[test]
    fn store_failures_are_internal() {
        let profiles = MockProfiles::failing("connection reset");
        let err = usecases::authorize_admin_by_id(&profiles, &"admin-1".into()).unwrap_err();
        assert_eq!(err.kind(), usecases::FailureKind::Internal);
    }
}
