use thiserror::Error;
use userdel_entities::account::AccountId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("the identity does not exist")]
    NotFound,
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

/// The authentication backend that owns the credentials of an account.
pub trait IdentityGateway {
    /// Removes the identity record of `id`.
    ///
    /// Must report [`Error::NotFound`] if there is nothing to remove.
    fn delete_identity(&self, id: &AccountId) -> Result<(), Error>;
}
