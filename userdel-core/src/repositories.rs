// Read access to the external stores the use cases depend on.
// Implementations live in `userdel-gateways`.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait ProfileRepo {
    /// Point lookup of the profile document of an account.
    ///
    /// Returns `Ok(None)` if no document exists for `id`.
    fn try_get_profile(&self, id: &AccountId) -> Result<Option<Profile>>;
}
