mod authorize;
mod delete_user;
mod error;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*,
    delete_user::*,
    error::{Error, FailureKind},
};

mod prelude {
    pub use super::error::{Error, FailureKind};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::identity::IdentityGateway, repositories::*};
}
