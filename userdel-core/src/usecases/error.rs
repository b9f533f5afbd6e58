use crate::{authorization, gateways::identity, repositories};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};
use thiserror::Error;

/// Caller-visible failure classification.
///
/// The string representations are stable identifiers that
/// clients are expected to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum FailureKind {
    Unauthenticated,
    InvalidArgument,
    PermissionDenied,
    NotFound,
    Internal,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("User must be authenticated to delete users")]
    Unauthenticated,
    #[error("User ID (uid) is required")]
    MissingTargetId,
    #[error("Caller account not found")]
    CallerNotFound,
    #[error("Only admins can delete users")]
    NotAdmin,
    #[error("User not found in Authentication")]
    UserNotFound,
    #[error("An error occurred while deleting the user: {0}")]
    Repo(#[from] repositories::Error),
    #[error("An error occurred while deleting the user: {0}")]
    Identity(#[source] anyhow::Error),
}

impl Error {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Unauthenticated => FailureKind::Unauthenticated,
            Self::MissingTargetId => FailureKind::InvalidArgument,
            Self::CallerNotFound | Self::NotAdmin => FailureKind::PermissionDenied,
            Self::UserNotFound => FailureKind::NotFound,
            Self::Repo(_) | Self::Identity(_) => FailureKind::Internal,
        }
    }
}

impl From<identity::Error> for Error {
    fn from(err: identity::Error) -> Self {
        match err {
            identity::Error::NotFound => Self::UserNotFound,
            identity::Error::Provider(err) => Self::Identity(err),
        }
    }
}

impl From<authorization::profile::Error> for Error {
    fn from(err: authorization::profile::Error) -> Self {
        match err {
            authorization::profile::Error::NotAdmin => Self::NotAdmin,
        }
    }
}
