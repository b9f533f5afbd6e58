use super::json_error_response;
use crate::adapters::json::{to_json, ErrorStatus};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;
use userdel_core::usecases::FailureKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    Failure { kind: FailureKind, message: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub fn http_status(status: ErrorStatus) -> Status {
    match status {
        ErrorStatus::Unauthenticated => Status::Unauthorized,
        ErrorStatus::InvalidArgument => Status::BadRequest,
        ErrorStatus::PermissionDenied => Status::Forbidden,
        ErrorStatus::NotFound => Status::NotFound,
        ErrorStatus::Internal => Status::InternalServerError,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'o> {
        match self {
            Error::Failure { kind, message } => {
                json_error_response(req, to_json::error_status(kind), message)
            }
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, ErrorStatus::Internal, err.to_string())
            }
        }
    }
}
