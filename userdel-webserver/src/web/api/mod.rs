use std::result;

use rocket::{
    self, get,
    post,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::guards::*;
use crate::adapters::json::{self, from_json, to_json};
use userdel_core::usecases;

mod error;
mod users;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_delete_user,
        // ---   server   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r>(
    req: &'r rocket::Request<'_>,
    status: json::ErrorStatus,
    message: String,
) -> response::Result<'o> {
    let http_status = error::http_status(status);
    let boundary_error = json::CallableError {
        error: json::Error { status, message },
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(http_status);
        res
    })
}
