use std::sync::Arc;

use rocket::{
    request::{FromRequest, Outcome, Request},
    State,
};
use userdel_core::{
    entities::InvocationContext, gateways::identity::IdentityGateway, repositories::ProfileRepo,
};

use crate::web::jwt;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// The verified identity of the caller.
///
/// This guard never fails: an invocation without a valid
/// credential results in an anonymous context that the
/// use case rejects on its own terms.
#[derive(Debug)]
pub struct Caller(pub InvocationContext);

impl Caller {
    fn bearer_tokens_from_header<'a>(request: &'a Request<'_>) -> Vec<&'a str> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .collect()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Caller {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        let caller_id = match request.guard::<&State<jwt::JwtState>>().await.succeeded() {
            Some(jwt_state) => bearer_tokens.iter().find_map(|token| {
                jwt_state
                    .validate_token_and_get_caller(token)
                    .map_err(|err| debug!("Rejected bearer token: {err}"))
                    .ok()
            }),
            None => {
                warn!("No JWT state available");
                None
            }
        };
        Outcome::Success(Caller(InvocationContext { caller_id }))
    }
}

pub struct Profiles(pub Arc<dyn ProfileRepo + Send + Sync>);

pub struct Identities(pub Arc<dyn IdentityGateway + Send + Sync>);

pub struct Version(pub &'static str);
