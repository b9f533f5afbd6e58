use std::sync::Arc;

use rocket::{config::Config as RocketCfg, Rocket, Route};
use userdel_core::{gateways::identity::IdentityGateway, repositories::ProfileRepo};

pub mod api;
mod guards;
pub mod jwt;


#[derive(Debug, Clone, Default)]
pub struct Cfg {
    pub enable_cors: bool,
}

/// The external capabilities every invocation is served with.
#[derive(Clone)]
pub struct Gateways {
    pub profiles: Arc<dyn ProfileRepo + Send + Sync>,
    pub identities: Arc<dyn IdentityGateway + Send + Sync>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    gateways: Gateways,
    jwt_state: jwt::JwtState,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;
    let Gateways {
        profiles,
        identities,
    } = gateways;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(guards::Profiles(profiles))
        .manage(guards::Identities(identities))
        .manage(jwt_state)
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(cfg: Cfg, gateways: Gateways, jwt_state: jwt::JwtState, version: &'static str) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        version,
    };
    let instance = rocket_instance(options, gateways, jwt_state);
    info!("Initialization finished");
    let server_task = if cfg.enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
