use rocket::{config::Config as RocketCfg, Rocket, Route};

use crate::core::usecases::Miles;

pub mod api;
mod sqlite;


/// Settings that affect the content of responses.
#[derive(Debug, Clone)]
pub struct Cfg {
    /// Search radius if none or a malformed one is requested
    pub default_proximity: Miles,
    /// Prefix of all image links
    pub media_url: String,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            default_proximity: 20,
            media_url: "/media/".into(),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    info!(
        "Default proximity: {} miles, media URL: {}",
        cfg.default_proximity, cfg.media_url
    );

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(cfg);
    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/1", api::routes())]
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, cfg: Cfg) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                log::error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
