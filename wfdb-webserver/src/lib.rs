//! # wfdb-webserver
//!
//! JSON API of the waterfront POI directory.

#[macro_use]
extern crate log;

use wfdb_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

pub async fn run(connections: Connections, enable_cors: bool, cfg: Cfg) {
    web::run(connections.into(), enable_cors, cfg).await;
}
