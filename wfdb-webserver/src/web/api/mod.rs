use std::result;

use rocket::{
    self, get,
    http::Status,
    response::{self, Responder},
    routes,
    serde::json::Json,
    FromForm, Route, State,
};

use crate::{
    adapters::json::{self, to_json},
    core::{prelude::*, usecases},
    web::{sqlite, Cfg},
};

mod envelope;
mod error;
mod locations;
mod pois;
mod products;
mod reference;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   POIs   --- //
        pois::get_pois,
        pois::get_poi,
        pois::get_pois_of_category,
        pois::get_pois_of_product,
        // ---   products   --- //
        products::get_products,
        products::get_product,
        products::get_products_of_poi,
        // ---   reference data   --- //
        reference::get_hazards,
        reference::get_categories,
        locations::get_locations,
    ]
}

/// The raw lookup parameters of a request.
///
/// Every value is accepted here and validated later on
/// to report malformed values instead of rejecting them.
#[derive(FromForm, Default)]
pub struct LookupQuery {
    lat: Option<String>,
    lng: Option<String>,
    proximity: Option<String>,
    limit: Option<String>,
}

impl LookupQuery {
    fn raw_params(&self) -> usecases::RawLookupParams<'_> {
        usecases::RawLookupParams {
            lat: self.lat.as_deref(),
            lng: self.lng.as_deref(),
            proximity: self.proximity.as_deref(),
            limit: self.limit.as_deref(),
        }
    }
}

fn json_error_response<'r, 'o: 'r>(
    req: &'r rocket::Request<'_>,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = json::ErrorResponse {
        error: json::Error {
            status: true,
            name: Some(status.reason_lossy().to_owned()),
            text: Some("The request could not be processed.".to_owned()),
            level: Some(json::Level::Error),
            debug: None,
        },
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
