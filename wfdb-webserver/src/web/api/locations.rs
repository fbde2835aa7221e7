use super::*;

/// The distinct cities of all POIs.
///
/// An empty list is not reported as an advisory.
#[get("/locations")]
pub fn get_locations(connections: sqlite::Connections) -> Result<json::LocationList> {
    let cities = {
        let db = connections.shared()?;
        usecases::list_locations(&db)?
    };
    Ok(Json(json::LocationList {
        error: envelope::no_error(),
        locations: to_json::locations(cities),
    }))
}
