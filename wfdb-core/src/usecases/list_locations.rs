use itertools::Itertools;

use super::prelude::*;

/// The distinct cities of all POIs in alphabetical order.
pub fn list_locations<R: PoiRepo>(repo: &R) -> Result<Vec<String>> {
    let cities = repo
        .all_poi_cities()?
        .into_iter()
        .map(|city| city.trim().to_owned())
        .filter(|city| !city.is_empty())
        .sorted()
        .dedup()
        .collect();
    Ok(cities)
}
