//! Hazards and categories that are referenced by POIs.

use super::*;

#[get("/hazards?<limit>")]
pub fn get_hazards(
    connections: sqlite::Connections,
    limit: Option<&str>,
) -> Result<json::HazardList> {
    let (limit, advisory) = usecases::resolve_limit(limit);
    let hazards = {
        let db = connections.shared()?;
        usecases::list_hazards(&db, limit)?
    };
    let error = envelope::list_error(advisory, hazards.is_empty(), "Hazards", None);
    Ok(Json(json::HazardList {
        error,
        hazards: hazards.into_iter().map(Into::into).collect(),
    }))
}

#[get("/categories?<limit>")]
pub fn get_categories(
    connections: sqlite::Connections,
    limit: Option<&str>,
) -> Result<json::CategoryList> {
    let (limit, advisory) = usecases::resolve_limit(limit);
    let categories = {
        let db = connections.shared()?;
        usecases::list_categories(&db, limit)?
    };
    let error = envelope::list_error(advisory, categories.is_empty(), "Categories", None);
    Ok(Json(json::CategoryList {
        error,
        categories: categories.into_iter().map(Into::into).collect(),
    }))
}
