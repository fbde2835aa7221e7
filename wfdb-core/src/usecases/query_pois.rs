use super::{prelude::*, LookupParams};

/// Translates resolved lookup parameters into a datastore query.
pub fn plan_poi_query(params: &LookupParams, relation: Option<RelationFilter>) -> PoiQuery {
    PoiQuery {
        proximity: params.proximity(),
        relation,
        limit: params.limit,
    }
}

/// Selects POIs around the requested point, optionally restricted
/// to those related to a category or product.
///
/// An unknown relation is reported as not found instead of
/// an empty result.
pub fn query_pois<R>(
    repo: &R,
    params: &LookupParams,
    relation: Option<RelationFilter>,
) -> Result<Vec<Poi>>
where
    R: PoiRepo + CategoryRepo + ProductRepo,
{
    match relation {
        Some(RelationFilter::Category(id)) => {
            repo.get_category(id)?;
        }
        Some(RelationFilter::Product(id)) => {
            repo.get_product(id)?;
        }
        None => {}
    }
    let query = plan_poi_query(params, relation);
    log::debug!("Querying POIs: {query:?}");
    Ok(repo.query_pois(&query)?)
}
