use super::*;

const ENTITIES: &str = "POIs";

/// A relation filter as requested by the client.
struct Relation<'a> {
    filter: RelationFilter,
    entity: &'static str,
    id: &'a str,
}

impl<'a> Relation<'a> {
    fn parse(
        entity: &'static str,
        id: &'a str,
        filter: impl FnOnce(Id) -> RelationFilter,
    ) -> result::Result<Self, ApiError> {
        let filter_id = usecases::parse_id(id).map_err(ApiError::lookup(entity, id))?;
        Ok(Self {
            filter: filter(filter_id),
            entity,
            id,
        })
    }
}

fn lookup_pois(
    connections: &sqlite::Connections,
    cfg: &Cfg,
    query: &LookupQuery,
    relation: Option<Relation>,
) -> Result<json::PoiList> {
    let params = usecases::resolve_lookup_params(&query.raw_params(), cfg.default_proximity);
    let filter = relation.as_ref().map(|r| r.filter);
    let pois = {
        let db = connections.shared()?;
        usecases::query_pois(&db, &params, filter)
    }
    .map_err(|err| match relation {
        Some(Relation { entity, id, .. }) => ApiError::lookup(entity, id)(err),
        None => err.into(),
    })?;
    let error = envelope::list_error(params.advisory, pois.is_empty(), ENTITIES, filter);
    let pois = pois
        .into_iter()
        .map(|poi| to_json::poi(poi, &cfg.media_url))
        .collect();
    Ok(Json(json::PoiList { error, pois }))
}

#[get("/pois?<query..>")]
pub fn get_pois(
    connections: sqlite::Connections,
    cfg: &State<Cfg>,
    query: LookupQuery,
) -> Result<json::PoiList> {
    lookup_pois(&connections, cfg, &query, None)
}

#[get("/pois/<id>")]
pub fn get_poi(
    connections: sqlite::Connections,
    cfg: &State<Cfg>,
    id: &str,
) -> Result<json::Detail<json::Poi>> {
    let poi = {
        let db = connections.shared()?;
        usecases::get_poi(&db, id)
    }
    .map_err(ApiError::lookup("POI", id))?;
    Ok(Json(envelope::detail(to_json::poi(poi, &cfg.media_url))))
}

#[get("/pois/categories/<id>?<query..>")]
pub fn get_pois_of_category(
    connections: sqlite::Connections,
    cfg: &State<Cfg>,
    id: &str,
    query: LookupQuery,
) -> Result<json::PoiList> {
    let relation = Relation::parse("Category", id, RelationFilter::Category)?;
    lookup_pois(&connections, cfg, &query, Some(relation))
}

#[get("/pois/products/<id>?<query..>")]
pub fn get_pois_of_product(
    connections: sqlite::Connections,
    cfg: &State<Cfg>,
    id: &str,
    query: LookupQuery,
) -> Result<json::PoiList> {
    let relation = Relation::parse("Product", id, RelationFilter::Product)?;
    lookup_pois(&connections, cfg, &query, Some(relation))
}
