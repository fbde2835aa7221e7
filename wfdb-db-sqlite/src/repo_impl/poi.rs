use super::*;

impl PoiRepo for DbReadOnly<'_> {
    fn get_poi(&self, id: Id) -> Result<Poi> {
        get_poi(&mut self.conn.borrow_mut(), id)
    }
    fn query_pois(&self, query: &PoiQuery) -> Result<Vec<Poi>> {
        query_pois(&mut self.conn.borrow_mut(), query)
    }
    fn all_poi_cities(&self) -> Result<Vec<String>> {
        all_poi_cities(&mut self.conn.borrow_mut())
    }
}

impl PoiRepo for DbReadWrite<'_> {
    fn get_poi(&self, id: Id) -> Result<Poi> {
        get_poi(&mut self.conn.borrow_mut(), id)
    }
    fn query_pois(&self, query: &PoiQuery) -> Result<Vec<Poi>> {
        query_pois(&mut self.conn.borrow_mut(), query)
    }
    fn all_poi_cities(&self) -> Result<Vec<String>> {
        all_poi_cities(&mut self.conn.borrow_mut())
    }
}

fn load_poi_hazards(conn: &mut SqliteConnection, poi_id: i64) -> Result<Vec<Hazard>> {
    use schema::{hazard::dsl, poi_hazard::dsl as rel_dsl};
    Ok(schema::hazard::table
        .inner_join(schema::poi_hazard::table)
        .filter(rel_dsl::poi_id.eq(poi_id))
        .select(schema::hazard::all_columns)
        .order_by(dsl::id)
        .load::<models::Hazard>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn load_poi_categories(conn: &mut SqliteConnection, poi_id: i64) -> Result<Vec<Category>> {
    use schema::{category::dsl, poi_category::dsl as rel_dsl};
    Ok(schema::category::table
        .inner_join(schema::poi_category::table)
        .filter(rel_dsl::poi_id.eq(poi_id))
        .select(schema::category::all_columns)
        .order_by(dsl::id)
        .load::<models::Category>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn load_poi_images(conn: &mut SqliteConnection, poi_id: i64) -> Result<Vec<Image>> {
    use schema::image::dsl;
    Ok(schema::image::table
        .filter(dsl::poi_id.eq(poi_id))
        .order_by(dsl::id)
        .load::<models::Image>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn load_poi_videos(conn: &mut SqliteConnection, poi_id: i64) -> Result<Vec<Video>> {
    use schema::video::dsl;
    Ok(schema::video::table
        .filter(dsl::poi_id.eq(poi_id))
        .order_by(dsl::id)
        .load::<models::Video>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn load_poi_products(conn: &mut SqliteConnection, poi_id: i64) -> Result<Vec<PoiProduct>> {
    use schema::{
        poi_product::dsl as rel_dsl, preparation::dsl as prep_dsl, product::dsl as prod_dsl,
        product_preparation::dsl,
    };
    Ok(schema::product_preparation::table
        .inner_join(schema::product::table)
        .inner_join(schema::preparation::table)
        .inner_join(schema::poi_product::table)
        .filter(rel_dsl::poi_id.eq(poi_id))
        .select((
            dsl::id,
            prod_dsl::id,
            prod_dsl::name,
            prep_dsl::id,
            prep_dsl::name,
            rel_dsl::price,
            rel_dsl::available,
        ))
        .order_by(dsl::id)
        .load::<models::JoinedPoiProduct>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

// Relations are loaded per POI and never cached.
fn load_poi(conn: &mut SqliteConnection, poi: models::Poi) -> Result<Poi> {
    let models::Poi {
        id,
        name,
        alt_name,
        description,
        history,
        facts,
        lat,
        lng,
        street,
        city,
        state,
        zip,
        location_description,
        contact_name,
        website,
        email,
        phone,
        story_id,
        status,
        hours,
        created_at,
        modified_at,
    } = poi;

    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).unwrap_or_else(|err| {
        log::warn!("Loading POI {id} with an invalid position: {err}");
        MapPoint::from_lat_lng_deg(lat.clamp(-90.0, 90.0), lng.clamp(-180.0, 180.0))
    });

    let hazards = load_poi_hazards(conn, id)?;
    let categories = load_poi_categories(conn, id)?;
    let images = load_poi_images(conn, id)?;
    let videos = load_poi_videos(conn, id)?;
    let products = load_poi_products(conn, id)?;

    Ok(Poi {
        id: id.into(),
        name,
        alt_name,
        description,
        history,
        facts,
        pos,
        address: Address {
            street,
            city,
            state,
            zip,
            location_description,
        },
        contact: Contact {
            name: contact_name,
            website,
            email,
            phone,
        },
        story: story_id.map(Into::into),
        status,
        hours,
        created: Timestamp::from_milliseconds(created_at),
        modified: Timestamp::from_milliseconds(modified_at),
        hazards,
        categories,
        images,
        videos,
        products,
    })
}

fn get_poi(conn: &mut SqliteConnection, id: Id) -> Result<Poi> {
    use schema::poi::dsl;
    let poi = schema::poi::table
        .filter(dsl::id.eq(id.value()))
        .first::<models::Poi>(conn)
        .map_err(from_diesel_err)?;
    load_poi(conn, poi)
}

fn query_pois(conn: &mut SqliteConnection, query: &PoiQuery) -> Result<Vec<Poi>> {
    use schema::poi::dsl;
    let PoiQuery {
        proximity,
        relation,
        limit,
    } = query;

    let mut select = schema::poi::table.into_boxed();

    match relation {
        Some(RelationFilter::Category(category_id)) => {
            use schema::poi_category::dsl as rel_dsl;
            let related = schema::poi_category::table
                .filter(rel_dsl::category_id.eq(category_id.value()))
                .select(rel_dsl::poi_id);
            select = select.filter(dsl::id.eq_any(related));
        }
        Some(RelationFilter::Product(product_id)) => {
            use schema::{poi_product::dsl as rel_dsl, product_preparation::dsl as pp_dsl};
            let related = schema::poi_product::table
                .inner_join(schema::product_preparation::table)
                .filter(pp_dsl::product_id.eq(product_id.value()))
                .select(rel_dsl::poi_id);
            select = select.filter(dsl::id.eq_any(related));
        }
        None => {}
    }

    let rows = if let Some(proximity) = proximity {
        // The bounding box only prefilters the candidates,
        // the exact distance is checked afterwards.
        let bbox = proximity.enclosing_bbox();
        let (south, west) = bbox.southwest().to_lat_lng_deg();
        let (north, east) = bbox.northeast().to_lat_lng_deg();
        select = select.filter(dsl::lat.between(south, north));
        if bbox.wraps_around() {
            select = select.filter(dsl::lng.ge(west).or(dsl::lng.le(east)));
        } else {
            select = select.filter(dsl::lng.between(west, east));
        }
        let candidates = select
            .load::<models::Poi>(conn)
            .map_err(from_diesel_err)?;
        log::debug!(
            "Found {} candidate(s) within {bbox} around {}",
            candidates.len(),
            proximity.center
        );
        select_nearest(candidates, proximity, *limit)
    } else {
        select = select.order_by(dsl::id);
        if let Some(limit) = limit {
            select = select.limit(limit_as_i64(*limit));
        }
        select
            .load::<models::Poi>(conn)
            .map_err(from_diesel_err)?
    };

    let mut results = Vec::with_capacity(rows.len());
    for row in rows {
        results.push(load_poi(conn, row)?);
    }
    Ok(results)
}

fn all_poi_cities(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    use schema::poi::dsl;
    schema::poi::table
        .select(dsl::city)
        .load::<String>(conn)
        .map_err(from_diesel_err)
}
