use super::*;

impl ProductRepo for DbReadOnly<'_> {
    fn get_product(&self, id: Id) -> Result<Product> {
        get_product(&mut self.conn.borrow_mut(), id)
    }
    fn all_products(&self, limit: Option<usize>) -> Result<Vec<Product>> {
        all_products(&mut self.conn.borrow_mut(), limit)
    }
    fn products_of_poi(&self, poi_id: Id, limit: Option<usize>) -> Result<Vec<Product>> {
        products_of_poi(&mut self.conn.borrow_mut(), poi_id, limit)
    }
}

impl ProductRepo for DbReadWrite<'_> {
    fn get_product(&self, id: Id) -> Result<Product> {
        get_product(&mut self.conn.borrow_mut(), id)
    }
    fn all_products(&self, limit: Option<usize>) -> Result<Vec<Product>> {
        all_products(&mut self.conn.borrow_mut(), limit)
    }
    fn products_of_poi(&self, poi_id: Id, limit: Option<usize>) -> Result<Vec<Product>> {
        products_of_poi(&mut self.conn.borrow_mut(), poi_id, limit)
    }
}

fn load_preparations(conn: &mut SqliteConnection, product_id: i64) -> Result<Vec<Preparation>> {
    use schema::{preparation::dsl, product_preparation::dsl as rel_dsl};
    Ok(schema::preparation::table
        .inner_join(schema::product_preparation::table)
        .filter(rel_dsl::product_id.eq(product_id))
        .select(schema::preparation::all_columns)
        .order_by(dsl::id)
        .load::<models::Preparation>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn load_product(conn: &mut SqliteConnection, product: models::Product) -> Result<Product> {
    let models::Product {
        id,
        name,
        variety,
        alt_name,
        description,
        origin,
        season,
        available,
        market_price,
        link,
        created_at,
        modified_at,
    } = product;
    let preparations = load_preparations(conn, id)?;
    Ok(Product {
        id: id.into(),
        name,
        variety,
        alt_name,
        description,
        origin,
        season,
        available,
        market_price,
        link,
        created: Timestamp::from_milliseconds(created_at),
        modified: Timestamp::from_milliseconds(modified_at),
        preparations,
    })
}

fn load_products(
    conn: &mut SqliteConnection,
    rows: Vec<models::Product>,
) -> Result<Vec<Product>> {
    let mut results = Vec::with_capacity(rows.len());
    for row in rows {
        results.push(load_product(conn, row)?);
    }
    Ok(results)
}

fn get_product(conn: &mut SqliteConnection, id: Id) -> Result<Product> {
    use schema::product::dsl;
    let product = schema::product::table
        .filter(dsl::id.eq(id.value()))
        .first::<models::Product>(conn)
        .map_err(from_diesel_err)?;
    load_product(conn, product)
}

fn all_products(conn: &mut SqliteConnection, limit: Option<usize>) -> Result<Vec<Product>> {
    use schema::product::dsl;
    let mut query = schema::product::table.order_by(dsl::id).into_boxed();
    if let Some(limit) = limit {
        query = query.limit(limit_as_i64(limit));
    }
    let rows = query
        .load::<models::Product>(conn)
        .map_err(from_diesel_err)?;
    load_products(conn, rows)
}

fn products_of_poi(
    conn: &mut SqliteConnection,
    poi_id: Id,
    limit: Option<usize>,
) -> Result<Vec<Product>> {
    use schema::{
        poi_product::dsl as rel_dsl, product::dsl, product_preparation::dsl as pp_dsl,
    };
    let sold = schema::product_preparation::table
        .inner_join(schema::poi_product::table)
        .filter(rel_dsl::poi_id.eq(poi_id.value()))
        .select(pp_dsl::product_id);
    let mut query = schema::product::table
        .filter(dsl::id.eq_any(sold))
        .order_by(dsl::id)
        .into_boxed();
    if let Some(limit) = limit {
        query = query.limit(limit_as_i64(limit));
    }
    let rows = query
        .load::<models::Product>(conn)
        .map_err(from_diesel_err)?;
    load_products(conn, rows)
}
