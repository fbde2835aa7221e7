use super::*;

impl HazardRepo for DbReadOnly<'_> {
    fn all_hazards(&self, limit: Option<usize>) -> Result<Vec<Hazard>> {
        all_hazards(&mut self.conn.borrow_mut(), limit)
    }
}

impl HazardRepo for DbReadWrite<'_> {
    fn all_hazards(&self, limit: Option<usize>) -> Result<Vec<Hazard>> {
        all_hazards(&mut self.conn.borrow_mut(), limit)
    }
}

fn all_hazards(conn: &mut SqliteConnection, limit: Option<usize>) -> Result<Vec<Hazard>> {
    use schema::hazard::dsl;
    let mut query = schema::hazard::table.order_by(dsl::id).into_boxed();
    if let Some(limit) = limit {
        query = query.limit(limit_as_i64(limit));
    }
    Ok(query
        .load::<models::Hazard>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
