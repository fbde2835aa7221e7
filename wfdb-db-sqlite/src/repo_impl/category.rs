use super::*;

impl CategoryRepo for DbReadOnly<'_> {
    fn get_category(&self, id: Id) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
    fn all_categories(&self, limit: Option<usize>) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut(), limit)
    }
}

impl CategoryRepo for DbReadWrite<'_> {
    fn get_category(&self, id: Id) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
    fn all_categories(&self, limit: Option<usize>) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut(), limit)
    }
}

fn get_category(conn: &mut SqliteConnection, id: Id) -> Result<Category> {
    use schema::category::dsl;
    Ok(schema::category::table
        .filter(dsl::id.eq(id.value()))
        .first::<models::Category>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_categories(conn: &mut SqliteConnection, limit: Option<usize>) -> Result<Vec<Category>> {
    use schema::category::dsl;
    let mut query = schema::category::table.order_by(dsl::id).into_boxed();
    if let Some(limit) = limit {
        query = query.limit(limit_as_i64(limit));
    }
    Ok(query
        .load::<models::Category>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
