use super::{parse_id, prelude::*};

pub fn get_product<R: ProductRepo>(repo: &R, id: &str) -> Result<Product> {
    let id = parse_id(id)?;
    Ok(repo.get_product(id)?)
}

pub fn list_products<R: ProductRepo>(repo: &R, limit: Option<usize>) -> Result<Vec<Product>> {
    Ok(repo.all_products(limit)?)
}

/// All products that are sold at the given POI.
pub fn products_of_poi<R>(repo: &R, poi_id: &str, limit: Option<usize>) -> Result<Vec<Product>>
where
    R: PoiRepo + ProductRepo,
{
    let poi_id = parse_id(poi_id)?;
    // Distinguish an unknown POI from a POI without products
    repo.get_poi(poi_id)?;
    Ok(repo.products_of_poi(poi_id, limit)?)
}
