use super::*;

const ENTITIES: &str = "Products";

fn product_list(limit_advisory: Option<Advisory>, products: Vec<Product>) -> json::ProductList {
    let error = envelope::list_error(limit_advisory, products.is_empty(), ENTITIES, None);
    json::ProductList {
        error,
        products: products.into_iter().map(Into::into).collect(),
    }
}

#[get("/products?<limit>")]
pub fn get_products(
    connections: sqlite::Connections,
    limit: Option<&str>,
) -> Result<json::ProductList> {
    let (limit, advisory) = usecases::resolve_limit(limit);
    let products = {
        let db = connections.shared()?;
        usecases::list_products(&db, limit)?
    };
    Ok(Json(product_list(advisory, products)))
}

#[get("/products/<id>")]
pub fn get_product(
    connections: sqlite::Connections,
    id: &str,
) -> Result<json::Detail<json::Product>> {
    let product = {
        let db = connections.shared()?;
        usecases::get_product(&db, id)
    }
    .map_err(ApiError::lookup("Product", id))?;
    Ok(Json(envelope::detail(product.into())))
}

#[get("/products/pois/<id>?<limit>")]
pub fn get_products_of_poi(
    connections: sqlite::Connections,
    id: &str,
    limit: Option<&str>,
) -> Result<json::ProductList> {
    let (limit, advisory) = usecases::resolve_limit(limit);
    let products = {
        let db = connections.shared()?;
        usecases::products_of_poi(&db, id, limit)
    }
    .map_err(ApiError::lookup("POI", id))?;
    Ok(Json(product_list(advisory, products)))
}
