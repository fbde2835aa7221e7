// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

#[derive(Queryable)]
pub struct Poi {
    pub id: i64,
    pub name: String,
    pub alt_name: String,
    pub description: String,
    pub history: String,
    pub facts: String,
    pub lat: f64,
    pub lng: f64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub location_description: String,
    pub contact_name: String,
    pub website: String,
    pub email: String,
    pub phone: Option<String>,
    pub story_id: Option<i64>,
    pub status: bool,
    pub hours: String,
    pub created_at: i64,
    pub modified_at: i64,
}

#[derive(Queryable)]
pub struct Image {
    pub id: i64,
    pub poi_id: i64,
    pub name: String,
    pub caption: String,
    pub file: String,
    pub created_at: i64,
    pub modified_at: i64,
}

#[derive(Queryable)]
pub struct Video {
    pub id: i64,
    pub poi_id: i64,
    pub name: String,
    pub caption: String,
    pub url: String,
    pub created_at: i64,
    pub modified_at: i64,
}

#[derive(Queryable)]
pub struct Hazard {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: i64,
    pub modified_at: i64,
}

#[derive(Queryable)]
pub struct Category {
    pub id: i64,
    pub label: String,
    pub created_at: i64,
    pub modified_at: i64,
}

#[derive(Queryable)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub variety: String,
    pub alt_name: String,
    pub description: String,
    pub origin: String,
    pub season: String,
    pub available: Option<bool>,
    pub market_price: String,
    pub link: String,
    pub created_at: i64,
    pub modified_at: i64,
}

#[derive(Queryable)]
pub struct Preparation {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub additional_info: String,
}

/// A row of `poi_product` joined with the product
/// and preparation it refers to.
#[derive(Queryable)]
pub struct JoinedPoiProduct {
    pub product_preparation_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub preparation_id: i64,
    pub preparation_name: String,
    pub price: Option<f64>,
    pub available: bool,
}
