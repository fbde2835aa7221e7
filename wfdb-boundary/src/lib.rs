use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    pub status: bool,
    pub name: Option<String>,
    pub text: Option<String>,
    pub level: Option<Level>,
    pub debug: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
pub enum Level {
    Information,
    Warning,
    Error,
}

/// Reserved for extensions, always empty.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Ext {}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Poi {
    pub id                   : i64,
    pub name                 : String,
    pub alt_name             : String,
    pub description          : String,
    pub history              : String,
    pub facts                : String,
    pub lat                  : f64,
    pub lng                  : f64,
    pub street               : String,
    pub city                 : String,
    pub state                : String,
    pub zip                  : String,
    pub location_description : String,
    pub contact_name         : String,
    pub website              : String,
    pub email                : String,
    pub phone                : Option<String>,
    pub story                : Option<i64>,
    pub status               : bool,
    pub hours                : String,
    pub created              : String,
    pub modified             : String,
    pub hazards              : Vec<PoiHazard>,
    pub categories           : Vec<PoiCategory>,
    pub images               : Vec<Media>,
    pub videos               : Vec<Media>,
    pub products             : Vec<PoiProduct>,
    pub ext                  : Ext,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct PoiHazard {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct PoiCategory {
    pub id: i64,
    pub category: String,
}

/// An image or video embedded into a POI.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Media {
    pub name: String,
    pub caption: String,
    pub link: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct PoiProduct {
    pub product_id: i64,
    pub preparation_id: i64,
    pub name: String,
    pub preparation: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Hazard {
    pub id          : i64,
    pub name        : String,
    pub description : String,
    pub created     : String,
    pub modified    : String,
    pub ext         : Ext,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Category {
    pub id       : i64,
    pub category : String,
    pub created  : String,
    pub modified : String,
    pub ext      : Ext,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Product {
    pub id           : i64,
    pub name         : String,
    pub variety      : String,
    pub alt_name     : String,
    pub description  : String,
    pub origin       : String,
    pub season       : String,
    pub available    : Option<bool>,
    pub market_price : String,
    pub link         : String,
    pub created      : String,
    pub modified     : String,
    pub preparations : Vec<Preparation>,
    pub ext          : Ext,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Preparation {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub additional_info: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Location {
    /// Position in the list of locations
    pub location: usize,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PoiList {
    pub error: Error,
    pub pois: Vec<Poi>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ProductList {
    pub error: Error,
    pub products: Vec<Product>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct HazardList {
    pub error: Error,
    pub hazards: Vec<Hazard>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CategoryList {
    pub error: Error,
    pub categories: Vec<Category>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct LocationList {
    pub error: Error,
    pub locations: Vec<Location>,
}

/// A single record with an embedded error descriptor.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Detail<T> {
    #[serde(flatten)]
    pub record: T,
    pub error: Error,
}

/// The body of a failed lookup.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ErrorResponse {
    pub error: Error,
}
