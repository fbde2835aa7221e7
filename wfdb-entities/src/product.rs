use crate::{id::Id, time::Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preparation {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub additional_info: String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id           : Id,
    pub name         : String,
    pub variety      : String,
    pub alt_name     : String,
    pub description  : String,
    pub origin       : String,
    pub season       : String,
    pub available    : Option<bool>,
    pub market_price : String,
    pub link         : String,
    pub created      : Timestamp,
    pub modified     : Timestamp,
    /// All preparations this product is offered in.
    pub preparations : Vec<Preparation>,
}

/// A product offered in a certain preparation, e.g. "Dungeness crab, live".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPreparation {
    pub id: Id,
    pub product_id: Id,
    pub product_name: String,
    pub preparation_id: Id,
    pub preparation_name: String,
}
