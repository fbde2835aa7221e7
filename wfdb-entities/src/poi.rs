use crate::{
    address::*, category::*, contact::*, geo::*, hazard::*, id::*, media::*, product::*, time::*,
};

/// A product/preparation pairing sold at a POI.
#[derive(Debug, Clone, PartialEq)]
pub struct PoiProduct {
    pub product_preparation: ProductPreparation,
    pub price: Option<f64>,
    pub available: bool,
}

/// A geographically located point of interest
/// together with all of its relations.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    pub id          : Id,
    pub name        : String,
    pub alt_name    : String,
    pub description : String,
    pub history     : String,
    pub facts       : String,
    pub pos         : MapPoint,
    pub address     : Address,
    pub contact     : Contact,
    pub story       : Option<Id>,
    pub status      : bool,
    pub hours       : String,
    pub created     : Timestamp,
    pub modified    : Timestamp,
    pub hazards     : Vec<Hazard>,
    pub categories  : Vec<Category>,
    pub images      : Vec<Image>,
    pub videos      : Vec<Video>,
    pub products    : Vec<PoiProduct>,
}

impl Poi {
    pub fn distance_to(&self, pos: MapPoint) -> Distance {
        MapPoint::distance(self.pos, pos)
    }
}
