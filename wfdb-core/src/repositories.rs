// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. All repositories are read-only, the
// records are maintained elsewhere.

use crate::{entities::*, proximity::Proximity};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Restricts a POI selection to the POIs that are
/// related to the given category or product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationFilter {
    Category(Id),
    Product(Id),
}

impl RelationFilter {
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Category(_) => "category",
            Self::Product(_) => "product",
        }
    }

    pub const fn id(self) -> Id {
        match self {
            Self::Category(id) | Self::Product(id) => id,
        }
    }
}

/// A POI selection as understood by the datastore.
///
/// With `proximity` the result is ordered nearest-first,
/// otherwise by ascending id. The `limit` is applied last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoiQuery {
    pub proximity: Option<Proximity>,
    pub relation: Option<RelationFilter>,
    pub limit: Option<usize>,
}

pub trait PoiRepo {
    fn get_poi(&self, id: Id) -> Result<Poi>;
    fn query_pois(&self, query: &PoiQuery) -> Result<Vec<Poi>>;

    // The city of every POI, including duplicates
    fn all_poi_cities(&self) -> Result<Vec<String>>;
}

pub trait HazardRepo {
    fn all_hazards(&self, limit: Option<usize>) -> Result<Vec<Hazard>>;
}

pub trait CategoryRepo {
    fn get_category(&self, id: Id) -> Result<Category>;
    fn all_categories(&self, limit: Option<usize>) -> Result<Vec<Category>>;
}

pub trait ProductRepo {
    fn get_product(&self, id: Id) -> Result<Product>;
    fn all_products(&self, limit: Option<usize>) -> Result<Vec<Product>>;
    fn products_of_poi(&self, poi_id: Id, limit: Option<usize>) -> Result<Vec<Product>>;
}
