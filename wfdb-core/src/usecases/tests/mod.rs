use std::{cell::RefCell, result};

use super::prelude::*;
use crate::repositories::Error as RepoError;

type RepoResult<T> = result::Result<T, RepoError>;

trait Keyed {
    fn key(&self) -> Id;
}

impl Keyed for Poi {
    fn key(&self) -> Id {
        self.id
    }
}

impl Keyed for Hazard {
    fn key(&self) -> Id {
        self.id
    }
}

impl Keyed for Category {
    fn key(&self) -> Id {
        self.id
    }
}

impl Keyed for Product {
    fn key(&self) -> Id {
        self.id
    }
}

#[derive(Default)]
pub struct MockDb {
    pub pois: RefCell<Vec<Poi>>,
    pub hazards: RefCell<Vec<Hazard>>,
    pub categories: RefCell<Vec<Category>>,
    pub products: RefCell<Vec<Product>>,
}

fn get<T: Clone + Keyed>(objects: &[T], id: Id) -> RepoResult<T> {
    objects
        .iter()
        .find(|x| x.key() == id)
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn all<T: Clone + Keyed>(objects: &[T], limit: Option<usize>) -> Vec<T> {
    let mut objects = objects.to_vec();
    objects.sort_by_key(Keyed::key);
    if let Some(limit) = limit {
        objects.truncate(limit);
    }
    objects
}

fn is_related(poi: &Poi, relation: RelationFilter) -> bool {
    match relation {
        RelationFilter::Category(id) => poi.categories.iter().any(|c| c.id == id),
        RelationFilter::Product(id) => poi
            .products
            .iter()
            .any(|p| p.product_preparation.product_id == id),
    }
}

impl PoiRepo for MockDb {
    fn get_poi(&self, id: Id) -> RepoResult<Poi> {
        get(&self.pois.borrow(), id)
    }

    fn query_pois(&self, query: &PoiQuery) -> RepoResult<Vec<Poi>> {
        let candidates = self
            .pois
            .borrow()
            .iter()
            .filter(|poi| query.relation.map_or(true, |r| is_related(poi, r)))
            .cloned()
            .collect::<Vec<_>>();
        Ok(match query.proximity {
            Some(ref proximity) => select_nearest(candidates, proximity, query.limit),
            None => all(&candidates, query.limit),
        })
    }

    fn all_poi_cities(&self) -> RepoResult<Vec<String>> {
        Ok(self
            .pois
            .borrow()
            .iter()
            .map(|poi| poi.address.city.clone())
            .collect())
    }
}

impl HazardRepo for MockDb {
    fn all_hazards(&self, limit: Option<usize>) -> RepoResult<Vec<Hazard>> {
        Ok(all(&self.hazards.borrow(), limit))
    }
}

impl CategoryRepo for MockDb {
    fn get_category(&self, id: Id) -> RepoResult<Category> {
        get(&self.categories.borrow(), id)
    }

    fn all_categories(&self, limit: Option<usize>) -> RepoResult<Vec<Category>> {
        Ok(all(&self.categories.borrow(), limit))
    }
}

impl ProductRepo for MockDb {
    fn get_product(&self, id: Id) -> RepoResult<Product> {
        get(&self.products.borrow(), id)
    }

    fn all_products(&self, limit: Option<usize>) -> RepoResult<Vec<Product>> {
        Ok(all(&self.products.borrow(), limit))
    }

    fn products_of_poi(&self, poi_id: Id, limit: Option<usize>) -> RepoResult<Vec<Product>> {
        let poi = self.get_poi(poi_id)?;
        let sold = self
            .products
            .borrow()
            .iter()
            .filter(|product| {
                poi.products
                    .iter()
                    .any(|p| p.product_preparation.product_id == product.id)
            })
            .cloned()
            .collect::<Vec<_>>();
        Ok(all(&sold, limit))
    }
}
