use super::*;
use wfdb_entities as e;

impl From<e::hazard::Hazard> for PoiHazard {
    fn from(from: e::hazard::Hazard) -> Self {
        let e::hazard::Hazard {
            id,
            name,
            description,
            ..
        } = from;
        Self {
            id: id.into(),
            name,
            description,
        }
    }
}

impl From<e::hazard::Hazard> for Hazard {
    fn from(from: e::hazard::Hazard) -> Self {
        let e::hazard::Hazard {
            id,
            name,
            description,
            created,
            modified,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            created: created.to_iso8601(),
            modified: modified.to_iso8601(),
            ext: Ext::default(),
        }
    }
}

impl From<e::category::Category> for PoiCategory {
    fn from(from: e::category::Category) -> Self {
        Self {
            id: from.id.into(),
            category: from.category,
        }
    }
}

impl From<e::category::Category> for Category {
    fn from(from: e::category::Category) -> Self {
        let e::category::Category {
            id,
            category,
            created,
            modified,
        } = from;
        Self {
            id: id.into(),
            category,
            created: created.to_iso8601(),
            modified: modified.to_iso8601(),
            ext: Ext::default(),
        }
    }
}

impl From<e::media::Video> for Media {
    fn from(from: e::media::Video) -> Self {
        let e::media::Video {
            name, caption, url, ..
        } = from;
        Self {
            name,
            caption,
            link: url,
        }
    }
}

impl From<e::poi::PoiProduct> for PoiProduct {
    fn from(from: e::poi::PoiProduct) -> Self {
        let e::product::ProductPreparation {
            product_id,
            product_name,
            preparation_id,
            preparation_name,
            ..
        } = from.product_preparation;
        Self {
            product_id: product_id.into(),
            preparation_id: preparation_id.into(),
            name: product_name,
            preparation: preparation_name,
        }
    }
}

impl From<e::product::Preparation> for Preparation {
    fn from(from: e::product::Preparation) -> Self {
        let e::product::Preparation {
            id,
            name,
            description,
            additional_info,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            additional_info,
        }
    }
}

impl From<e::product::Product> for Product {
    fn from(from: e::product::Product) -> Self {
        let e::product::Product {
            id,
            name,
            variety,
            alt_name,
            description,
            origin,
            season,
            available,
            market_price,
            link,
            created,
            modified,
            preparations,
        } = from;
        Self {
            id: id.into(),
            name,
            variety,
            alt_name,
            description,
            origin,
            season,
            available,
            market_price,
            link,
            created: created.to_iso8601(),
            modified: modified.to_iso8601(),
            preparations: preparations.into_iter().map(Into::into).collect(),
            ext: Ext::default(),
        }
    }
}
