use diesel::{self, prelude::*, result::Error as DieselError};

use wfdb_core::{
    entities::*,
    proximity::{select_nearest, Located},
    repositories::{self as repo, *},
};

use super::*;

mod category;
mod hazard;
mod poi;
mod product;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

fn limit_as_i64(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

impl From<models::Hazard> for Hazard {
    fn from(from: models::Hazard) -> Self {
        let models::Hazard {
            id,
            name,
            description,
            created_at,
            modified_at,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            created: Timestamp::from_milliseconds(created_at),
            modified: Timestamp::from_milliseconds(modified_at),
        }
    }
}

impl From<models::Category> for Category {
    fn from(from: models::Category) -> Self {
        let models::Category {
            id,
            label,
            created_at,
            modified_at,
        } = from;
        Self {
            id: id.into(),
            category: label,
            created: Timestamp::from_milliseconds(created_at),
            modified: Timestamp::from_milliseconds(modified_at),
        }
    }
}

impl From<models::Image> for Image {
    fn from(from: models::Image) -> Self {
        let models::Image {
            id,
            poi_id: _,
            name,
            caption,
            file,
            created_at,
            modified_at,
        } = from;
        Self {
            id: id.into(),
            name,
            caption,
            file,
            created: Timestamp::from_milliseconds(created_at),
            modified: Timestamp::from_milliseconds(modified_at),
        }
    }
}

impl From<models::Video> for Video {
    fn from(from: models::Video) -> Self {
        let models::Video {
            id,
            poi_id: _,
            name,
            caption,
            url,
            created_at,
            modified_at,
        } = from;
        Self {
            id: id.into(),
            name,
            caption,
            url,
            created: Timestamp::from_milliseconds(created_at),
            modified: Timestamp::from_milliseconds(modified_at),
        }
    }
}

impl From<models::Preparation> for Preparation {
    fn from(from: models::Preparation) -> Self {
        let models::Preparation {
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

impl From<models::JoinedPoiProduct> for PoiProduct {
    fn from(from: models::JoinedPoiProduct) -> Self {
        let models::JoinedPoiProduct {
            product_preparation_id,
            product_id,
            product_name,
            preparation_id,
            preparation_name,
            price,
            available,
        } = from;
        Self {
            product_preparation: ProductPreparation {
                id: product_preparation_id.into(),
                product_id: product_id.into(),
                product_name,
                preparation_id: preparation_id.into(),
                preparation_name,
            },
            price,
            available,
        }
    }
}

impl Located for models::Poi {
    fn id(&self) -> Id {
        self.id.into()
    }

    fn pos(&self) -> Option<MapPoint> {
        MapPoint::try_from_lat_lng_deg(self.lat, self.lng)
            .inspect_err(|err| {
                // This should never happen
                log::warn!("POI {} has an invalid position: {err}", self.id);
            })
            .ok()
    }
}
