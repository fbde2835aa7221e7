pub use wfdb_boundary::*;

use crate::core::entities as e;

pub mod to_json {
    //! Entity -> JSON
    //!
    //! Projections that depend on the server configuration.

    use super::*;

    pub fn image(from: e::Image, media_url: &str) -> Media {
        let link = from.link(media_url);
        let e::Image { name, caption, .. } = from;
        Media {
            name,
            caption,
            link,
        }
    }

    pub fn poi(from: e::Poi, media_url: &str) -> Poi {
        let e::Poi {
            id,
            name,
            alt_name,
            description,
            history,
            facts,
            pos,
            address,
            contact,
            story,
            status,
            hours,
            created,
            modified,
            hazards,
            categories,
            images,
            videos,
            products,
        } = from;
        let (lat, lng) = pos.to_lat_lng_deg();
        let e::Address {
            street,
            city,
            state,
            zip,
            location_description,
        } = address;
        let e::Contact {
            name: contact_name,
            website,
            email,
            phone,
        } = contact;
        Poi {
            id: id.into(),
            name,
            alt_name,
            description,
            history,
            facts,
            lat,
            lng,
            street,
            city,
            state,
            zip,
            location_description,
            contact_name,
            website,
            email,
            phone,
            story: story.map(Into::into),
            status,
            hours,
            created: created.to_iso8601(),
            modified: modified.to_iso8601(),
            hazards: hazards.into_iter().map(Into::into).collect(),
            categories: categories.into_iter().map(Into::into).collect(),
            images: images
                .into_iter()
                .map(|img| image(img, media_url))
                .collect(),
            videos: videos.into_iter().map(Into::into).collect(),
            products: products.into_iter().map(Into::into).collect(),
            ext: Ext::default(),
        }
    }

    /// Numbers the cities in the given order.
    pub fn locations(cities: Vec<String>) -> Vec<Location> {
        cities
            .into_iter()
            .enumerate()
            .map(|(location, name)| Location { location, name })
            .collect()
    }
}
