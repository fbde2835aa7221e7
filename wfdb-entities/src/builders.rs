pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{poi_builder::*, product_builder::*, reference_builder::*};

const T0: crate::time::Timestamp = crate::time::Timestamp::from_milliseconds(1_407_540_425_568);

pub mod poi_builder {

    use super::*;
    use crate::{category::*, geo::*, hazard::*, id::*, media::*, poi::*};

    #[derive(Debug)]
    pub struct PoiBuild {
        poi: Poi,
    }

    impl PoiBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.poi.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.poi.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.poi.description = desc.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.poi.pos = pos;
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            self.pos(MapPoint::from_lat_lng_deg(lat, lng))
        }
        pub fn city(mut self, city: &str) -> Self {
            self.poi.address.city = city.into();
            self
        }
        pub fn phone(mut self, phone: Option<&str>) -> Self {
            self.poi.contact.phone = phone.map(Into::into);
            self
        }
        pub fn hazards(mut self, hazards: Vec<Hazard>) -> Self {
            self.poi.hazards = hazards;
            self
        }
        pub fn categories(mut self, categories: Vec<Category>) -> Self {
            self.poi.categories = categories;
            self
        }
        pub fn images(mut self, images: Vec<Image>) -> Self {
            self.poi.images = images;
            self
        }
        pub fn videos(mut self, videos: Vec<Video>) -> Self {
            self.poi.videos = videos;
            self
        }
        pub fn products(mut self, products: Vec<PoiProduct>) -> Self {
            self.poi.products = products;
            self
        }
        pub fn finish(self) -> Poi {
            self.poi
        }
    }

    impl Builder for Poi {
        type Build = PoiBuild;
        fn build() -> Self::Build {
            PoiBuild {
                poi: Poi {
                    id: Id::default(),
                    name: "".into(),
                    alt_name: "".into(),
                    description: "".into(),
                    history: "".into(),
                    facts: "".into(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    address: Default::default(),
                    contact: Default::default(),
                    story: None,
                    status: true,
                    hours: "".into(),
                    created: T0,
                    modified: T0,
                    hazards: vec![],
                    categories: vec![],
                    images: vec![],
                    videos: vec![],
                    products: vec![],
                },
            }
        }
    }
}

pub mod reference_builder {

    use super::*;
    use crate::{category::*, hazard::*, id::*};

    impl Hazard {
        pub fn new_with_name(id: i64, name: &str) -> Self {
            Self {
                id: Id::new(id),
                name: name.into(),
                description: format!("Beware of {name}"),
                created: T0,
                modified: T0,
            }
        }
    }

    impl Category {
        pub fn new_with_label(id: i64, label: &str) -> Self {
            Self {
                id: Id::new(id),
                category: label.into(),
                created: T0,
                modified: T0,
            }
        }
    }
}

pub mod product_builder {

    use super::*;
    use crate::{id::*, poi::*, product::*};

    impl PoiProduct {
        pub fn new_available(
            id: i64,
            (product_id, product_name): (i64, &str),
            (preparation_id, preparation_name): (i64, &str),
        ) -> Self {
            Self {
                product_preparation: ProductPreparation {
                    id: Id::new(id),
                    product_id: Id::new(product_id),
                    product_name: product_name.into(),
                    preparation_id: Id::new(preparation_id),
                    preparation_name: preparation_name.into(),
                },
                price: None,
                available: true,
            }
        }
    }

    #[derive(Debug)]
    pub struct ProductBuild {
        product: Product,
    }

    impl ProductBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.product.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.product.name = name.into();
            self
        }
        pub fn preparations(mut self, preparations: Vec<Preparation>) -> Self {
            self.product.preparations = preparations;
            self
        }
        pub fn finish(self) -> Product {
            self.product
        }
    }

    impl Builder for Product {
        type Build = ProductBuild;
        fn build() -> Self::Build {
            ProductBuild {
                product: Product {
                    id: Id::default(),
                    name: "".into(),
                    variety: "".into(),
                    alt_name: "".into(),
                    description: "".into(),
                    origin: "".into(),
                    season: "".into(),
                    available: None,
                    market_price: "".into(),
                    link: "".into(),
                    created: T0,
                    modified: T0,
                    preparations: vec![],
                },
            }
        }
    }
}
