mod error;
mod get_poi;
mod list_locations;
mod list_reference_data;
mod products;
mod query_pois;
mod resolve_lookup_params;

#[cfg(test)]
pub mod tests;

pub use self::{
    error::Error, get_poi::*, list_locations::*, list_reference_data::*, products::*,
    query_pois::*, resolve_lookup_params::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{advisory::*, entities::*, proximity::*, repositories::*};
}
