//! # wfdb-core
//!
//! Use cases and repository interfaces of the waterfront POI directory.

pub mod entities {
    pub use wfdb_entities::{
        address::*, category::*, contact::*, geo::*, hazard::*, id::*, media::*, poi::*,
        product::*, time::*,
    };
}

pub mod advisory;
pub mod proximity;
pub mod repositories;
pub mod usecases;
