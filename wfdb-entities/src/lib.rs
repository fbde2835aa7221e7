//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # wfdb-entities
//!
//! Reusable, agnostic domain entities for the waterfront POI directory.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod category;
pub mod contact;
pub mod geo;
pub mod hazard;
pub mod id;
pub mod media;
pub mod poi;
pub mod product;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
