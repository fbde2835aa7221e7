pub use wfdb_core::{advisory, repositories};

pub mod entities {
    pub use wfdb_core::entities::*;
    #[cfg(test)]
    pub use wfdb_entities::builders::*;
}

pub mod usecases {
    pub use wfdb_core::usecases::*;
}

pub mod prelude {
    pub use super::{
        advisory::{Advisory, NotFound},
        entities::*,
        repositories::RelationFilter,
    };
}
