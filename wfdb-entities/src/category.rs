use crate::{id::Id, time::Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Id,
    /// The label, e.g. "Cannery"
    pub category: String,
    pub created: Timestamp,
    pub modified: Timestamp,
}
