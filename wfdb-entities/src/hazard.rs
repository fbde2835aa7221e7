use crate::{id::Id, time::Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hazard {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub created: Timestamp,
    pub modified: Timestamp,
}
