use super::prelude::*;

/// Parses a requested primary key.
pub fn parse_id(id: &str) -> Result<Id> {
    id.parse()
        .map_err(|err| Error::InvalidId(id.to_owned(), err))
}

pub fn get_poi<R: PoiRepo>(repo: &R, id: &str) -> Result<Poi> {
    let id = parse_id(id)?;
    Ok(repo.get_poi(id)?)
}
