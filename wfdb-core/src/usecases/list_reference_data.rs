use super::prelude::*;

pub fn list_hazards<R: HazardRepo>(repo: &R, limit: Option<usize>) -> Result<Vec<Hazard>> {
    Ok(repo.all_hazards(limit)?)
}

pub fn list_categories<R: CategoryRepo>(repo: &R, limit: Option<usize>) -> Result<Vec<Category>> {
    Ok(repo.all_categories(limit)?)
}
