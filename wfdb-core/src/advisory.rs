//! Structured, non-fatal conditions that are reported
//! alongside an otherwise successful response.

use std::fmt;

use crate::repositories::RelationFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Information,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// The coordinates could not be parsed, the spatial filter is dropped.
    BadLocation {
        lat: Option<String>,
        lng: Option<String>,
        debug: String,
    },
    /// The radius could not be parsed, the default radius is used.
    BadProximity { proximity: String, debug: String },
    /// The limit could not be parsed, all results are returned.
    BadLimit { debug: String },
    /// A well-formed query did not match anything.
    NoResults {
        entities: &'static str,
        filter: Option<RelationFilter>,
    },
}

// The literal that is printed for missing coordinates
const MISSING_VALUE: &str = "None";

impl Advisory {
    pub fn level(&self) -> Level {
        match self {
            Self::BadLocation { .. } | Self::BadProximity { .. } | Self::BadLimit { .. } => {
                Level::Warning
            }
            Self::NoResults { .. } => Level::Information,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::BadLocation { .. } => "Bad location".into(),
            Self::BadProximity { .. } => "Bad proximity".into(),
            Self::BadLimit { .. } => "Bad Limit".into(),
            Self::NoResults { entities, .. } => format!("No {entities}"),
        }
    }

    pub fn text(&self) -> String {
        match self {
            Self::BadLocation { lat, lng, .. } => format!(
                "There was an error with the given coordinates {}, {}",
                lat.as_deref().unwrap_or(MISSING_VALUE),
                lng.as_deref().unwrap_or(MISSING_VALUE)
            ),
            Self::BadProximity { proximity, .. } => {
                format!("There was an error finding POIs within {proximity} miles")
            }
            Self::BadLimit { .. } => "Invalid limit. Returning all results.".into(),
            Self::NoResults { entities, filter } => match filter {
                Some(filter) => format!("No {entities} found for {} {}", filter.kind(), filter.id()),
                None => format!("No {entities} found"),
            },
        }
    }

    pub fn debug(&self) -> &str {
        match self {
            Self::BadLocation { debug, .. }
            | Self::BadProximity { debug, .. }
            | Self::BadLimit { debug } => debug,
            Self::NoResults { .. } => "",
        }
    }

    /// Replaces a missing advisory by [`Advisory::NoResults`]
    /// if nothing has been found.
    ///
    /// Advisories about malformed parameters take precedence.
    pub fn or_no_results(
        advisory: Option<Self>,
        is_empty: bool,
        entities: &'static str,
        filter: Option<RelationFilter>,
    ) -> Option<Self> {
        advisory.or_else(|| is_empty.then_some(Self::NoResults { entities, filter }))
    }
}

/// Formats the cause of a failure as `<ErrorKind>: <message>`.
pub fn debug_message(kind: &str, err: &dyn fmt::Display) -> String {
    format!("{kind}: {err}")
}

/// A requested record does not exist or its id is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    /// Display name of the entity, e.g. "POI"
    pub entity: &'static str,
    /// The id as requested
    pub id: String,
    pub debug: String,
}

impl NotFound {
    pub fn name(&self) -> String {
        format!("{} Not Found", self.entity)
    }

    pub fn text(&self) -> String {
        format!("{} id {} was not found.", self.entity, self.id)
    }

    pub const fn level(&self) -> Level {
        Level::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Id;

    #[test]
    fn bad_location_prints_missing_coordinates() {
        let a = Advisory::BadLocation {
            lat: Some("45.5".into()),
            lng: None,
            debug: "MissingCoordinate: Missing longitude".into(),
        };
        assert_eq!(Level::Warning, a.level());
        assert_eq!("Bad location", a.name());
        assert_eq!(
            "There was an error with the given coordinates 45.5, None",
            a.text()
        );
    }

    #[test]
    fn no_results_with_filter() {
        let a = Advisory::NoResults {
            entities: "POIs",
            filter: Some(RelationFilter::Category(Id::new(3))),
        };
        assert_eq!(Level::Information, a.level());
        assert_eq!("No POIs", a.name());
        assert_eq!("No POIs found for category 3", a.text());
        assert_eq!("", a.debug());
    }

    #[test]
    fn no_results_do_not_replace_other_advisories() {
        let bad_limit = Advisory::BadLimit {
            debug: "ParseIntError: invalid digit found in string".into(),
        };
        assert_eq!(
            Some(bad_limit.clone()),
            Advisory::or_no_results(Some(bad_limit), true, "POIs", None)
        );
        assert_eq!(None, Advisory::or_no_results(None, false, "POIs", None));
        assert_eq!(
            "No Products found",
            Advisory::or_no_results(None, true, "Products", None)
                .unwrap()
                .text()
        );
    }

    #[test]
    fn not_found() {
        let nf = NotFound {
            entity: "POI",
            id: "999".into(),
            debug: "NotFound: The requested object could not be found".into(),
        };
        assert_eq!("POI Not Found", nf.name());
        assert_eq!("POI id 999 was not found.", nf.text());
        assert_eq!(Level::Error, nf.level());
    }
}
