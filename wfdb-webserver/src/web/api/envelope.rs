//! Wraps serialized records together with an error descriptor.

use crate::{
    adapters::json,
    core::{advisory::Level, prelude::*},
};

fn level(from: Level) -> json::Level {
    match from {
        Level::Information => json::Level::Information,
        Level::Warning => json::Level::Warning,
        Level::Error => json::Level::Error,
    }
}

/// The descriptor of a successful response without any remarks.
pub fn no_error() -> json::Error {
    json::Error::default()
}

pub fn advisory(from: &Advisory) -> json::Error {
    json::Error {
        status: true,
        name: Some(from.name()),
        text: Some(from.text()),
        level: Some(level(from.level())),
        debug: Some(from.debug().to_owned()),
    }
}

/// The descriptor of a list response.
///
/// An empty list is reported unless a malformed parameter
/// has already been reported.
pub fn list_error(
    parameter_advisory: Option<Advisory>,
    is_empty: bool,
    entities: &'static str,
    filter: Option<RelationFilter>,
) -> json::Error {
    Advisory::or_no_results(parameter_advisory, is_empty, entities, filter)
        .as_ref()
        .map_or_else(no_error, advisory)
}

pub fn detail<T>(record: T) -> json::Detail<T> {
    json::Detail {
        record,
        error: no_error(),
    }
}

pub fn not_found(from: &NotFound) -> json::ErrorResponse {
    json::ErrorResponse {
        error: json::Error {
            status: true,
            name: Some(from.name()),
            text: Some(from.text()),
            level: Some(level(from.level())),
            debug: Some(from.debug.clone()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_without_advisory() {
        let error = list_error(None, true, "POIs", None);
        assert!(error.status);
        assert_eq!(Some("No POIs"), error.name.as_deref());
        assert_eq!(Some("No POIs found"), error.text.as_deref());
        assert_eq!(Some(json::Level::Information), error.level);
        assert_eq!(Some(""), error.debug.as_deref());
    }

    #[test]
    fn advisory_takes_precedence_over_empty_list() {
        let bad_limit = Advisory::BadLimit {
            debug: "ParseIntError: invalid digit found in string".into(),
        };
        let error = list_error(Some(bad_limit), true, "POIs", None);
        assert_eq!(Some("Bad Limit"), error.name.as_deref());
        assert_eq!(Some(json::Level::Warning), error.level);
    }

    #[test]
    fn non_empty_list_without_advisory() {
        assert_eq!(no_error(), list_error(None, false, "Hazards", None));
    }

    #[test]
    fn not_found_body() {
        let body = not_found(&NotFound {
            entity: "Product",
            id: "7".into(),
            debug: "NotFound: The requested object could not be found".into(),
        });
        assert_eq!(Some("Product Not Found"), body.error.name.as_deref());
        assert_eq!(
            Some("Product id 7 was not found."),
            body.error.text.as_deref()
        );
        assert_eq!(Some(json::Level::Error), body.error.level);
    }
}
