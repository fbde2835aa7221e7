use std::{
    num::{ParseFloatError, ParseIntError},
    result,
};

use thiserror::Error;

use super::prelude::*;

/// Search radius in miles.
pub type Miles = u32;

/// The unparsed lookup parameters of a request.
#[derive(Debug, Clone, Default)]
pub struct RawLookupParams<'a> {
    pub lat: Option<&'a str>,
    pub lng: Option<&'a str>,
    pub proximity: Option<&'a str>,
    pub limit: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LookupParams {
    pub point: Option<MapPoint>,
    pub radius: Distance,
    pub limit: Option<usize>,
    /// At most one advisory with the precedence
    /// location > proximity > limit.
    pub advisory: Option<Advisory>,
}

impl LookupParams {
    pub fn proximity(&self) -> Option<Proximity> {
        self.point
            .map(|center| Proximity::new(center, self.radius))
    }
}

#[derive(Debug, Error)]
enum LocationError {
    #[error("Missing {0}")]
    Missing(&'static str),
    #[error(transparent)]
    Parse(#[from] ParseFloatError),
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

impl LocationError {
    fn kind(&self) -> &'static str {
        match self {
            Self::Missing(_) => "MissingCoordinate",
            Self::Parse(_) => "ParseFloatError",
            Self::Coordinate(err) => err.into(),
        }
    }
}

// Blank values are treated like absent parameters.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_degrees(value: Option<&str>, name: &'static str) -> result::Result<f64, LocationError> {
    let value = non_blank(value).ok_or(LocationError::Missing(name))?;
    Ok(value.trim().parse::<f64>()?)
}

fn parse_location(lat: Option<&str>, lng: Option<&str>) -> result::Result<MapPoint, LocationError> {
    let lat = parse_degrees(lat, "latitude")?;
    let lng = parse_degrees(lng, "longitude")?;
    Ok(MapPoint::try_from_lat_lng_deg(lat, lng)?)
}

fn parse_count<T>(value: &str) -> result::Result<T, ParseIntError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    value.trim().parse()
}

/// Parses the optional result limit.
///
/// An unparsable limit is replaced by no limit at all.
pub fn resolve_limit(limit: Option<&str>) -> (Option<usize>, Option<Advisory>) {
    let Some(limit) = limit else {
        return (None, None);
    };
    match parse_count::<usize>(limit) {
        Ok(limit) => (Some(limit), None),
        Err(err) => {
            log::warn!("Invalid limit '{limit}': {err}");
            let debug = debug_message("ParseIntError", &err);
            (None, Some(Advisory::BadLimit { debug }))
        }
    }
}

/// Parses the lookup parameters of a request.
///
/// Malformed parameters never fail. They are either dropped
/// or replaced by defaults and reported as an [`Advisory`].
pub fn resolve_lookup_params(
    raw: &RawLookupParams<'_>,
    default_proximity: Miles,
) -> LookupParams {
    let default_radius = Distance::from_miles(f64::from(default_proximity));
    let (limit, limit_advisory) = resolve_limit(raw.limit);

    let lat = non_blank(raw.lat);
    let lng = non_blank(raw.lng);
    if lat.is_none() && lng.is_none() {
        return LookupParams {
            point: None,
            radius: default_radius,
            limit,
            advisory: limit_advisory,
        };
    }

    let mut proximity_advisory = None;
    let radius = match non_blank(raw.proximity) {
        Some(proximity) => match parse_count::<Miles>(proximity) {
            Ok(miles) => Distance::from_miles(f64::from(miles)),
            Err(err) => {
                log::warn!("Invalid proximity '{proximity}': {err}");
                proximity_advisory = Some(Advisory::BadProximity {
                    proximity: proximity.to_owned(),
                    debug: debug_message("ParseIntError", &err),
                });
                default_radius
            }
        },
        None => default_radius,
    };

    let mut location_advisory = None;
    let point = match parse_location(lat, lng) {
        Ok(point) => Some(point),
        Err(err) => {
            log::warn!(
                "Invalid location '{}, {}': {err}",
                lat.unwrap_or_default(),
                lng.unwrap_or_default()
            );
            location_advisory = Some(Advisory::BadLocation {
                lat: lat.map(ToOwned::to_owned),
                lng: lng.map(ToOwned::to_owned),
                debug: debug_message(err.kind(), &err),
            });
            None
        }
    };

    LookupParams {
        point,
        radius,
        limit,
        advisory: location_advisory
            .or(proximity_advisory)
            .or(limit_advisory),
    }
}
