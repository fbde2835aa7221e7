use std::f64::consts::PI;

use crate::entities::*;

// Widens the prefilter box to compensate rounding errors
// near its edges. The exact distance check follows anyway.
const BBOX_DEG_MARGIN: f64 = 1e-6;

/// A circular search area on the surface of the earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximity {
    pub center: MapPoint,
    pub radius: Distance,
}

impl Proximity {
    pub fn new(center: MapPoint, radius: Distance) -> Self {
        debug_assert!(center.is_valid());
        debug_assert!(radius.is_valid());
        Self { center, radius }
    }

    pub fn contains(&self, pos: MapPoint) -> bool {
        MapPoint::distance(self.center, pos) <= self.radius
    }

    /// The smallest bounding box that encloses the search area.
    ///
    /// Reaching over a pole covers all longitudes.
    pub fn enclosing_bbox(&self) -> MapBbox {
        let (lat, lng) = self.center.to_lat_lng_deg();
        let angle = self.radius.to_meters() / MEAN_EARTH_RADIUS.to_meters();
        let lat_ext = angle.to_degrees() + BBOX_DEG_MARGIN;
        let south = (lat - lat_ext).max(-90.0);
        let north = (lat + lat_ext).min(90.0);

        let lng_ext = if angle >= PI || south <= -90.0 || north >= 90.0 {
            None
        } else {
            let ratio = angle.sin() / lat.to_radians().cos();
            (ratio < 1.0)
                .then(|| ratio.asin().to_degrees() + BBOX_DEG_MARGIN)
                .filter(|ext| *ext < 180.0)
        };
        let (west, east) = match lng_ext {
            Some(ext) => {
                let mut west = lng - ext;
                if west < -180.0 {
                    // wrap around
                    west += 360.0;
                }
                let mut east = lng + ext;
                if east > 180.0 {
                    // wrap around
                    east -= 360.0;
                }
                (west, east)
            }
            None => (-180.0, 180.0),
        };
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(south, west),
            MapPoint::from_lat_lng_deg(north, east),
        );
        debug_assert!(bbox.is_valid());
        bbox
    }
}

pub trait Located {
    fn id(&self) -> Id;

    /// `None` if the stored position is invalid
    fn pos(&self) -> Option<MapPoint>;
}

impl Located for Poi {
    fn id(&self) -> Id {
        self.id
    }
    fn pos(&self) -> Option<MapPoint> {
        self.pos.is_valid().then_some(self.pos)
    }
}

/// Keeps the candidates within the search area, nearest first.
///
/// Candidates with equal distance are ordered by id. Candidates
/// without a valid position are never selected.
pub fn select_nearest<T: Located>(
    candidates: impl IntoIterator<Item = T>,
    proximity: &Proximity,
    limit: Option<usize>,
) -> Vec<T> {
    let mut selected: Vec<_> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let distance = MapPoint::distance(proximity.center, candidate.pos()?);
            (distance <= proximity.radius).then_some((distance, candidate))
        })
        .collect();
    selected.sort_by(|(d1, c1), (d2, c2)| {
        d1.to_meters()
            .total_cmp(&d2.to_meters())
            .then_with(|| c1.id().cmp(&c2.id()))
    });
    if let Some(limit) = limit {
        selected.truncate(limit);
    }
    selected.into_iter().map(|(_, candidate)| candidate).collect()
}
