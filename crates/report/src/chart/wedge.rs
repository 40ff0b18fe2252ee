//! Longitude wedge on the globe for a selected slice.
//!
//! Slices are numbered eastward from the antimeridian: slice 0 spans
//! `[-180, -180 + 360 / slices)`. The polygon narrows to a point at each pole so
//! the highlighted area reads as a segment of an orange.

use crate::{Error, Result};
use serde::Serialize;
use serde_json::{json, Value};
use sunspot_core::WindowConfig;

/// Latitude where the wedge edges start converging towards the poles.
const EDGE_LATITUDE: f64 = 85.0;
const POLE_LATITUDE: f64 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Wedge {
    pub slice: usize,
    pub slices: usize,
    pub start_lon: f64,
    pub end_lon: f64,
    pub center_lon: f64,
}

impl Wedge {
    pub fn new(slice: usize, config: &WindowConfig) -> Result<Self> {
        let slices = config.slices();
        if slice >= slices {
            return Err(Error::SliceOutOfRange { slice, slices });
        }
        let angle = 360.0 / slices as f64;
        let start_lon = -180.0 + slice as f64 * angle;
        Ok(Self {
            slice,
            slices,
            start_lon,
            end_lon: start_lon + angle,
            center_lon: start_lon + angle / 2.0,
        })
    }

    /// Closed ring of `[lon, lat]` points.
    pub fn polygon(&self) -> Vec<[f64; 2]> {
        let (start, end, center) = (self.start_lon, self.end_lon, self.center_lon);
        vec![
            [center, POLE_LATITUDE],
            [start, EDGE_LATITUDE],
            [start, -EDGE_LATITUDE],
            [center, -POLE_LATITUDE],
            [end, -EDGE_LATITUDE],
            [end, EDGE_LATITUDE],
            [center, POLE_LATITUDE],
        ]
    }

    /// GeoJSON `FeatureCollection` holding the wedge polygon.
    pub fn geojson(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {
                    "slice": self.slice,
                    "centerLon": self.center_lon,
                },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [self.polygon()],
                },
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_slices_are_45_degrees() {
        let config = WindowConfig::default();
        let wedge = Wedge::new(3, &config).unwrap();
        assert_eq!(wedge.start_lon, -45.0);
        assert_eq!(wedge.end_lon, 0.0);
        assert_eq!(wedge.center_lon, -22.5);

        let first = Wedge::new(0, &config).unwrap();
        assert_eq!(first.start_lon, -180.0);
        let last = Wedge::new(7, &config).unwrap();
        assert_eq!(last.end_lon, 180.0);
    }

    #[test]
    fn polygon_is_closed() {
        let wedge = Wedge::new(5, &WindowConfig::default()).unwrap();
        let ring = wedge.polygon();
        assert_eq!(ring.len(), 7);
        assert_eq!(ring.first(), ring.last());
        assert!(ring
            .iter()
            .all(|[lon, _]| *lon >= wedge.start_lon && *lon <= wedge.end_lon));
    }

    #[test]
    fn geojson_shape() {
        let wedge = Wedge::new(1, &WindowConfig::default()).unwrap();
        let value = wedge.geojson();
        assert_eq!(value["type"], "FeatureCollection");
        let geometry = &value["features"][0]["geometry"];
        assert_eq!(geometry["type"], "Polygon");
        assert_eq!(geometry["coordinates"][0][1][0], -135.0);
        assert_eq!(geometry["coordinates"][0][1][1], 85.0);
    }

    #[test]
    fn rejects_out_of_range_slice() {
        assert!(matches!(
            Wedge::new(8, &WindowConfig::default()),
            Err(Error::SliceOutOfRange {
                slice: 8,
                slices: 8
            })
        ));
    }
}
