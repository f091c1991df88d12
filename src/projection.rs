use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::config::QuizConfig;
use crate::model::{GeoPoint, MapPoint};

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Mercator projection onto the fixed-size map raster.
///
/// Longitude maps linearly onto `[0, width]`. Latitude goes through
/// `ln(tan(pi/4 + lat/2))`, scaled so that the band `[-pi, pi]` of the Mercator
/// ordinate fills `[height, 0]`. That band ends near ±85.05°; latitudes beyond it
/// land outside the raster, and the poles themselves are singular (±infinity).
/// Neither case is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateProjector {
    width: f64,
    height: f64,
}

impl CoordinateProjector {
    pub fn new(width: f64, height: f64) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "CoordinateProjector: raster must have positive size, got {width}x{height}"
        );
        Self { width, height }
    }

    pub fn from_config(config: &QuizConfig) -> Self {
        Self::new(config.map_width, config.map_height)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn to_point(&self, geo: GeoPoint) -> MapPoint {
        let x = (geo.longitude + 180.0) / 360.0 * self.width;
        let merc_n = (FRAC_PI_4 + geo.latitude.to_radians() / 2.0).tan().ln();
        let y = (1.0 - merc_n / PI) / 2.0 * self.height;
        MapPoint::new(x, y)
    }

    pub fn to_coordinates(&self, point: MapPoint) -> GeoPoint {
        let longitude = point.x / self.width * 360.0 - 180.0;
        let merc_n = PI * (1.0 - 2.0 * (point.y / self.height));
        let lat_rad = 2.0 * merc_n.exp().atan() - FRAC_PI_2;
        GeoPoint::new(lat_rad.to_degrees(), longitude)
    }

    pub fn contains(&self, point: MapPoint) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Pull a click back inside the raster.
    pub fn clamp_point(&self, point: MapPoint) -> MapPoint {
        MapPoint::new(point.x.clamp(0.0, self.width), point.y.clamp(0.0, self.height))
    }

    /// Whether a click lands within `radius` raster pixels of a pin.
    pub fn hit_pin(&self, click: MapPoint, pin: MapPoint, radius: f64) -> bool {
        click.distance_to(pin) <= radius
    }
}

/// Great-circle distance in kilometres on a spherical Earth.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
