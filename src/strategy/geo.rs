// src/strategy/geo.rs

//! Great-circle distance between two coordinates.

use crate::model::supplier::Coordinates;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres, rounded to one decimal place.
///
/// Inputs are assumed to be finite decimal degrees; callers validate
/// coordinates before scoring.
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round_to_tenth(EARTH_RADIUS_KM * c)
}

pub fn distance_between(from: &Coordinates, to: &Coordinates) -> f64 {
    distance_km(from.lat, from.lng, to.lat, to.lng)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        assert_eq!(distance_km(-23.561684, -46.655291, -23.561684, -46.655291), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        assert_eq!(distance_km(0.0, 0.0, 1.0, 0.0), 111.2);
    }

    #[test]
    fn sao_paulo_to_rio() {
        let sp = Coordinates::new(-23.5505, -46.6333);
        let rio = Coordinates::new(-22.9068, -43.1729);
        assert_eq!(distance_between(&sp, &rio), 360.7);
        assert_eq!(distance_between(&rio, &sp), 360.7);
    }

    #[test]
    fn rounds_to_one_decimal() {
        // 0.36 degrees of latitude is 40.03 km
        assert_eq!(distance_km(-23.561684, -46.655291, -23.201684, -46.655291), 40.0);
    }
}
