/// Mean Earth radius in miles. Fixed for every distance computed by this crate.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance in miles between two points given in decimal degrees,
/// computed with the haversine formula.
///
/// The result is non-negative and symmetric in its two points.
pub fn haversine_miles(origin_lat: f64, origin_lon: f64, dest_lat: f64, dest_lon: f64) -> f64 {
    let origin_lat_rad = origin_lat.to_radians();
    let dest_lat_rad = dest_lat.to_radians();

    let delta_lat = dest_lat_rad - origin_lat_rad;
    let delta_lon = (dest_lon - origin_lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + origin_lat_rad.cos() * dest_lat_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}
