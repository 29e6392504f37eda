//! Ecliptic frame corrections and Cartesian → spherical conversion.
//!
//! - General precession in longitude (IAU 2006, Capitaine et al. 2003)
//! - Nutation in longitude, four leading IAU 1980 terms (Meeus ch. 22)
//! - Annual aberration of the Sun (Meeus ch. 25)

/// Arcseconds per degree.
const ARCSEC_PER_DEG: f64 = 3600.0;

/// Which ecliptic longitudes are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EclipticFrame {
    /// Geometric longitude, mean ecliptic and equinox of J2000.0.
    J2000,
    /// Apparent tropical longitude, true equinox of date.
    #[default]
    OfDate,
}

/// Accumulated general precession in longitude since J2000.0, in degrees.
pub fn precession_in_longitude_deg(t: f64) -> f64 {
    (5029.0966 * t + 1.111_13 * t * t - 0.000_006 * t * t * t) / ARCSEC_PER_DEG
}

/// Nutation in longitude Δψ in degrees.
pub fn nutation_in_longitude_deg(t: f64) -> f64 {
    let omega = (125.044_52 - 1934.136_261 * t).to_radians();
    let sun_lon = (280.4665 + 36_000.7698 * t).to_radians();
    let moon_lon = (218.3165 + 481_267.8813 * t).to_radians();
    let arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * sun_lon).sin()
        - 0.23 * (2.0 * moon_lon).sin()
        + 0.21 * (2.0 * omega).sin();
    arcsec / ARCSEC_PER_DEG
}

/// Annual aberration of the Sun's longitude in degrees, for Earth–Sun distance `r_au`.
pub fn solar_aberration_deg(r_au: f64) -> f64 {
    -20.4898 / r_au / ARCSEC_PER_DEG
}

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from origin in AU.
    pub distance_au: f64,
}

/// Convert Cartesian `[x, y, z]` (AU) to spherical coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance_au: 0.0,
        };
    }

    SphericalCoords {
        lon_deg: y.atan2(x).to_degrees().rem_euclid(360.0),
        lat_deg: (z / r).asin().to_degrees(),
        distance_au: r,
    }
}
