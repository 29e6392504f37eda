//! Heliocentric planet positions from mean Keplerian elements.
//!
//! Elements and rates are the "Keplerian Elements for Approximate
//! Positions of the Major Planets" table of E. M. Standish (JPL), valid
//! 1800–2050 AD, referred to the mean ecliptic and equinox of J2000.
//! Stated accuracy is tens of arcseconds for the inner planets and a few
//! arcminutes for the outer ones.

use std::f64::consts::TAU;

use crate::body::Body;

/// First JD covered by the element table (1800-Jan-01).
pub const VALID_FROM_JD: f64 = 2_378_496.5;
/// Last JD covered by the element table (2050-Dec-31).
pub const VALID_TO_JD: f64 = 2_470_171.5;

/// One row of the element table: J2000 value and rate per Julian century.
///
/// Columns: a (AU), e, I (deg), L mean longitude (deg),
/// ϖ longitude of perihelion (deg), Ω longitude of ascending node (deg).
#[derive(Debug, Clone, Copy)]
struct ElementRow {
    at_j2000: [f64; 6],
    per_century: [f64; 6],
}

#[rustfmt::skip]
const MERCURY: ElementRow = ElementRow {
    at_j2000:    [0.38709927, 0.20563593,  7.00497902, 252.25032350,  77.45779628,  48.33076593],
    per_century: [0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081],
};
#[rustfmt::skip]
const VENUS: ElementRow = ElementRow {
    at_j2000:    [0.72333566, 0.00677672,  3.39467605, 181.97909950, 131.60246718,  76.67984255],
    per_century: [0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418],
};
#[rustfmt::skip]
const EARTH_MOON_BARYCENTER: ElementRow = ElementRow {
    at_j2000:    [1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0],
    per_century: [0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0],
};
#[rustfmt::skip]
const MARS: ElementRow = ElementRow {
    at_j2000:    [1.52371034, 0.09339410,  1.84969142,  -4.55343205, -23.94362959,  49.55953891],
    per_century: [0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343],
};
#[rustfmt::skip]
const JUPITER: ElementRow = ElementRow {
    at_j2000:    [5.20288700, 0.04838624,  1.30439695,  34.39644051,  14.72847983, 100.47390909],
    per_century: [-0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106],
};
#[rustfmt::skip]
const SATURN: ElementRow = ElementRow {
    at_j2000:    [9.53667594, 0.05386179,  2.48599187,  49.95424423,  92.59887831, 113.66242448],
    per_century: [-0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794],
};
#[rustfmt::skip]
const URANUS: ElementRow = ElementRow {
    at_j2000:    [19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630,  74.01692503],
    per_century: [-0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281, 0.04240589],
};
#[rustfmt::skip]
const NEPTUNE: ElementRow = ElementRow {
    at_j2000:    [30.06992276, 0.00859048, 1.77004347, -55.12002969,  44.96476227, 131.78422574],
    per_century: [0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664],
};
#[rustfmt::skip]
const PLUTO: ElementRow = ElementRow {
    at_j2000:    [39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684],
    per_century: [-0.00031596, 0.00005170, 0.00004818, 145.20780515, -0.04062942, -0.01183482],
};

fn row_for(body: Body) -> Option<&'static ElementRow> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Pluto => Some(&PLUTO),
        Body::Sun | Body::Moon => None,
    }
}

/// Solve Kepler's equation `E - e sin E = M` (radians) by Newton iteration.
pub(crate) fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ea = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..12 {
        let delta = (ea - e * ea.sin() - mean_anomaly) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ea
}

/// Heliocentric ecliptic J2000 position in AU for a row at `t` centuries TT.
fn position_from_row(row: &ElementRow, t: f64) -> [f64; 3] {
    let el: [f64; 6] = std::array::from_fn(|k| row.at_j2000[k] + row.per_century[k] * t);
    let [a, e, incl, mean_lon, peri, node] = el;

    let omega = (peri - node).to_radians();
    let node = node.to_radians();
    let incl = incl.to_radians();
    // M in (-π, π] keeps the Newton start close to the root.
    let m = (mean_lon - peri).to_radians().rem_euclid(TAU);
    let m = if m > std::f64::consts::PI { m - TAU } else { m };

    let ea = solve_kepler(m, e);
    let xp = a * (ea.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ea.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ]
}

/// Heliocentric ecliptic J2000 position (AU) of a planet. `None` for Sun and Moon.
pub fn heliocentric_position(body: Body, t: f64) -> Option<[f64; 3]> {
    row_for(body).map(|row| position_from_row(row, t))
}

/// Heliocentric ecliptic J2000 position (AU) of the Earth–Moon barycentre.
pub fn earth_position(t: f64) -> [f64; 3] {
    position_from_row(&EARTH_MOON_BARYCENTER, t)
}
