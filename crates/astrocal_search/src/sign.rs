//! Zodiac signs: twelve equal 30-degree arcs of ecliptic longitude.
//!
//! Aries starts at 0 deg. Each sign spans exactly 30 degrees:
//! Aries = [0, 30), Taurus = [30, 60), ..., Pisces = [330, 360).

use std::fmt::{Display, Formatter};

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Unicode zodiac glyph (U+2648..U+2653).
    pub const fn glyph(self) -> char {
        match self {
            Self::Aries => '♈',
            Self::Taurus => '♉',
            Self::Gemini => '♊',
            Self::Cancer => '♋',
            Self::Leo => '♌',
            Self::Virgo => '♍',
            Self::Libra => '♎',
            Self::Scorpio => '♏',
            Self::Sagittarius => '♐',
            Self::Capricorn => '♑',
            Self::Aquarius => '♒',
            Self::Pisces => '♓',
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign for a 0-based index; indices wrap modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Zodiac index of a longitude: `floor(lon mod 360 / 30)`, in [0, 12).
pub fn sign_index(lon_deg: f64) -> u8 {
    let lon = lon_deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    ((lon / 30.0).floor() as u8).min(11)
}

/// Zodiac sign of a longitude.
pub fn sign_from_longitude(lon_deg: f64) -> ZodiacSign {
    ZodiacSign::from_index(sign_index(lon_deg))
}
