//! Planets, zodiac signs, and the four Western elements.

use serde::{Deserialize, Serialize};

/// The ten placed bodies, in traditional order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All ten bodies in order (index 0 = Sun).
pub const ALL_PLANETS: [Planet; 10] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
];

impl Planet {
    /// 0-based index (Sun=0 .. Pluto=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }
}

/// The twelve zodiac signs, each spanning 30 degrees from Aries at 0.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
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

/// All twelve signs in order (index 0 = Aries).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Element of the sign: the four elements repeat every four signs.
    pub const fn element(self) -> WesternElement {
        ALL_WESTERN_ELEMENTS[(self.index() % 4) as usize]
    }

    /// Sign containing an ecliptic longitude in degrees.
    pub fn from_longitude(longitude_deg: f64) -> Sign {
        let lon = longitude_deg.rem_euclid(360.0);
        let index = ((lon / 30.0).floor() as usize) % 12;
        ALL_SIGNS[index]
    }
}

/// The four Western elements, in sign-cycle order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WesternElement {
    Fire,
    Earth,
    Air,
    Water,
}

/// All four elements in order (index 0 = Fire).
pub const ALL_WESTERN_ELEMENTS: [WesternElement; 4] = [
    WesternElement::Fire,
    WesternElement::Earth,
    WesternElement::Air,
    WesternElement::Water,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn element_cycle() {
        assert_eq!(Sign::Aries.element(), WesternElement::Fire);
        assert_eq!(Sign::Taurus.element(), WesternElement::Earth);
        assert_eq!(Sign::Gemini.element(), WesternElement::Air);
        assert_eq!(Sign::Cancer.element(), WesternElement::Water);
        assert_eq!(Sign::Leo.element(), WesternElement::Fire);
        assert_eq!(Sign::Pisces.element(), WesternElement::Water);
    }

    #[test]
    fn sign_from_longitude_boundaries() {
        assert_eq!(Sign::from_longitude(0.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(29.999), Sign::Aries);
        assert_eq!(Sign::from_longitude(30.0), Sign::Taurus);
        assert_eq!(Sign::from_longitude(359.9), Sign::Pisces);
        assert_eq!(Sign::from_longitude(360.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(-10.0), Sign::Pisces);
    }

    #[test]
    fn planet_indices_sequential() {
        for (i, p) in ALL_PLANETS.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
        }
    }
}
