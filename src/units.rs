use core::fmt;

use crate::*;

pub const KM_TO_MI: f64 = 0.621371192;
pub const MI_TO_KM: f64 = 1.0 / KM_TO_MI;

pub const MIN_RADIUS_KM: f64 = 0.1;
pub const MAX_RADIUS_KM: f64 = 150.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Miles for English language tags (`en`, `en-US`, ...), kilometers otherwise.
    pub fn for_language(tag: &str) -> Self {
        match tag.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("en") => DistanceUnit::Miles,
            _ => DistanceUnit::Kilometers,
        }
    }

    pub fn to_kilometers(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => value,
            DistanceUnit::Miles => value * MI_TO_KM,
        }
    }

    /// Exact conversion, see [`DistanceUnit::display_from_kilometers`] for whole miles.
    pub fn from_kilometers(self, kilometers: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => kilometers,
            DistanceUnit::Miles => kilometers * KM_TO_MI,
        }
    }

    /// Value shown to users: kilometers as is, miles rounded to whole miles.
    pub fn display_from_kilometers(self, kilometers: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => kilometers,
            DistanceUnit::Miles => (kilometers * KM_TO_MI).round(),
        }
    }

    /// Largest radius offered in this unit, whole miles when in miles.
    pub fn max_radius(self) -> f64 {
        self.display_from_kilometers(MAX_RADIUS_KM)
    }

    pub fn min_radius(self) -> f64 {
        1.0
    }

    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Radius actually handed to the generator: NaN counts as zero, then the
/// result is held to [`MIN_RADIUS_KM`, `MAX_RADIUS_KM`].
pub fn effective_radius_km(radius_km: f64) -> f64 {
    let radius_km = if radius_km.is_nan() { 0.0 } else { radius_km };
    clamp(radius_km, MIN_RADIUS_KM, MAX_RADIUS_KM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("en", DistanceUnit::Miles)]
    #[case("en-US", DistanceUnit::Miles)]
    #[case("EN-gb", DistanceUnit::Miles)]
    #[case("de", DistanceUnit::Kilometers)]
    #[case("nl-NL", DistanceUnit::Kilometers)]
    #[case("e", DistanceUnit::Kilometers)]
    #[case("", DistanceUnit::Kilometers)]
    #[case("ñe", DistanceUnit::Kilometers)]
    fn picks_unit_for_language(#[case] tag: &str, #[case] expected: DistanceUnit) {
        assert_eq!(DistanceUnit::for_language(tag), expected);
    }

    #[rstest]
    #[case(DistanceUnit::Kilometers, 20.0, 20.0)]
    #[case(DistanceUnit::Miles, 1.0, 1.609344)]
    #[case(DistanceUnit::Miles, 93.0, 149.669)]
    fn converts_to_kilometers(#[case] unit: DistanceUnit, #[case] value: f64, #[case] kilometers: f64) {
        assert_abs_diff_eq!(unit.to_kilometers(value), kilometers, epsilon = 1e-3);
        assert_abs_diff_eq!(unit.from_kilometers(unit.to_kilometers(value)), value, epsilon = 1e-9);
    }

    #[rstest]
    #[case(DistanceUnit::Kilometers, 20.0, 20.0)]
    #[case(DistanceUnit::Kilometers, 0.1, 0.1)]
    #[case(DistanceUnit::Miles, 20.0, 12.0)]
    #[case(DistanceUnit::Miles, 150.0, 93.0)]
    #[case(DistanceUnit::Miles, 0.5, 0.0)]
    fn displays_whole_miles(#[case] unit: DistanceUnit, #[case] kilometers: f64, #[case] expected: f64) {
        assert_eq!(unit.display_from_kilometers(kilometers), expected);
    }

    #[test]
    fn max_radius_in_whole_miles() {
        assert_eq!(DistanceUnit::Kilometers.max_radius(), 150.0);
        assert_eq!(DistanceUnit::Miles.max_radius(), 93.0);
        assert_eq!(DistanceUnit::Miles.min_radius(), 1.0);
    }

    #[test]
    fn displays_symbol() {
        assert_eq!(format!("{} {}", DistanceUnit::Kilometers, DistanceUnit::Miles), "km mi");
    }

    #[rstest]
    #[case(20.0, 20.0)]
    #[case(0.0, 0.1)]
    #[case(-5.0, 0.1)]
    #[case(0.05, 0.1)]
    #[case(150.0, 150.0)]
    #[case(1000.0, 150.0)]
    #[case(f64::NAN, 0.1)]
    #[case(f64::INFINITY, 150.0)]
    #[case(f64::NEG_INFINITY, 0.1)]
    fn holds_radius_to_supported_range(#[case] radius_km: f64, #[case] expected: f64) {
        assert_eq!(effective_radius_km(radius_km), expected);
    }
}
