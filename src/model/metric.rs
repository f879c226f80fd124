use super::Addition;
use std::fmt;
use std::str::FromStr;

/// Per-song field that can be averaged or ranked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Popularity,
    Danceability,
    Loudness,
    Energy,
    /// Explicit flag counted as 0 or 1
    Explicit,
    /// Release instant, ranked by epoch seconds
    TimeReleased,
}

impl Metric {
    /// Metrics averaged in the report, in report order
    pub const AVERAGED: [Metric; 5] = [
        Metric::Popularity,
        Metric::Loudness,
        Metric::Energy,
        Metric::Danceability,
        Metric::Explicit,
    ];

    /// Metrics listed in the song statistics section, in report order
    pub const RANKED: [Metric; 5] = [
        Metric::Popularity,
        Metric::Loudness,
        Metric::Energy,
        Metric::Danceability,
        Metric::TimeReleased,
    ];

    /// Numeric value of this metric for an addition
    pub fn value(&self, addition: &Addition) -> f64 {
        match self {
            Metric::Popularity => addition.popularity,
            Metric::Danceability => addition.danceability,
            Metric::Loudness => addition.loudness,
            Metric::Energy => addition.energy,
            Metric::Explicit => {
                if addition.explicit {
                    1.0
                } else {
                    0.0
                }
            }
            Metric::TimeReleased => addition.time_released.timestamp() as f64,
        }
    }

    /// Raw field value as written in the report
    pub fn display_value(&self, addition: &Addition) -> String {
        match self {
            Metric::Explicit => {
                if addition.explicit {
                    "True".to_string()
                } else {
                    "False".to_string()
                }
            }
            Metric::TimeReleased => addition
                .time_released
                .format("%Y-%m-%d %H:%M:%S%:z")
                .to_string(),
            _ => format_float(self.value(addition)),
        }
    }

    /// Token used in reports and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Popularity => "popularity",
            Metric::Danceability => "danceability",
            Metric::Loudness => "loudness",
            Metric::Energy => "energy",
            Metric::Explicit => "explicit",
            Metric::TimeReleased => "time_released",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popularity" => Ok(Metric::Popularity),
            "danceability" => Ok(Metric::Danceability),
            "loudness" => Ok(Metric::Loudness),
            "energy" => Ok(Metric::Energy),
            "explicit" => Ok(Metric::Explicit),
            "time_released" => Ok(Metric::TimeReleased),
            other => anyhow::bail!("Unknown metric: {:?}", other),
        }
    }
}

/// Format a float the way the report expects: whole numbers keep one decimal
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Round to two decimals, then format with [`format_float`]
///
/// Rounds the exact binary value with ties to even, so `0.125` becomes
/// `0.12` and `2.675` (stored just below) becomes `2.67`.
pub fn format_rounded(value: f64) -> String {
    let rounded = format!("{:.2}", value).parse().unwrap_or(value);
    format_float(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::addition::fixtures::addition;

    #[test]
    fn test_metric_tokens_roundtrip() {
        for metric in Metric::AVERAGED.iter().chain(Metric::RANKED.iter()) {
            assert_eq!(metric.name().parse::<Metric>().unwrap(), *metric);
        }
        assert!("tempo".parse::<Metric>().is_err());
    }

    #[test]
    fn test_explicit_counts_as_zero_or_one() {
        let mut add = addition("Song", "alice");
        assert_eq!(Metric::Explicit.value(&add), 0.0);
        add.explicit = true;
        assert_eq!(Metric::Explicit.value(&add), 1.0);
    }

    #[test]
    fn test_display_values() {
        let add = addition("Song", "alice");
        assert_eq!(Metric::Popularity.display_value(&add), "50.0");
        assert_eq!(Metric::Loudness.display_value(&add), "-6.0");
        assert_eq!(
            Metric::TimeReleased.display_value(&add),
            "2020-01-01 00:00:00+00:00"
        );
    }

    #[test]
    fn test_format_rounded() {
        assert_eq!(format_rounded(15.0), "15.0");
        assert_eq!(format_rounded(2.0 / 3.0), "0.67");
        assert_eq!(format_rounded(-5.4321), "-5.43");
    }

    #[test]
    fn test_format_rounded_ties_to_even() {
        assert_eq!(format_rounded(0.125), "0.12");
        assert_eq!(format_rounded(0.625), "0.62");
        assert_eq!(format_rounded(2.675), "2.67");
        assert_eq!(format_rounded(0.375), "0.38");
        assert_eq!(format_rounded(14.999), "15.0");
    }
}
