use super::PitchEstimate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse vocal range bucket
///
/// The cutpoints (220/440/1000 Hz) are kept exactly as they have always been
/// reported to users; they are not calibrated voice-type boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VocalRange {
    Unknown,
    Bass,
    Tenor,
    Alto,
    Soprano,
}

/// Upper bound (inclusive) of the Bass bucket in Hz
pub const BASS_MAX_HZ: f64 = 220.0;
/// Upper bound (inclusive) of the Tenor bucket in Hz
pub const TENOR_MAX_HZ: f64 = 440.0;
/// Upper bound (inclusive) of the Alto bucket in Hz
pub const ALTO_MAX_HZ: f64 = 1000.0;

impl VocalRange {
    /// Classify a pitch estimate, first matching rule wins
    pub fn classify(estimate: PitchEstimate) -> Self {
        match estimate {
            PitchEstimate::Undefined => VocalRange::Unknown,
            PitchEstimate::Hz(hz) if hz > ALTO_MAX_HZ => VocalRange::Soprano,
            PitchEstimate::Hz(hz) if hz > TENOR_MAX_HZ => VocalRange::Alto,
            PitchEstimate::Hz(hz) if hz > BASS_MAX_HZ => VocalRange::Tenor,
            PitchEstimate::Hz(hz) if hz > 0.0 => VocalRange::Bass,
            // Only reachable by building `Hz` by hand with a bad value
            PitchEstimate::Hz(_) => VocalRange::Unknown,
        }
    }

    /// Position in Bass < Tenor < Alto < Soprano; `None` for Unknown
    pub fn rank(&self) -> Option<u8> {
        match self {
            VocalRange::Unknown => None,
            VocalRange::Bass => Some(0),
            VocalRange::Tenor => Some(1),
            VocalRange::Alto => Some(2),
            VocalRange::Soprano => Some(3),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VocalRange::Unknown => "Unknown",
            VocalRange::Bass => "Bass",
            VocalRange::Tenor => "Tenor",
            VocalRange::Alto => "Alto",
            VocalRange::Soprano => "Soprano",
        }
    }
}

/// Classify a pitch estimate into a vocal range
pub fn classify(estimate: PitchEstimate) -> VocalRange {
    VocalRange::classify(estimate)
}

impl fmt::Display for VocalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VocalRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unknown" => Ok(VocalRange::Unknown),
            "bass" => Ok(VocalRange::Bass),
            "tenor" => Ok(VocalRange::Tenor),
            "alto" => Ok(VocalRange::Alto),
            "soprano" => Ok(VocalRange::Soprano),
            _ => Err(format!("Unknown vocal range: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hz(value: f64) -> PitchEstimate {
        PitchEstimate::from_hz(value)
    }

    #[test]
    fn test_undefined_is_unknown() {
        assert_eq!(classify(PitchEstimate::Undefined), VocalRange::Unknown);
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(classify(hz(220.0)), VocalRange::Bass);
        assert_eq!(classify(hz(220.0001)), VocalRange::Tenor);
        assert_eq!(classify(hz(440.0)), VocalRange::Tenor);
        assert_eq!(classify(hz(440.0001)), VocalRange::Alto);
        assert_eq!(classify(hz(1000.0)), VocalRange::Alto);
        assert_eq!(classify(hz(1000.0001)), VocalRange::Soprano);
    }

    #[test]
    fn test_low_pitches_are_bass() {
        assert_eq!(classify(hz(0.01)), VocalRange::Bass);
        assert_eq!(classify(hz(150.0)), VocalRange::Bass);
    }

    #[test]
    fn test_hand_built_invalid_estimate() {
        assert_eq!(classify(PitchEstimate::Hz(-3.0)), VocalRange::Unknown);
    }

    #[test]
    fn test_monotonic_and_deterministic() {
        let mut previous_rank = 0;
        let mut p = 1.0;
        while p < 5000.0 {
            let label = classify(hz(p));
            assert_eq!(label, classify(hz(p)));
            let rank = label.rank().expect("defined pitch must have a rank");
            assert!(rank >= previous_rank, "rank dropped at {} Hz", p);
            previous_rank = rank;
            p += 0.37;
        }
        assert_eq!(previous_rank, 3);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("tenor".parse::<VocalRange>(), Ok(VocalRange::Tenor));
        assert_eq!(" SOPRANO ".parse::<VocalRange>(), Ok(VocalRange::Soprano));
        assert!("baritone".parse::<VocalRange>().is_err());
        assert_eq!(VocalRange::Alto.to_string(), "Alto");
    }
}
