use serde::{Serialize, Serializer};

/// Aggregate fundamental-frequency estimate for a clip
///
/// `Hz` always holds a finite value greater than zero; anything else is
/// folded into `Undefined` by [`PitchEstimate::from_hz`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PitchEstimate {
    /// No frame produced a usable pitch (silence, noise)
    Undefined,
    Hz(f64),
}

impl PitchEstimate {
    pub fn from_hz(hz: f64) -> Self {
        if hz.is_finite() && hz > 0.0 {
            PitchEstimate::Hz(hz)
        } else {
            PitchEstimate::Undefined
        }
    }

    pub fn hz(&self) -> Option<f64> {
        match self {
            PitchEstimate::Hz(hz) => Some(*hz),
            PitchEstimate::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, PitchEstimate::Hz(_))
    }

    /// Value shown to users: rounded to 2 decimals, `0.0` when undefined
    pub fn display_hz(&self) -> f64 {
        match self {
            PitchEstimate::Hz(hz) => (hz * 100.0).round() / 100.0,
            PitchEstimate::Undefined => 0.0,
        }
    }
}

impl Serialize for PitchEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.display_hz())
    }
}
