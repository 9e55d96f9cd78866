/// One forecast tick: a wall-clock time (`HH:MM`) and an encoded intensity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sample {
    pub time: String,
    pub intensity: u8,
}

impl Sample {
    pub fn new(time: impl Into<String>, intensity: u8) -> Self {
        Self {
            time: time.into(),
            intensity,
        }
    }

    /// Precipitation rate in millimeters per hour.
    ///
    /// `rate = 10 ^ ((code - 109) / 32)`, so code 77 is 0.1 mm/h.
    pub fn mmpu(&self) -> f64 {
        mmpu(self.intensity)
    }

    /// Minute field of the time (text after the first `:`), if any.
    pub fn minutes(&self) -> Option<&str> {
        self.time.split_once(':').map(|(_, m)| m)
    }
}

/// Rate in mm/h for a raw intensity code.
pub fn mmpu(code: u8) -> f64 {
    10f64.powf((f64::from(code) - 109.0) / 32.0)
}
