//! Module: pulse
//!
//! Purpose: Pulse train representation. A train is a flat list of
//! microsecond durations, alternating mark (carrier on) and space
//! (carrier off), always starting with a mark.
//!
//! Memory layout:
//! ```text
//! index:  0     1      2     3      ...  2k    2k+1
//!        [mark][space][mark][space] ... [mark][space]
//! ```

/// Carrier level of a single pulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Carrier modulated, LED on.
    Mark,
    /// Carrier off.
    Space,
}

impl Level {
    /// Label used by the text dump.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Mark => "pulse",
            Level::Space => "space",
        }
    }
}

/// One timed interval of a pulse train.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pulse {
    pub level: Level,
    pub duration_us: u32,
}

/// Ordered mark/space durations of one encoded message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PulseTrain {
    durations: Vec<u32>,
}

impl PulseTrain {
    /// Create an empty train.
    pub const fn new() -> Self {
        Self {
            durations: Vec::new(),
        }
    }

    /// Append a mark followed by a space.
    ///
    /// Only pairs are appended, so the length stays even.
    #[inline]
    pub fn push_pair(&mut self, mark_us: u32, space_us: u32) {
        self.durations.push(mark_us);
        self.durations.push(space_us);
    }

    /// Remove all durations.
    pub fn clear(&mut self) {
        self.durations.clear();
    }

    /// Raw durations.
    pub fn as_slice(&self) -> &[u32] {
        &self.durations
    }

    /// Number of durations (marks + spaces).
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Iterate durations tagged with their carrier level.
    pub fn pulses(&self) -> impl Iterator<Item = Pulse> + '_ {
        self.durations.iter().enumerate().map(|(i, &duration_us)| Pulse {
            level: if i % 2 == 0 { Level::Mark } else { Level::Space },
            duration_us,
        })
    }

    /// Sum of all durations in microseconds.
    pub fn total_duration_us(&self) -> u64 {
        self.durations.iter().map(|&d| u64::from(d)).sum()
    }
}

impl From<Vec<u32>> for PulseTrain {
    fn from(durations: Vec<u32>) -> Self {
        Self { durations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pair_keeps_even_length() {
        let mut train = PulseTrain::new();
        assert!(train.is_empty());

        train.push_pair(3500, 1700);
        train.push_pair(440, 400);
        assert_eq!(train.len(), 4);
        assert_eq!(train.as_slice(), &[3500, 1700, 440, 400]);
    }

    #[test]
    fn test_pulses_alternate_levels() {
        let train = PulseTrain::from(vec![10, 20, 30, 40]);
        let levels: Vec<Level> = train.pulses().map(|p| p.level).collect();
        assert_eq!(
            levels,
            vec![Level::Mark, Level::Space, Level::Mark, Level::Space]
        );
    }

    #[test]
    fn test_total_duration() {
        let train = PulseTrain::from(vec![u32::MAX, u32::MAX]);
        assert_eq!(train.total_duration_us(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_clear() {
        let mut train = PulseTrain::from(vec![1, 2]);
        train.clear();
        assert!(train.is_empty());
    }
}
