//! Board dimension and fleet composition.

use alloc::vec::Vec;

use super::common::ConfigError;

pub const DEFAULT_BOARD_SIZE: usize = 6;
pub const DEFAULT_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];
/// Largest board dimension accepted. Row labels are rendered at most three wide.
pub const MAX_BOARD_SIZE: usize = 99;

/// Random draws allowed for a single vessel before the board is abandoned.
pub const DEFAULT_ATTEMPTS_PER_VESSEL: usize = 2000;
/// Whole-board restarts allowed before generation gives up.
pub const DEFAULT_MAX_RESTARTS: usize = 1000;

/// Parameters consumed by the fleet generator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct FleetConfig {
    /// Board dimension N (the board is N×N).
    pub size: usize,
    /// Vessel lengths. The generator places the longest first whatever the order here.
    pub lengths: Vec<usize>,
    pub attempts_per_vessel: usize,
    pub max_restarts: usize,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            lengths: DEFAULT_FLEET.to_vec(),
            attempts_per_vessel: DEFAULT_ATTEMPTS_PER_VESSEL,
            max_restarts: DEFAULT_MAX_RESTARTS,
        }
    }
}

impl FleetConfig {
    /// Default budgets with a custom board and fleet.
    pub fn new(size: usize, lengths: Vec<usize>) -> Self {
        Self {
            size,
            lengths,
            ..Self::default()
        }
    }

    /// Total number of cells occupied by the fleet.
    pub fn total_cells(&self) -> usize {
        self.lengths.iter().sum()
    }

    /// Reject configurations that can never produce a board.
    ///
    /// This only catches the obvious cases. A fleet that passes may still be
    /// impossible to lay out under the no-touch rule, in which case the
    /// generator stops after `max_restarts`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.lengths.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if self.attempts_per_vessel == 0 || self.max_restarts == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        for &length in &self.lengths {
            if length == 0 {
                return Err(ConfigError::ZeroLength);
            }
            if length > self.size {
                return Err(ConfigError::VesselTooLong {
                    length,
                    size: self.size,
                });
            }
        }
        // size is capped above, so the area cannot overflow
        let area = self.size * self.size;
        let cells = self
            .lengths
            .iter()
            .try_fold(0usize, |acc, &len| acc.checked_add(len))
            .unwrap_or(usize::MAX);
        if cells > area {
            return Err(ConfigError::FleetTooLarge { cells, area });
        }
        Ok(())
    }

    /// Read a configuration from a JSON file. Missing fields take their defaults.
    #[cfg(feature = "std")]
    pub fn from_json_file(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let raw = std::fs::read_to_string(path)
            .with_context(|| std::format!("reading fleet config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| std::format!("parsing fleet config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }
}
