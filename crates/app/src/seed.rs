use maze_core::{maze_rng, runtime_seed};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn from_flag(flag: Option<u64>) -> Self {
        match flag {
            Some(seed) => Self::Cli(seed),
            None => Self::Generated(runtime_seed()),
        }
    }

    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }

    /// A seed the user asked for stays pinned across regenerations.
    pub fn pinned(self) -> Option<u64> {
        match self {
            Self::Cli(seed) => Some(seed),
            Self::Generated(_) => None,
        }
    }
}

/// Fresh seeds for unpinned regenerations, reproducible from the first seed of the run.
pub struct SeedStream {
    rng: ChaCha8Rng,
}

impl SeedStream {
    pub fn new(origin: u64) -> Self {
        Self { rng: maze_rng(origin) }
    }

    pub fn next_seed(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

/// Accepts only digits; an empty buffer means "unpin".
pub fn parse_seed_input(buffer: &str) -> Result<Option<u64>, String> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<u64>().map(Some).map_err(|_| format!("seed value '{trimmed}' must be a number"))
}
