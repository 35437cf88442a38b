use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{block::Block, bounds::Bounds};

pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaceError {
    #[error("container dimension must have at least one axis")]
    EmptyDimension,
    #[error("container axis {axis} has zero extent")]
    ZeroExtent { axis: usize },
    #[error("length of `{name}` is {got}, expected {expected} to match `dimension`")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("all elements of `{name}` must be >= 1 (axis {axis} is 0)")]
    ZeroSize { name: &'static str, axis: usize },
    #[error("min_block_size {min} exceeds max_block_size {max} on axis {axis}")]
    MinExceedsMax { axis: usize, min: usize, max: usize },
    #[error("min_block_size {min} exceeds the container extent {extent} on axis {axis}")]
    MinExceedsDimension {
        axis: usize,
        min: usize,
        extent: usize,
    },
    #[error("max_attempts_per_block must be positive")]
    ZeroAttempts,
}

/// Inputs of one placement run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementParams {
    pub dimension: Vec<usize>,
    pub n_blocks: usize,
    pub max_block_size: Vec<usize>,
    pub min_block_size: Option<Vec<usize>>,
    pub max_attempts_per_block: usize,
    pub seed: Option<u64>,
}

impl PlacementParams {
    pub fn new(dimension: &[usize], n_blocks: usize, max_block_size: &[usize]) -> Self {
        Self {
            dimension: dimension.to_vec(),
            n_blocks,
            max_block_size: max_block_size.to_vec(),
            min_block_size: None,
            max_attempts_per_block: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }

    pub fn with_min_block_size(mut self, min_block_size: &[usize]) -> Self {
        self.min_block_size = Some(min_block_size.to_vec());
        self
    }

    pub fn with_max_attempts(mut self, max_attempts_per_block: usize) -> Self {
        self.max_attempts_per_block = max_attempts_per_block;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn bounds(&self) -> Result<Bounds, PlaceError> {
        if self.max_attempts_per_block == 0 {
            return Err(PlaceError::ZeroAttempts);
        }
        Bounds::new(
            &self.dimension,
            &self.max_block_size,
            self.min_block_size.as_deref(),
        )
    }
}

/// Places up to `params.n_blocks` pairwise disjoint blocks.
///
/// A seeded run is reproducible on every platform; without a seed the
/// generator is drawn from OS entropy. Parameter errors are returned before
/// any draw. A slot that exhausts its attempt budget is skipped with a
/// warning, so the result may be shorter than requested.
pub fn place_blocks(params: &PlacementParams) -> Result<Vec<Block>, PlaceError> {
    let mut rng = match params.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
    };
    place_blocks_with(params, &mut rng)
}

/// Same as [`place_blocks`] but draws from a caller-owned generator; `params.seed` is ignored.
pub fn place_blocks_with<R: Rng + ?Sized>(
    params: &PlacementParams,
    rng: &mut R,
) -> Result<Vec<Block>, PlaceError> {
    let bounds = params.bounds()?;
    Ok(place(
        &bounds,
        params.n_blocks,
        params.max_attempts_per_block,
        rng,
    ))
}

fn place<R: Rng + ?Sized>(
    bounds: &Bounds,
    n_blocks: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Vec<Block> {
    let mut placed: Vec<Block> = Vec::with_capacity(n_blocks);

    for slot in 0..n_blocks {
        match try_place_one(bounds, &placed, max_attempts, rng) {
            Some(block) => placed.push(block),
            None => warn!(
                slot,
                attempts = max_attempts,
                placed = placed.len(),
                requested = n_blocks,
                "failed to place block; consider more attempts or smaller/fewer blocks"
            ),
        }
    }

    debug!(placed = placed.len(), requested = n_blocks, "placement done");
    placed
}

fn try_place_one<R: Rng + ?Sized>(
    bounds: &Bounds,
    placed: &[Block],
    max_attempts: usize,
    rng: &mut R,
) -> Option<Block> {
    for _ in 0..max_attempts {
        let size = bounds.draw_size(rng);
        let Some(max_start) = bounds.max_start(&size) else {
            continue;
        };
        let start: Vec<usize> = max_start
            .iter()
            .map(|&hi| if hi == 0 { 0 } else { rng.random_range(0..=hi) })
            .collect();

        let candidate = Block::new(start, size);
        debug_assert!(candidate.fits_within(bounds.dimension()));
        if !placed.iter().any(|b| b.overlaps(&candidate)) {
            return Some(candidate);
        }
    }
    None
}
