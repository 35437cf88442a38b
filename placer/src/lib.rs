//! Randomized placement of non-overlapping axis-aligned blocks in an N-dimensional container.

pub mod block;
pub mod bounds;
pub mod placer;

pub use block::Block;
pub use bounds::Bounds;
pub use placer::{DEFAULT_MAX_ATTEMPTS, PlaceError, PlacementParams, place_blocks, place_blocks_with};
