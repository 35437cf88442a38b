use rand::Rng;
use tracing::warn;

use crate::placer::PlaceError;

/// Container extent plus the inclusive per-axis size range a block may take.
///
/// Only constructible through [`Bounds::new`], so every instance has passed
/// validation: equal ranks, no zero extents, `1 <= min <= max` and
/// `min <= dimension` on every axis. `max` may still exceed the container;
/// such draws are rejected at placement time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    dimension: Vec<usize>,
    min: Vec<usize>,
    max: Vec<usize>,
}

impl Bounds {
    pub fn new(
        dimension: &[usize],
        max_block_size: &[usize],
        min_block_size: Option<&[usize]>,
    ) -> Result<Self, PlaceError> {
        let rank = dimension.len();
        if rank == 0 {
            return Err(PlaceError::EmptyDimension);
        }
        if let Some(axis) = dimension.iter().position(|&d| d == 0) {
            return Err(PlaceError::ZeroExtent { axis });
        }

        check_len("max_block_size", max_block_size, rank)?;
        check_positive("max_block_size", max_block_size)?;

        let min = match min_block_size {
            None => vec![1; rank],
            Some(min) => {
                check_len("min_block_size", min, rank)?;
                check_positive("min_block_size", min)?;
                min.to_vec()
            }
        };

        for axis in 0..rank {
            if min[axis] > max_block_size[axis] {
                return Err(PlaceError::MinExceedsMax {
                    axis,
                    min: min[axis],
                    max: max_block_size[axis],
                });
            }
            if min[axis] > dimension[axis] {
                return Err(PlaceError::MinExceedsDimension {
                    axis,
                    min: min[axis],
                    extent: dimension[axis],
                });
            }
        }

        if let Some(axis) = (0..rank).find(|&i| max_block_size[i] > dimension[i]) {
            warn!(
                axis,
                max = max_block_size[axis],
                extent = dimension[axis],
                "max_block_size exceeds the container; oversized draws will be rejected"
            );
        }

        Ok(Self {
            dimension: dimension.to_vec(),
            min,
            max: max_block_size.to_vec(),
        })
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.dimension.len()
    }

    pub fn dimension(&self) -> &[usize] {
        &self.dimension
    }

    pub fn min_size(&self) -> &[usize] {
        &self.min
    }

    pub fn max_size(&self) -> &[usize] {
        &self.max
    }

    /// Uniform size per axis in `min[i]..=max[i]`.
    pub(crate) fn draw_size<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        self.min
            .iter()
            .zip(&self.max)
            .map(|(&lo, &hi)| rng.random_range(lo..=hi))
            .collect()
    }

    /// Largest legal start per axis, or `None` if `size` sticks out of the container.
    pub(crate) fn max_start(&self, size: &[usize]) -> Option<Vec<usize>> {
        self.dimension
            .iter()
            .zip(size)
            .map(|(&d, &n)| d.checked_sub(n))
            .collect()
    }
}

fn check_len(name: &'static str, v: &[usize], rank: usize) -> Result<(), PlaceError> {
    if v.len() != rank {
        return Err(PlaceError::LengthMismatch {
            name,
            expected: rank,
            got: v.len(),
        });
    }
    Ok(())
}

fn check_positive(name: &'static str, v: &[usize]) -> Result<(), PlaceError> {
    match v.iter().position(|&n| n == 0) {
        Some(axis) => Err(PlaceError::ZeroSize { name, axis }),
        None => Ok(()),
    }
}
