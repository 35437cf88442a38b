use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use placer::{Block, PlaceError, PlacementParams, place_blocks};
use tracing::debug;

use crate::classes::ClassAssignment;

/// A placed block together with the class it was painted with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaintedRegion {
    pub block: Block,
    pub class: ClassAssignment,
}

impl PaintedRegion {
    #[inline]
    pub fn x(&self) -> u32 {
        self.block.start()[1] as u32
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.block.start()[0] as u32
    }

    #[inline]
    pub fn w(&self) -> u32 {
        self.block.size()[1] as u32
    }

    #[inline]
    pub fn h(&self) -> u32 {
        self.block.size()[0] as u32
    }
}

pub struct Composite {
    pub mask: RgbImage,
    /// In acceptance order, i.e. the order they were painted.
    pub regions: Vec<PaintedRegion>,
    pub requested: usize,
}

impl Composite {
    pub fn painted_pixels(&self) -> usize {
        self.regions.iter().map(|r| r.block.volume()).sum()
    }
}

/// Paints one square-ish block per class assignment onto a black canvas.
pub struct MaskCompositor {
    width: u32,
    height: u32,
    min_block: usize,
    max_block: usize,
    max_attempts: usize,
}

impl MaskCompositor {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            min_block: 50,
            max_block: 50,
            max_attempts: placer::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Same bound on both axes; a block's height and width are drawn independently.
    pub fn with_block_size(mut self, min_block: usize, max_block: usize) -> Self {
        self.min_block = min_block;
        self.max_block = max_block;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    fn params(&self, n_blocks: usize, seed: u64) -> PlacementParams {
        PlacementParams::new(
            &[self.height as usize, self.width as usize],
            n_blocks,
            &[self.max_block, self.max_block],
        )
        .with_min_block_size(&[self.min_block, self.min_block])
        .with_max_attempts(self.max_attempts)
        .with_seed(seed)
    }

    /// Block `i` gets assignment `i`; assignments past the last placed block stay unused.
    pub fn render(
        &self,
        assignments: &[ClassAssignment],
        seed: u64,
    ) -> Result<Composite, PlaceError> {
        let blocks = place_blocks(&self.params(assignments.len(), seed))?;
        let mut mask = RgbImage::new(self.width, self.height);

        let regions: Vec<PaintedRegion> = blocks
            .into_iter()
            .zip(assignments)
            .map(|(block, class)| PaintedRegion {
                block,
                class: class.clone(),
            })
            .collect();

        for region in &regions {
            draw_filled_rect_mut(
                &mut mask,
                Rect::at(region.x() as i32, region.y() as i32).of_size(region.w(), region.h()),
                Rgb(region.class.color),
            );
        }

        debug!(
            seed,
            placed = regions.len(),
            requested = assignments.len(),
            "composite rendered"
        );

        Ok(Composite {
            mask,
            regions,
            requested: assignments.len(),
        })
    }
}

/// Composite mask of `height x width` RGB pixels with one block per placed assignment.
pub fn composite(
    width: u32,
    height: u32,
    class_assignments: &[ClassAssignment],
    min_block_size: usize,
    max_block_size: usize,
    seed: u64,
) -> Result<RgbImage, PlaceError> {
    MaskCompositor::new(width, height)
        .with_block_size(min_block_size, max_block_size)
        .render(class_assignments, seed)
        .map(|c| c.mask)
}
