use placer::PlaceError;

use crate::{
    classes::ClassAssignment,
    compositor::{Composite, MaskCompositor},
    config::ConfigError,
};

/// Frame indices `start, start + skip, ...` strictly below `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRange {
    start: u32,
    end: u32,
    skip: u32,
}

impl FrameRange {
    pub fn new(start: u32, end: u32, skip: u32) -> Result<Self, ConfigError> {
        if skip == 0 {
            return Err(ConfigError::ZeroSkip);
        }
        Ok(Self { start, end, skip })
    }

    pub fn indices(&self) -> impl Iterator<Item = u32> + use<> {
        (self.start..self.end).step_by(self.skip as usize)
    }

    pub fn len(&self) -> usize {
        self.indices().count()
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

pub struct MaskFrame {
    pub index: u32,
    pub seed: u64,
    pub composite: Composite,
}

/// Lazily renders one composite per frame, seeded with the frame index.
pub fn render_frames<'a>(
    compositor: &'a MaskCompositor,
    assignments: &'a [ClassAssignment],
    range: FrameRange,
) -> impl Iterator<Item = Result<MaskFrame, PlaceError>> + 'a {
    range.indices().map(move |index| {
        let seed = u64::from(index);
        compositor
            .render(assignments, seed)
            .map(|composite| MaskFrame {
                index,
                seed,
                composite,
            })
    })
}

pub fn generate_frames(
    compositor: &MaskCompositor,
    assignments: &[ClassAssignment],
    range: FrameRange,
) -> Result<Vec<MaskFrame>, PlaceError> {
    render_frames(compositor, assignments, range).collect()
}
