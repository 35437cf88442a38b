use std::path::PathBuf;

use thiserror::Error;

use crate::{compositor::MaskCompositor, frames::FrameRange};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("frame skip must be positive")]
    ZeroSkip,
    #[error("failed to read class file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid class file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub struct MaskCfg {
    pub width: u32,
    pub height: u32,
    pub min_block: usize, // square edge, px
    pub max_block: usize,
    pub max_attempts: usize,
    pub start_frame: u32,
    pub end_frame: u32, // exclusive
    pub skip_frame: u32,
}

impl Default for MaskCfg {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            min_block: 50,
            max_block: 50,
            max_attempts: placer::DEFAULT_MAX_ATTEMPTS,
            start_frame: 1,
            end_frame: 20,
            skip_frame: 2,
        }
    }
}

impl MaskCfg {
    pub fn compositor(&self) -> MaskCompositor {
        MaskCompositor::new(self.width, self.height)
            .with_block_size(self.min_block, self.max_block)
            .with_max_attempts(self.max_attempts)
    }

    pub fn frame_range(&self) -> Result<FrameRange, ConfigError> {
        FrameRange::new(self.start_frame, self.end_frame, self.skip_frame)
    }
}
