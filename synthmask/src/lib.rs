//! Synthetic composite label masks: one randomly placed, non-overlapping
//! colored block per class assignment.

pub mod classes;
pub mod compositor;
pub mod config;
pub mod frames;
pub mod record;

pub use classes::{ClassAssignment, MaskInstance, default_classes, instances, load_classes};
pub use compositor::{Composite, MaskCompositor, PaintedRegion, composite};
pub use config::{ConfigError, MaskCfg};
pub use frames::{FrameRange, MaskFrame, generate_frames, render_frames};
