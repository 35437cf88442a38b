use serde::Serialize;

use crate::{classes::MaskInstance, compositor::PaintedRegion, frames::MaskFrame};

pub const SCHEMA: &str = "v1";

#[derive(Serialize, Debug)]
pub struct SequenceHeader {
    pub schema: &'static str,
    pub width: u32,
    pub height: u32,
    pub frames: Vec<u32>,
    pub instances: Vec<MaskInstance>,
}

#[derive(Serialize, Debug)]
pub struct RegionRecord {
    pub label: String,
    pub index: u32,
    pub color: [u8; 3],
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl From<&PaintedRegion> for RegionRecord {
    fn from(r: &PaintedRegion) -> Self {
        Self {
            label: r.class.label.clone(),
            index: r.class.index,
            color: r.class.color,
            x: r.x(),
            y: r.y(),
            w: r.w(),
            h: r.h(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct FrameRecord {
    pub schema: &'static str,
    pub frame: u32,
    pub seed: u64,
    pub requested: usize,
    pub placed: usize,
    pub regions: Vec<RegionRecord>,
}

impl From<&MaskFrame> for FrameRecord {
    fn from(f: &MaskFrame) -> Self {
        Self {
            schema: SCHEMA,
            frame: f.index,
            seed: f.seed,
            requested: f.composite.requested,
            placed: f.composite.regions.len(),
            regions: f.composite.regions.iter().map(RegionRecord::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        classes::ClassAssignment,
        compositor::MaskCompositor,
        frames::{FrameRange, generate_frames},
    };

    #[test]
    fn frame_record_serializes_regions() {
        let compositor = MaskCompositor::new(40, 40)
            .with_block_size(40, 40)
            .with_max_attempts(5);
        let classes = vec![
            ClassAssignment::new("bunny", 1, [255, 0, 0]),
            ClassAssignment::new("tree", 2, [0, 255, 0]),
        ];
        let range = FrameRange::new(3, 4, 1).unwrap();
        let seq = generate_frames(&compositor, &classes, range).unwrap();

        let value = serde_json::to_value(FrameRecord::from(&seq[0])).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "schema": "v1",
                "frame": 3,
                "seed": 3,
                "requested": 2,
                "placed": 1,
                "regions": [
                    {"label": "bunny", "index": 1, "color": [255, 0, 0],
                     "x": 0, "y": 0, "w": 40, "h": 40}
                ]
            })
        );
    }
}
