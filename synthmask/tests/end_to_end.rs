use placer::{PlaceError, PlacementParams, place_blocks};
use synthmask::{ClassAssignment, FrameRange, MaskCfg, generate_frames, instances};

#[test]
fn placer_rejects_inverted_bounds_up_front() {
    let params = PlacementParams::new(&[10, 10], 4, &[3, 3]).with_min_block_size(&[5, 5]);
    assert!(matches!(
        place_blocks(&params),
        Err(PlaceError::MinExceedsMax { .. })
    ));
}

#[test]
fn default_sequence_paints_every_class() {
    let cfg = MaskCfg::default();
    let classes = vec![
        ClassAssignment::new("bunny", 1, [255, 0, 0]),
        ClassAssignment::new("tree", 2, [0, 255, 0]),
        ClassAssignment::new("tree", 2, [0, 255, 100]),
        ClassAssignment::new("butterfly", 3, [0, 0, 255]),
    ];
    let range = cfg.frame_range().unwrap();
    let frames = generate_frames(&cfg.compositor(), &classes, range).unwrap();
    assert_eq!(frames.len(), 10);

    for frame in &frames {
        let mask = &frame.composite.mask;
        assert_eq!(mask.dimensions(), (cfg.width, cfg.height));
        // four 50px squares on a 640x360 canvas leave plenty of room
        assert_eq!(frame.composite.regions.len(), classes.len());
        for class in &classes {
            let n = mask.pixels().filter(|p| p.0 == class.color).count();
            assert_eq!(n, 50 * 50, "frame {} class {}", frame.index, class.label);
        }
    }

    // consecutive frames use different seeds, so the layout moves
    assert_ne!(frames[0].composite.mask, frames[1].composite.mask);
    assert_eq!(instances(&classes).len(), 4);
}

#[test]
fn custom_range_and_bounds() {
    let cfg = MaskCfg {
        width: 200,
        height: 100,
        min_block: 5,
        max_block: 25,
        ..MaskCfg::default()
    };
    let classes = vec![ClassAssignment::new("only", 7, [9, 9, 9])];
    let frames = generate_frames(
        &cfg.compositor(),
        &classes,
        FrameRange::new(0, 6, 3).unwrap(),
    )
    .unwrap();
    assert_eq!(frames.iter().map(|f| f.index).collect::<Vec<_>>(), [0, 3]);
    for frame in &frames {
        let region = &frame.composite.regions[0];
        assert!((5..=25).contains(&region.w()) && (5..=25).contains(&region.h()));
        assert!(region.x() + region.w() <= 200 && region.y() + region.h() <= 100);
    }
}
