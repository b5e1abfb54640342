use super::*;

fn sample() -> SigilPath {
    SigilPath::from_primitives(vec![
        Primitive::MoveLine {
            from: Point::new(100.0, 70.0),
            to: Point::new(100.0, 130.0),
        },
        Primitive::LineTo {
            to: Point::new(130.004, 129.996),
        },
        Primitive::MoveLine {
            from: Point::new(-0.001, 12.345_6),
            to: Point::new(50.5, 50.0),
        },
    ])
}

#[test]
fn path_data_uses_plain_rounded_decimals() {
    assert_eq!(
        sample().to_path_data(),
        "M 100 70 L 100 130 L 130 130 M 0 12.35 L 50.5 50"
    );
    assert_eq!(sample().to_string(), sample().to_path_data());
}

#[test]
fn empty_path_serializes_to_empty_string() {
    let p = SigilPath::default();
    assert!(p.is_empty());
    assert_eq!(p.to_path_data(), "");
    assert!(p.bounding_box().is_none());
}

#[test]
fn bez_path_parses_back_from_path_data() {
    let p = sample();
    let parsed = BezPath::from_svg(&p.to_path_data()).unwrap();
    assert_eq!(parsed, p.to_bez_path());
}

#[test]
fn bounding_box_covers_all_points() {
    let bbox = sample().bounding_box().unwrap();
    assert_eq!(bbox.x0, 0.0);
    assert_eq!(bbox.y0, 12.35);
    assert_eq!(bbox.x1, 130.0);
    assert_eq!(bbox.y1, 130.0);
}

#[test]
fn fingerprint_tracks_path_data() {
    let a = sample();
    assert_eq!(a.fingerprint(), sample().fingerprint());
    let b = SigilPath::from_primitives(a.primitives()[..1].to_vec());
    assert_ne!(a.fingerprint(), b.fingerprint());
}

#[test]
fn end_reports_segment_target() {
    let p = sample();
    assert_eq!(p.primitives()[1].end(), Point::new(130.004, 129.996));
}
