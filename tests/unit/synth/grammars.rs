use super::*;
use crate::features::extract::extract;
use crate::foundation::core::Point;
use crate::synth::primitive::Primitive;

const STATEMENTS: &[&str] = &[
    "",
    "!!!",
    "a",
    "ab",
    "I am successful",
    "I WILL FLY",
    "The quick brown fox jumps over the lazy dog",
    "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz",
    "My body heals itself swiftly and completely",
    "Éire go brách",
];

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

fn with_budget(statement: &str, line_count: usize) -> FeatureSet {
    let mut f = extract(statement);
    f.line_count = line_count;
    f
}

fn count_cmd(data: &str, cmd: &str) -> usize {
    data.split(' ').filter(|t| *t == cmd).count()
}

#[test]
fn every_paradigm_respects_the_budget() {
    for s in STATEMENTS {
        let f = extract(s);
        for p in Paradigm::ALL {
            let path = synthesize(&f, p);
            assert!(!path.is_empty(), "{p} on {s:?}");
            assert!(path.len() <= f.line_count, "{p} on {s:?}");

            let data = path.to_path_data();
            assert!(data.starts_with("M "), "{p} on {s:?}: {data}");
            assert_eq!(count_cmd(&data, "L"), path.len());
        }
    }
}

#[test]
fn raised_budgets_are_still_respected() {
    for s in STATEMENTS {
        for budget in 0..=13 {
            let f = with_budget(s, budget);
            for p in Paradigm::ALL {
                assert!(synthesize(&f, p).len() <= budget, "{p} on {s:?} @ {budget}");
            }
        }
    }
}

#[test]
fn synthesis_is_byte_identical_across_calls() {
    for s in STATEMENTS {
        let f = extract(s);
        for p in Paradigm::ALL {
            assert_eq!(
                synthesize(&f, p).to_path_data(),
                synthesize(&extract(s), p).to_path_data()
            );
        }
    }
}

#[test]
fn chaos_opens_with_the_cross_anchor() {
    let f = extract("I am successful");
    let path = synthesize(&f, Paradigm::Chaos);
    let size = 60.0 * (0.5 + f.rhythm * 0.5);
    match (path.primitives()[0], path.primitives()[1]) {
        (
            Primitive::MoveLine { from: v0, to: v1 },
            Primitive::MoveLine { from: h0, to: h1 },
        ) => {
            assert!(close(v0, Point::new(100.0, 100.0 - size)));
            assert!(close(v1, Point::new(100.0, 100.0 + size)));
            assert!(close(h0, Point::new(100.0 - size, 100.0)));
            assert!(close(h1, Point::new(100.0 + size, 100.0)));
        }
        other => panic!("unexpected anchor {other:?}"),
    }
    assert_eq!(path.len(), f.line_count);
}

#[test]
fn chaos_stops_when_phase_angles_run_out() {
    let f = with_budget("ab", 13);
    assert_eq!(synthesize(&f, Paradigm::Chaos).len(), 2 + 2);
}

#[test]
fn degenerate_input_yields_anchor_only() {
    let f = extract("");
    assert_eq!(synthesize(&f, Paradigm::Chaos).len(), 2);
    assert_eq!(synthesize(&f, Paradigm::Hermetic).len(), 3);
    assert_eq!(synthesize(&f, Paradigm::Cybernetic).len(), 1);

    let spiral = synthesize(&f, Paradigm::Shamanic);
    assert_eq!(spiral.len(), f.line_count);
    assert_eq!(count_cmd(&spiral.to_path_data(), "M"), 1);
}

#[test]
fn hermetic_inner_triangle_is_gated_by_rhythm() {
    // rhythm ~0.27: triangle, three rays, center cross.
    let low = with_budget("I am successful", 13);
    assert!(low.rhythm <= 0.3);
    assert_eq!(synthesize(&low, Paradigm::Hermetic).len(), 3 + 3 + 2);

    // rhythm 0.4: the inner triangle joins in.
    let high = with_budget("zebra", 13);
    assert!(high.rhythm > 0.3);
    assert_eq!(synthesize(&high, Paradigm::Hermetic).len(), 3 + 3 + 3 + 2);
}

#[test]
fn hermetic_triangle_is_closed() {
    let path = synthesize(&extract("zebra"), Paradigm::Hermetic);
    let prims = path.primitives();
    let Primitive::MoveLine { from: start, .. } = prims[0] else {
        panic!("triangle must open with a move");
    };
    assert!(matches!(prims[1], Primitive::LineTo { .. }));
    assert!(close(prims[2].end(), start));
}

#[test]
fn shamanic_spiral_is_capped() {
    let f = with_budget("", 13);
    assert_eq!(synthesize(&f, Paradigm::Shamanic).len(), 9);
}

#[test]
fn shamanic_interleaves_power_marks() {
    let f = with_budget("I am successful", 13);
    let path = synthesize(&f, Paradigm::Shamanic);
    assert_eq!(path.len(), 13);
    // One run per chord pair plus two moves per power mark.
    assert!(count_cmd(&path.to_path_data(), "M") > 1);
}

#[test]
fn cybernetic_links_follow_harmonic_threshold() {
    // "ab": harmonics [0, 0.5]; no pair clears 0.3, so only first/last plus node marks.
    assert_eq!(
        synthesize(&with_budget("ab", 13), Paradigm::Cybernetic).len(),
        1 + 3 * 2
    );
    // "cc": harmonics [2.0]; node 0 links to node 1.
    assert_eq!(
        synthesize(&with_budget("cc", 13), Paradigm::Cybernetic).len(),
        1 + 1 + 3 * 2
    );
}

#[test]
fn paradigms_do_not_converge() {
    for s in STATEMENTS.iter().filter(|s| !extract(s).unique_letters.is_empty()) {
        let f = extract(s);
        let paths: Vec<String> = Paradigm::ALL
            .iter()
            .map(|p| synthesize(&f, *p).to_path_data())
            .collect();
        for i in 0..paths.len() {
            for j in (i + 1)..paths.len() {
                assert_ne!(paths[i], paths[j], "{s:?}");
            }
        }
    }
}

#[test]
fn marks_stay_near_the_canvas() {
    for s in STATEMENTS {
        let f = with_budget(s, 13);
        for p in Paradigm::ALL {
            let bbox = synthesize(&f, p).bounding_box().unwrap();
            assert!(bbox.x0 >= 0.0 && bbox.y0 >= 0.0, "{p} on {s:?}: {bbox:?}");
            assert!(bbox.x1 <= 200.0 && bbox.y1 <= 200.0, "{p} on {s:?}: {bbox:?}");
        }
    }
}

#[test]
fn cyclic_harmonics_wrap_and_default_to_zero() {
    let f = extract("cc");
    assert_eq!(harmonic_cyclic(&f, 0), 2.0);
    assert_eq!(harmonic_cyclic(&f, 5), 2.0);
    assert_eq!(weight(&extract(""), 3), 0.0);
}

#[test]
fn cybernetic_jitter_is_seeded_and_bounded() {
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    let f = extract("My body heals itself swiftly and completely");
    let nodes = cybernetic::place_nodes(&f);
    assert_eq!(nodes, cybernetic::place_nodes(&f));

    let step = TAU / nodes.len() as f64;
    for (k, node) in nodes.iter().enumerate() {
        let v = *node - crate::foundation::core::CANVAS_CENTER;
        let nominal = -FRAC_PI_2 + k as f64 * step;
        let mut off = v.atan2() - nominal;
        off = (off + PI).rem_euclid(TAU) - PI;
        assert!(off.abs() <= 0.15 * step + 1e-9, "node {k}: {off}");
    }

    let mut reseeded = f.clone();
    reseeded.seed = f.seed.wrapping_add(1);
    let moved = cybernetic::place_nodes(&reseeded);
    assert_ne!(moved, nodes);
    for (a, b) in nodes.iter().zip(&moved) {
        let c = crate::foundation::core::CANVAS_CENTER;
        assert!(((*a - c).hypot() - (*b - c).hypot()).abs() < 1e-9);
    }
}
