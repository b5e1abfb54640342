use super::*;

#[test]
fn fnv_matches_reference_vectors() {
    assert_eq!(Fnv1a64::new().finish(), 0xcbf2_9ce4_8422_2325);
    let mut h = Fnv1a64::new();
    h.write_bytes(b"a");
    assert_eq!(h.finish(), 0xaf63_dc4c_8601_ec8c);
}

#[test]
fn fnv_chunked_writes_match_whole() {
    let mut a = Fnv1a64::new();
    a.write_bytes(b"sigil");
    let mut b = Fnv1a64::new();
    b.write_bytes(b"s");
    b.write_bytes(b"igil");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn rng_streams_diverge_per_seed() {
    let mut a = Rng64::new(1);
    let mut b = Rng64::new(2);
    assert_ne!(a.next_u64(), b.next_u64());
}

#[test]
fn signed_samples_stay_in_range() {
    let mut rng = Rng64::new(0);
    for _ in 0..256 {
        let v = rng.next_signed();
        assert!((-1.0..1.0).contains(&v));
    }
}
