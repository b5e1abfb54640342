use super::*;
use chrono::TimeZone as _;

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 20, 4, 6, 0).unwrap()
}

#[test]
fn blank_statements_are_rejected() {
    for s in ["", "   ", "\n\t"] {
        let err = forge(s, Paradigm::Chaos, at()).unwrap_err();
        assert!(err.to_string().contains("no statement supplied"));
    }
}

#[test]
fn non_alphabetic_statements_still_forge() {
    let sigil = forge("1234", Paradigm::Hermetic, at()).unwrap();
    assert!(sigil.path_data.starts_with("M "));
}

#[test]
fn forge_wraps_the_synthesized_path() {
    let sigil = forge("I am successful", Paradigm::Chaos, at()).unwrap();
    assert_eq!(sigil.statement, "I am successful");
    assert_eq!(sigil.paradigm, Paradigm::Chaos);
    assert_eq!(sigil.created_at, at());
    let expected = synthesize(&extract("I am successful"), Paradigm::Chaos).to_path_data();
    assert_eq!(sigil.path_data, expected);
}

#[test]
fn batch_preserves_order_and_isolates_failures() {
    let statements = ["I will fly", "", "Let it be so"];
    let out = forge_batch(
        &statements,
        Paradigm::Shamanic,
        at(),
        &BatchOpts { threads: Some(2) },
    )
    .unwrap();
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].as_ref().unwrap().statement, "I will fly");
    assert!(out[1].is_err());
    assert_eq!(out[2].as_ref().unwrap().statement, "Let it be so");
}

#[test]
fn batch_matches_sequential_output() {
    let statements: Vec<String> = (0..64).map(|i| format!("intent number {i}")).collect();
    let out = forge_batch(&statements, Paradigm::Cybernetic, at(), &BatchOpts::default()).unwrap();
    for (s, got) in statements.iter().zip(out) {
        assert_eq!(got.unwrap(), forge(s, Paradigm::Cybernetic, at()).unwrap());
    }
}

#[test]
fn zero_threads_is_rejected() {
    let err = forge_batch(&["x"], Paradigm::Chaos, at(), &BatchOpts { threads: Some(0) })
        .unwrap_err();
    assert!(matches!(err, SigilError::Validation(_)));
}
