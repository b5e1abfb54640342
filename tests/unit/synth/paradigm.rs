use super::*;

#[test]
fn parse_ignores_case_and_whitespace() {
    assert_eq!(Paradigm::parse("chaos").unwrap(), Paradigm::Chaos);
    assert_eq!(Paradigm::parse(" Hermetic ").unwrap(), Paradigm::Hermetic);
    assert_eq!("SHAMANIC".parse::<Paradigm>().unwrap(), Paradigm::Shamanic);
    assert_eq!(
        "cybernetic".parse::<Paradigm>().unwrap(),
        Paradigm::Cybernetic
    );
}

#[test]
fn unknown_names_are_rejected() {
    for bad in ["", "psychological", "chaos!", "energy"] {
        let err = Paradigm::parse(bad).unwrap_err();
        assert!(matches!(err, SigilError::Validation(_)), "{bad}");
    }
}

#[test]
fn names_round_trip_through_display_and_serde() {
    for p in Paradigm::ALL {
        assert_eq!(p.to_string().parse::<Paradigm>().unwrap(), p);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, format!("\"{}\"", p.as_str()));
        assert_eq!(serde_json::from_str::<Paradigm>(&json).unwrap(), p);
    }
}

#[test]
fn serde_rejects_unknown_variant() {
    assert!(serde_json::from_str::<Paradigm>("\"druidic\"").is_err());
}
