//! End-to-end: persisted settings JSON through compilation into a scan.

use lowlight_config::Settings;
use lowlight_core::{evaluate, Range, TextDocument, Tier};

#[test]
fn test_settings_drive_a_full_scan() {
    let settings = Settings::from_json(
        r#"{
            "tier": "min",
            "maxNumberOfLinesToScan": 500,
            "rules": [
                { "rule": "TODO", "tier": "max" },
                ["BEGIN", "END"]
            ]
        }"#,
    )
    .unwrap();

    let doc = TextDocument::from_text("a TODO\nBEGIN\nbody\nEND\ntail");
    let rules = settings.compile();
    let set = evaluate(
        &doc,
        &[Range::of(0, 0, 4, 0)],
        &rules,
        settings.max_number_of_lines_to_scan,
    );

    assert_eq!(set.max, vec![Range::of(0, 2, 0, 6)]);
    // The pattern pair takes the settings-level default tier.
    assert_eq!(set.min, vec![Range::of(1, 0, 3, 3)]);
    assert!(set.mid.is_empty());
}

#[test]
fn test_invalid_rule_does_not_block_valid_ones() {
    // An unclosed bracket pattern fails to compile and is dropped; the valid
    // rule in the same configuration still produces its match.
    let settings = Settings::from_json(r#"{ "rules": ["[unclosed", "FIXME"] }"#).unwrap();
    let rules = settings.compile();
    assert_eq!(rules.len(), 1);

    let doc = TextDocument::from_text("see FIXME here");
    let set = evaluate(&doc, &[Range::of(0, 0, 0, 14)], &rules, 1000);
    assert_eq!(set.ranges(Tier::Mid), &[Range::of(0, 4, 0, 9)]);
}

#[test]
fn test_empty_settings_scan_is_empty() {
    let settings = Settings::from_json("{}").unwrap();
    let doc = TextDocument::from_text("anything at all");
    let set = evaluate(
        &doc,
        &[Range::of(0, 0, 0, 15)],
        &settings.compile(),
        settings.max_number_of_lines_to_scan,
    );
    assert!(set.is_empty());
}
