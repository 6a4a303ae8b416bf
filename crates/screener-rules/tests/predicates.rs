use screener_core::{AnswerStore, AnswerValue};
use screener_rules::predicates::{
    count, count_affirmative, has_domain, impairment, is_affirmative, is_strictly_yes,
    meets_impairment, was_entered,
};

fn answers() -> AnswerStore {
    let mut a = AnswerStore::new();
    a.insert("yes", AnswerValue::Choice("Yes".into()));
    a.insert("unsure", AnswerValue::Choice("Not sure".into()));
    a.insert("no", AnswerValue::Choice("No".into()));
    a.insert("picked", AnswerValue::MultiChoice(vec!["a".into(), "b".into()]));
    a.insert("c2", AnswerValue::MultiChoice(vec!["Worry (most days)".into()]));
    a
}

#[test]
fn affirmative_accepts_yes_and_not_sure() {
    let a = answers();
    assert!(is_affirmative(&a, "yes"));
    assert!(is_affirmative(&a, "unsure"));
    assert!(!is_affirmative(&a, "no"));
    assert!(!is_affirmative(&a, "missing"));
    assert!(!is_affirmative(&a, "picked"));
}

#[test]
fn strictly_yes_rejects_uncertainty() {
    let a = answers();
    assert!(is_strictly_yes(&a, "yes"));
    assert!(!is_strictly_yes(&a, "unsure"));
    assert!(!is_strictly_yes(&a, "missing"));
}

#[test]
fn counts_default_to_zero() {
    let a = answers();
    assert_eq!(count(&a, "picked"), 2);
    assert_eq!(count(&a, "missing"), 0);
    assert_eq!(count(&a, "yes"), 0);
    assert_eq!(count_affirmative(&a, &["yes", "unsure", "no", "missing"]), 2);
}

#[test]
fn impairment_defaults_to_zero() {
    let mut a = answers();
    assert_eq!(impairment(&a), 0.0);
    assert!(!meets_impairment(&a));
    a.insert("c3", AnswerValue::Choice("7".into()));
    assert_eq!(impairment(&a), 0.0);
    a.insert("c3", AnswerValue::Scale(5.0));
    assert!(meets_impairment(&a));
}

#[test]
fn domain_lookup_reads_core_list() {
    let a = answers();
    assert!(has_domain(&a, "Worry"));
    assert!(!has_domain(&a, "Mood"));
}

#[test]
fn entry_follows_form_truthiness() {
    let mut a = answers();
    a.insert("empty", AnswerValue::Choice(String::new()));
    a.insert("space", AnswerValue::Choice(" ".into()));
    a.insert("zero", AnswerValue::Scale(0.0));
    a.insert("three", AnswerValue::Scale(3.0));
    a.insert("none_picked", AnswerValue::MultiChoice(Vec::new()));

    assert!(was_entered(&a, "no"));
    assert!(was_entered(&a, "space"));
    assert!(was_entered(&a, "three"));
    assert!(was_entered(&a, "none_picked"));
    assert!(!was_entered(&a, "empty"));
    assert!(!was_entered(&a, "zero"));
    assert!(!was_entered(&a, "missing"));
}
