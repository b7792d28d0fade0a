use super::*;
use crate::domain::goal::answers::AnswerValue;

fn answers(entries: &[(&str, AnswerValue)]) -> AnswerSet {
    let mut set = AnswerSet::new();
    for (id, value) in entries {
        set.insert(*id, value.clone());
    }
    set
}

fn single(value: &str) -> AnswerValue {
    AnswerValue::Single(value.to_string())
}

fn multiple(values: &[&str]) -> AnswerValue {
    AnswerValue::Multiple(values.iter().map(|v| v.to_string()).collect())
}

fn full_answers() -> AnswerSet {
    answers(&[
        ("v1", single("Iyilestirmek")),
        ("v2", multiple(&["Kalite", "Zaman"])),
        ("v3", single("Tum sirket")),
        ("v4", multiple(&["daha hizli"])),
        ("v5", single("Adet")),
        ("v6", single("3 ay icinde")),
        ("v7", multiple(&["Uretim"])),
        ("v8", multiple(&["Musteri kaybi"])),
    ])
}

#[test]
fn composes_the_reference_example() {
    let result = compose(&full_answers(), None, None, Some("Üretim Verimliliği"));

    assert_eq!(result.priority, Priority::High);
    assert!(
        result.text.starts_with(
            "Üretim Verimliliği kapsamında; Tum sirket alanında, Kalite ve Zaman \
             konularıyla ilgili iyilestirmek çalışmaları yapılarak; "
        ),
        "unexpected text: {}",
        result.text
    );
    assert!(result.text.ends_with(
        "sürecin daha hizli hale getirilmesi ve 3 ay icinde Adet göstergesini \
         iyileştirmek hedeflenmektedir."
    ));
}

#[test]
fn single_choice_tokens_land_in_position() {
    let result = compose(&full_answers(), None, None, None);

    // v3 verbatim, v1 and v6 lower-cased for mid-sentence embedding.
    assert!(result.text.contains("Tum sirket alanında"));
    assert!(result.text.contains("ilgili iyilestirmek çalışmaları"));
    assert!(result.text.contains("getirilmesi ve 3 ay icinde"));
}

#[test]
fn multi_choice_joins_preserve_selection_order_and_separator() {
    let mut set = full_answers();
    set.insert("v2", multiple(&["Zaman", "Kalite", "Urun"]));
    set.insert("v4", multiple(&["daha hizli", "daha guvenli"]));

    let result = compose(&set, None, None, None);
    assert!(result.text.contains("Zaman ve Kalite ve Urun konularıyla"));
    assert!(result.text.contains("sürecin daha hizli, daha guvenli hale"));
}

#[test]
fn missing_answers_fall_back_to_ellipsis() {
    let result = compose(&AnswerSet::new(), None, None, None);
    assert_eq!(
        result.text,
        "... alanında,  konularıyla ilgili ... çalışmaları yapılarak; sürecin  hale \
         getirilmesi ve ... ... göstergesini iyileştirmek hedeflenmektedir."
    );
    assert_eq!(result.priority, Priority::Medium);
}

#[test]
fn empty_subject_adds_no_prefix() {
    let with_none = compose(&full_answers(), None, None, None);
    let with_empty = compose(&full_answers(), None, None, Some(""));
    assert_eq!(with_none.text, with_empty.text);
    assert!(!with_none.text.contains("kapsamında"));
}

#[test]
fn quantitative_indicator_with_both_values_uses_from_to_phrasing() {
    let result = compose(&full_answers(), Some("40"), Some("95"), None);
    assert!(result
        .text
        .contains(" Adet değerini 40 seviyesinden 95 seviyesine getirmek hedeflenmektedir."));
}

#[test]
fn quantitative_indicator_with_one_value_keeps_generic_phrasing() {
    let result = compose(&full_answers(), Some("40"), None, None);
    assert!(result.text.contains(" Adet göstergesini iyileştirmek"));

    let result = compose(&full_answers(), Some("40"), Some(""), None);
    assert!(result.text.contains(" Adet göstergesini iyileştirmek"));
}

#[test]
fn qualitative_indicator_ignores_supplied_values() {
    for indicator in ["Musteri geri bildirimi", "Denetim sonucu", "Uyum durumu"] {
        let mut set = full_answers();
        set.insert("v5", single(indicator));
        let result = compose(&set, Some("1"), Some("5"), None);
        assert!(
            result
                .text
                .contains(&format!(" {indicator} göstergesini iyileştirmek")),
            "indicator {indicator} should keep the generic phrasing"
        );
    }
}

#[test]
fn priority_follows_the_risk_selection() {
    let mut set = full_answers();

    set.insert("v8", multiple(&["Etki yok", "Yasal risk"]));
    assert_eq!(compose(&set, None, None, None).priority, Priority::Low);

    set.insert("v8", multiple(&["Maliyet artar"]));
    assert_eq!(compose(&set, None, None, None).priority, Priority::Medium);

    set.insert("v8", multiple(&["Maliyet artar", "Kalite riski"]));
    assert_eq!(compose(&set, None, None, None).priority, Priority::High);
}
