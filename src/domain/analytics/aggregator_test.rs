use super::*;

fn row(question_key: &str, answer: &str) -> AnswerRow {
    AnswerRow {
        question_key: question_key.to_string(),
        answer: answer.to_string(),
    }
}

#[test]
fn empty_window_still_exposes_every_catalog_bucket_at_zero() {
    let stats = aggregate_stats(Vec::new());

    assert_eq!(stats.len(), 8);
    for question in catalog::questions() {
        let buckets = &stats[question.id];
        assert_eq!(buckets.len(), question.options.len());
        for option in question.options {
            assert_eq!(buckets[option.value], 0, "{}/{}", question.id, option.value);
        }
    }
}

#[test]
fn scalar_answers_increment_one_bucket() {
    let stats = aggregate_stats(vec![
        row("v1", "Iyilestirmek"),
        row("v1", "Iyilestirmek"),
        row("v1", "Buyutmek"),
    ]);

    assert_eq!(stats["v1"]["Iyilestirmek"], 2);
    assert_eq!(stats["v1"]["Buyutmek"], 1);
    assert_eq!(stats["v1"]["Azaltmak"], 0);
}

#[test]
fn multi_select_increments_each_selected_value_independently() {
    let encoded = AnswerValue::Multiple(vec!["Kalite".to_string(), "Zaman".to_string()]).encode();
    let stats = aggregate_stats(vec![row("v2", &encoded), row("v2", r#"["Kalite"]"#)]);

    assert_eq!(stats["v2"]["Kalite"], 2);
    assert_eq!(stats["v2"]["Zaman"], 1);
    assert_eq!(stats["v2"]["Urun"], 0);
}

#[test]
fn persisted_multi_select_round_trips_losslessly() {
    let selected = vec!["Uretim".to_string(), "Satis".to_string(), "Musteri".to_string()];
    let encoded = AnswerValue::Multiple(selected.clone()).encode();
    let stats = aggregate_stats(vec![row("v7", &encoded)]);

    for value in &selected {
        assert_eq!(stats["v7"][value], 1);
    }
}

#[test]
fn unknown_values_get_their_own_buckets() {
    let stats = aggregate_stats(vec![row("v1", "Tamamen yeni deger")]);
    assert_eq!(stats["v1"]["Tamamen yeni deger"], 1);
    // Seeded buckets are untouched.
    assert_eq!(stats["v1"]["Iyilestirmek"], 0);
}

#[test]
fn unknown_question_ids_are_tolerated() {
    let stats = aggregate_stats(vec![row("v99", "whatever")]);
    assert_eq!(stats["v99"]["whatever"], 1);
    assert_eq!(stats.len(), 9);
}

#[test]
fn malformed_encoding_counts_as_the_literal_scalar() {
    let stats = aggregate_stats(vec![row("v2", "[broken json")]);
    assert_eq!(stats["v2"]["[broken json"], 1);
}
