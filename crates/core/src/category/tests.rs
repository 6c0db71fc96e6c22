//! Property-based and scenario tests for the category module.

use monotax_shared::config::{CategoryConfig, RegimeConfig};
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::classifier::CategoryClassifier;
use super::error::CategoryError;
use super::table::{CategoryTable, CategoryThreshold};
use super::types::{Bracket, CategoryMode, ComplianceStatus};
use crate::test_support::{label, post_indexation, pre_indexation, table};

/// Strategy for amounts between 0.00 and 100,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A larger amount never lands in a lower bracket.
    #[test]
    fn prop_bracket_for_is_monotonic(a in amount(), b in amount()) {
        let table = post_indexation();
        let classifier = CategoryClassifier::new(&table);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        match (classifier.bracket_for(low).index(), classifier.bracket_for(high).index()) {
            (Some(i), Some(j)) => prop_assert!(i <= j),
            (Some(_) | None, None) => {}
            (None, Some(_)) => prop_assert!(false, "lower amount above regime"),
        }
    }

    /// The bracket found is the smallest one containing the amount.
    #[test]
    fn prop_bracket_is_smallest_containing(value in amount()) {
        let table = post_indexation();
        let classifier = CategoryClassifier::new(&table);

        match classifier.bracket_for(value) {
            Bracket::Within { index, threshold } => {
                prop_assert!(threshold.ceiling >= value);
                if index > 0 {
                    prop_assert!(table.get(index - 1).unwrap().ceiling < value);
                }
            }
            Bracket::AboveRegime => prop_assert!(value > table.highest().ceiling),
        }
    }

    /// Excess and headroom are never both positive.
    #[test]
    fn prop_excess_and_headroom_exclusive(value in amount()) {
        let table = post_indexation();
        let classifier = CategoryClassifier::new(&table);

        let (excess, headroom) = classifier.excess_and_headroom(value, label('C')).unwrap();
        prop_assert!(excess >= Decimal::ZERO);
        prop_assert!(headroom >= Decimal::ZERO);
        prop_assert!(excess.is_zero() || headroom.is_zero());
        prop_assert_eq!(value - excess + headroom, table.ceiling_of(label('C')).unwrap());
    }

    /// Every displayed threshold is below or at the containing bracket, plus
    /// at most one above it.
    #[test]
    fn prop_relevant_subset_is_prefix(value in amount()) {
        let table = pre_indexation();
        let classifier = CategoryClassifier::new(&table);
        let subset = classifier.relevant_category_subset(value);

        prop_assert!(!subset.is_empty());
        prop_assert_eq!(subset, &table.as_slice()[..subset.len()]);
        let above = subset.iter().filter(|t| t.ceiling >= value).count();
        prop_assert!(above <= 2);
    }
}

#[test]
fn test_boundary_amount_is_compliant() {
    let table = post_indexation();
    let classifier = CategoryClassifier::new(&table);

    let (excess, headroom) = classifier
        .excess_and_headroom(dec!(7813063.45), label('A'))
        .unwrap();
    assert_eq!(excess, Decimal::ZERO);
    assert_eq!(headroom, Decimal::ZERO);

    let classification = classifier
        .classify(dec!(7813063.45), CategoryMode::Declared(label('A')))
        .unwrap();
    assert_eq!(classification.status, ComplianceStatus::AtCeiling);
    assert_eq!(classification.bracket.label(), Some(label('A')));
    assert_eq!(classification.next_eligible_category, Some(label('B')));
}

#[test]
fn test_excess_over_declared_category() {
    let table = table(&[('A', dec!(7813063.45)), ('B', dec!(11447046.44))]);
    let classifier = CategoryClassifier::new(&table);

    assert_eq!(classifier.bracket_for(dec!(8000000)).label(), Some(label('B')));

    let classification = classifier
        .classify(dec!(8000000), CategoryMode::Declared(label('A')))
        .unwrap();
    assert_eq!(classification.current_category, Some(label('A')));
    assert_eq!(classification.current_ceiling, dec!(7813063.45));
    assert_eq!(classification.excess_amount, dec!(186936.55));
    assert_eq!(classification.headroom_amount, Decimal::ZERO);
    assert_eq!(classification.next_eligible_category, Some(label('B')));
    assert_eq!(classification.status, ComplianceStatus::Exceeded);
}

#[rstest]
#[case(dec!(0), Some('A'))]
#[case(dec!(6450000), Some('A'))]
#[case(dec!(6450000.01), Some('B'))]
#[case(dec!(29000000), Some('G'))]
#[case(dec!(68000000), Some('K'))]
#[case(dec!(68000000.01), None)]
fn test_bracket_for_pre_indexation(#[case] value: Decimal, #[case] expected: Option<char>) {
    let table = pre_indexation();
    let classifier = CategoryClassifier::new(&table);
    assert_eq!(
        classifier.bracket_for(value).label(),
        expected.map(label)
    );
}

#[test]
fn test_observed_mode_within() {
    let table = post_indexation();
    let classifier = CategoryClassifier::new(&table);

    let classification = classifier
        .classify(dec!(12000000), CategoryMode::Observed)
        .unwrap();
    assert_eq!(classification.current_category, Some(label('C')));
    assert_eq!(classification.current_ceiling, dec!(16050091.57));
    assert_eq!(classification.headroom_amount, dec!(4050091.57));
    assert_eq!(classification.excess_amount, Decimal::ZERO);
    assert_eq!(classification.next_eligible_category, Some(label('D')));
    assert_eq!(classification.status, ComplianceStatus::Within);
}

#[test]
fn test_observed_mode_top_category_has_no_next() {
    let table = post_indexation();
    let classifier = CategoryClassifier::new(&table);

    let classification = classifier
        .classify(dec!(80000000), CategoryMode::Observed)
        .unwrap();
    assert_eq!(classification.current_category, Some(label('K')));
    assert_eq!(classification.next_eligible_category, None);
}

#[test]
fn test_observed_mode_above_regime() {
    let table = post_indexation();
    let classifier = CategoryClassifier::new(&table);

    let classification = classifier
        .classify(dec!(90000000), CategoryMode::Observed)
        .unwrap();
    assert_eq!(classification.bracket, Bracket::AboveRegime);
    assert_eq!(classification.current_category, None);
    assert_eq!(classification.current_ceiling, dec!(82370281.28));
    assert_eq!(classification.excess_amount, dec!(7629718.72));
    assert_eq!(classification.headroom_amount, Decimal::ZERO);
    assert_eq!(classification.next_eligible_category, None);
    assert_eq!(classification.status, ComplianceStatus::AboveRegime);
}

#[test]
fn test_declared_mode_above_regime() {
    let table = post_indexation();
    let classifier = CategoryClassifier::new(&table);

    let classification = classifier
        .classify(dec!(90000000), CategoryMode::Declared(label('B')))
        .unwrap();
    assert_eq!(classification.current_category, Some(label('B')));
    assert_eq!(classification.next_eligible_category, None);
    assert_eq!(classification.status, ComplianceStatus::AboveRegime);
    assert!(!classification.status.is_compliant());
}

#[test]
fn test_unknown_declared_category() {
    let table = table(&[('A', dec!(100)), ('B', dec!(200))]);
    let classifier = CategoryClassifier::new(&table);

    assert_eq!(
        classifier.classify(dec!(50), CategoryMode::Declared(label('Z'))),
        Err(CategoryError::UnknownCategory('Z'))
    );
    assert_eq!(
        classifier.excess_and_headroom(dec!(50), label('Z')),
        Err(CategoryError::UnknownCategory('Z'))
    );
}

#[test]
fn test_relevant_subset() {
    let table = pre_indexation();
    let classifier = CategoryClassifier::new(&table);

    let labels = |amount| -> String {
        classifier
            .relevant_category_subset(amount)
            .iter()
            .map(|t| t.label.as_char())
            .collect()
    };

    assert_eq!(labels(dec!(1000)), "AB");
    assert_eq!(labels(dec!(10000000)), "ABCD");
    assert_eq!(labels(dec!(60000000)), "ABCDEFGHIJK");
    assert_eq!(labels(dec!(99000000)), "ABCDEFGHIJK");
}

#[test]
fn test_table_sorts_by_ceiling() {
    let table = table(&[('C', dec!(300)), ('A', dec!(100)), ('B', dec!(200))]);

    let labels: String = table.sorted_ascending().map(|t| t.label.as_char()).collect();
    assert_eq!(labels, "ABC");
    assert_eq!(table.ceiling_of(label('B')), Some(dec!(200)));
    assert_eq!(table.ceiling_of(label('Z')), None);
    assert_eq!(table.position_of(label('C')), Some(2));
    assert_eq!(table.highest().label, label('C'));

    // restartable
    let iter = table.sorted_ascending();
    assert_eq!(iter.clone().count(), iter.count());
}

#[test]
fn test_table_rejects_invalid_thresholds() {
    let t = |l: char, c: Decimal| CategoryThreshold::new(label(l), c);

    assert_eq!(CategoryTable::new(vec![]), Err(CategoryError::EmptyTable));
    assert_eq!(
        CategoryTable::new(vec![t('A', dec!(100)), t('A', dec!(200))]),
        Err(CategoryError::DuplicateLabel('A'))
    );
    assert_eq!(
        CategoryTable::new(vec![t('A', dec!(100)), t('B', dec!(100))]),
        Err(CategoryError::NonIncreasingCeiling {
            lower: 'A',
            upper: 'B',
            ceiling: dec!(100),
        })
    );
    assert!(matches!(
        CategoryTable::new(vec![t('A', dec!(-1))]),
        Err(CategoryError::NegativeCeiling { label: 'A', .. })
    ));
}

#[test]
fn test_table_from_config() {
    let regime = RegimeConfig {
        description: None,
        categories: vec![
            CategoryConfig {
                label: "b".to_string(),
                ceiling: dec!(200),
            },
            CategoryConfig {
                label: "A".to_string(),
                ceiling: dec!(100),
            },
        ],
    };

    let table = CategoryTable::from_config(&regime).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(1).unwrap().label, label('B'));
}

#[test]
fn test_table_from_config_rejects_bad_label() {
    let regime = RegimeConfig {
        description: None,
        categories: vec![CategoryConfig {
            label: "AB".to_string(),
            ceiling: dec!(200),
        }],
    };

    assert_eq!(
        CategoryTable::from_config(&regime),
        Err(CategoryError::InvalidLabel("AB".to_string()))
    );
}

#[rstest]
#[case("A", Some('A'))]
#[case("k", Some('K'))]
#[case(" C ", Some('C'))]
#[case("", None)]
#[case("1", None)]
#[case("AB", None)]
fn test_label_parse(#[case] input: &str, #[case] expected: Option<char>) {
    let parsed = input.parse::<super::table::CategoryLabel>().ok();
    assert_eq!(parsed.map(super::table::CategoryLabel::as_char), expected);
}
