use poker_showdown::evaluator::{classify, classify_hand, evaluate, Category, ClassifyError};
use poker_showdown::evaluator::FrequencyProfile;
use poker_showdown::hand::Hand;

#[test]
fn category_four_of_a_kind() {
    assert_eq!(classify_hand("AAAA2").unwrap(), Category::FourOfAKind);
    assert_eq!(classify_hand("9A999").unwrap(), Category::FourOfAKind);
}

#[test]
fn category_full_house() {
    assert_eq!(classify_hand("AAAKK").unwrap(), Category::FullHouse);
    assert_eq!(classify_hand("3J3J3").unwrap(), Category::FullHouse);
}

#[test]
fn category_triple() {
    assert_eq!(classify_hand("AAA23").unwrap(), Category::Triple);
    assert_eq!(classify_hand("QTQ2Q").unwrap(), Category::Triple);
}

#[test]
fn category_two_pair() {
    assert_eq!(classify_hand("AAKK2").unwrap(), Category::TwoPair);
    assert_eq!(classify_hand("J9J92").unwrap(), Category::TwoPair);
}

#[test]
fn single_pair_counts_as_two_pair() {
    assert_eq!(classify_hand("AA234").unwrap(), Category::TwoPair);
    assert_eq!(classify_hand("2KQ2T").unwrap(), Category::TwoPair);
}

#[test]
fn category_high_card() {
    assert_eq!(classify_hand("23456").unwrap(), Category::HighCard);
    assert_eq!(classify_hand("AK752").unwrap(), Category::HighCard);
}

#[test]
fn straights_and_broadway_are_high_card() {
    assert_eq!(classify_hand("TJQKA").unwrap(), Category::HighCard);
    assert_eq!(classify_hand("A2345").unwrap(), Category::HighCard);
}

#[test]
fn monorank_hand_is_rejected() {
    let err = classify_hand("AAAAA").unwrap_err();
    assert_eq!(err, ClassifyError::InsufficientData { distinct: 1 });
    assert!(err.to_string().contains("insufficient data"));
}

#[test]
fn category_depends_only_on_profile() {
    let a = evaluate(&Hand::new("KKQQ3")).unwrap();
    let b = evaluate(&Hand::new("4477A")).unwrap();
    assert_eq!(a.profile, b.profile);
    assert_eq!(a.category, b.category);
    assert_eq!(classify(&FrequencyProfile::from_hand(&Hand::new("KKQQ3"))).unwrap(), a.category);
}

#[test]
fn malformed_hands_still_classify() {
    // No alphabet or length validation at classification time.
    assert_eq!(classify_hand("xxyz").unwrap(), Category::TwoPair);
    assert_eq!(classify_hand("AAAAAAK").unwrap(), Category::HighCard);
    assert_eq!(classify_hand("AAAAK2").unwrap(), Category::FourOfAKind);
}
