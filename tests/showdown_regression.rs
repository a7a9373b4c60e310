use poker_showdown::evaluator::{
    compare, showdown, ErrorKind, EvalError, HandSlot, Verdict, TIE,
};
use poker_showdown::hand::Hand;

// Both four of a kind. Sorted strengths [1,13,13,13,13] vs [11,12,12,12,12]:
// the lone deuce loses at index 0 even though the quads are Aces.
#[test]
fn quads_tie_break_starts_from_the_weakest_card() {
    assert_eq!(showdown("AAAA2", "KKKKQ").unwrap(), "KKKKQ");
    assert_eq!(showdown("KKKKQ", "AAAA2").unwrap(), "KKKKQ");
}

#[test]
fn high_card_tie_break() {
    // [1,2,3,4,5] vs [1,2,3,5,6]
    assert_eq!(showdown("23456", "23457").unwrap(), "23457");
}

#[test]
fn stronger_category_wins_regardless_of_ranks() {
    assert_eq!(showdown("22223", "AAAKK").unwrap(), "22223");
    assert_eq!(showdown("AAAKK", "2223A").unwrap(), "AAAKK");
    assert_eq!(showdown("AAKKQ", "22234").unwrap(), "22234");
    assert_eq!(showdown("AKQJ9", "22345").unwrap(), "22345");
}

#[test]
fn pair_and_two_pair_share_a_category() {
    // AA234 -> [1,2,3,13,13], KKQQ2 -> [1,11,11,12,12]; index 1 decides.
    assert_eq!(showdown("AA234", "KKQQ2").unwrap(), "KKQQ2");
}

#[test]
fn full_house_compares_all_five_cards() {
    // [1,1,1,2,2] vs [1,1,2,2,2]
    assert_eq!(showdown("22233", "33322").unwrap(), "33322");
}

#[test]
fn straights_are_not_special() {
    // [1,2,3,4,5] vs [1,2,3,4,13]
    assert_eq!(showdown("23456", "2345A").unwrap(), "2345A");
}

#[test]
fn same_ranks_in_any_order_tie() {
    assert_eq!(showdown("AKQJT", "TJQKA").unwrap(), TIE);
    assert_eq!(showdown("AAKK2", "2KAKA").unwrap(), TIE);
}

#[test]
fn monorank_first_hand_fails() {
    let err = showdown("AAAAA", "23456").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Classification);
    assert_eq!(err.slot(), HandSlot::First);
    assert_eq!(
        err.to_string(),
        "failed to classify hand1: insufficient data: frequency profile has 1 entries, need at least 2"
    );
}

#[test]
fn monorank_second_hand_fails() {
    let err = showdown("23456", "KKKKK").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Classification);
    assert!(err.to_string().starts_with("failed to classify hand2"));
}

#[test]
fn short_hands_fail_only_when_tie_break_is_needed() {
    let err = showdown("AK", "QJ").unwrap_err();
    assert_eq!(err, EvalError::InvalidHandLength { slot: HandSlot::First, len: 2 });
    assert_eq!(err.kind(), ErrorKind::InvalidHandLength);

    // Categories differ, so no tie-break and no length check.
    assert_eq!(showdown("AAK", "23456").unwrap(), "AAK");
}

#[test]
fn lowercase_symbols_are_weakest() {
    // 'a' is not a rank symbol: profile [4,1] still makes quads, strengths are 0.
    assert_eq!(compare(&Hand::new("aaaa2"), &Hand::new("KKKKQ")).unwrap(), Verdict::SecondWins);
}
