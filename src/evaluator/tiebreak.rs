use super::{EvalError, HandSlot, Verdict};
use crate::hand::{Hand, HAND_SIZE};
use tracing::{event, Level};

/// Settle two hands of the same category by their sorted strengths.
///
/// Each hand's strengths are sorted ascending and compared position by
/// position starting from the weakest card; the first difference decides.
/// Every category is treated alike, there is no kicker logic.
///
/// ```
/// use poker_showdown::evaluator::{break_tie, Verdict};
/// use poker_showdown::hand::Hand;
///
/// // [1,2,3,4,5] vs [1,2,3,5,6]: index 3 decides
/// let v = break_tie(&Hand::new("23456"), &Hand::new("23457")).unwrap();
/// assert_eq!(v, Verdict::SecondWins);
/// ```
pub fn break_tie(hand1: &Hand, hand2: &Hand) -> Result<Verdict, EvalError> {
    let a = sorted_strengths(hand1, HandSlot::First)?;
    let b = sorted_strengths(hand2, HandSlot::Second)?;

    let verdict = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| x.cmp(y))
        .find(|ord| ord.is_ne())
        .map(Verdict::from)
        .unwrap_or(Verdict::Equal);

    event!(Level::TRACE, first = ?a, second = ?b, ?verdict, "tie-break");
    Ok(verdict)
}

fn sorted_strengths(hand: &Hand, slot: HandSlot) -> Result<[u8; HAND_SIZE], EvalError> {
    let strengths = hand.strengths();
    let mut out: [u8; HAND_SIZE] = strengths
        .as_slice()
        .try_into()
        .map_err(|_| EvalError::InvalidHandLength { slot, len: strengths.len() })?;
    out.sort_unstable();
    Ok(out)
}
