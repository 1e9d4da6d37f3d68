use crate::model::responses::QUESTION_COUNT;
use crate::model::reversal::{REVERSAL_MASK, contribution, is_reversed};

#[test]
fn test_mask_reverses_questions_5_and_9() {
    let reversed: Vec<usize> = (0..QUESTION_COUNT).filter(|&p| is_reversed(p)).collect();
    assert_eq!(reversed, vec![4, 8]);
    assert_eq!(REVERSAL_MASK.len(), QUESTION_COUNT);
}

#[test]
fn test_position_past_end_is_not_reversed() {
    assert!(!is_reversed(QUESTION_COUNT));
    assert!(!is_reversed(usize::MAX));
}

#[test]
fn test_contribution_inverts_reversed_positions() {
    assert_eq!(contribution(4, 0), 3);
    assert_eq!(contribution(4, 3), 0);
    assert_eq!(contribution(8, 1), 2);
    assert_eq!(contribution(8, 2), 1);
}

#[test]
fn test_contribution_passes_through_other_positions() {
    for position in [0, 1, 2, 3, 5, 6, 7, 9] {
        for value in 0..=3 {
            assert_eq!(contribution(position, value), value);
        }
    }
}
