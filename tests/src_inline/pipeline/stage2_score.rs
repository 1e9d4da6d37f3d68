use crate::model::responses::{QUESTION_COUNT, ResponseVector};
use crate::model::score::{MAX_SCORE, Score};
use crate::pipeline::stage1_validate::RangeViolation;
use crate::pipeline::stage2_score::{ScoreError, compute};

fn uniform(value: i32) -> ResponseVector {
    ResponseVector::new([value; QUESTION_COUNT])
}

fn reference_total(values: &[i32; QUESTION_COUNT]) -> u32 {
    let mut total = 0;
    for (idx, &v) in values.iter().enumerate() {
        total += if idx == 4 || idx == 8 { 3 - v } else { v };
    }
    total as u32
}

#[test]
fn test_uniform_vectors() {
    assert_eq!(compute(&uniform(0)), Ok(Score::new(6)));
    assert_eq!(compute(&uniform(1)), Ok(Score::new(12)));
    assert_eq!(compute(&uniform(2)), Ok(Score::new(18)));
    assert_eq!(compute(&uniform(3)), Ok(Score::new(24)));
}

#[test]
fn test_extremes_reach_score_bounds() {
    let min = ResponseVector::new([0, 0, 0, 0, 3, 0, 0, 0, 3, 0]);
    let max = ResponseVector::new([3, 3, 3, 3, 0, 3, 3, 3, 0, 3]);
    assert_eq!(compute(&min), Ok(Score::new(0)));
    assert_eq!(compute(&max), Ok(Score::new(MAX_SCORE)));
}

#[test]
fn test_sweep_matches_reference_sum() {
    // every 4^10 combination is an index; stride through them with a prime
    let combinations = 4u32.pow(QUESTION_COUNT as u32);
    let mut index = 0u32;
    while index < combinations {
        let mut values = [0i32; QUESTION_COUNT];
        let mut rest = index;
        for slot in values.iter_mut() {
            *slot = (rest % 4) as i32;
            rest /= 4;
        }
        let score = compute(&ResponseVector::new(values)).unwrap();
        assert_eq!(score.total(), reference_total(&values), "{values:?}");
        assert!(score.total() <= MAX_SCORE);
        index += 7919;
    }
}

#[test]
fn test_compute_is_repeatable() {
    let responses = ResponseVector::new([2, 0, 3, 1, 2, 3, 0, 1, 1, 2]);
    let first = compute(&responses);
    let second = compute(&responses);
    assert_eq!(first, second);
    assert_eq!(first, Ok(Score::new(reference_total(&[2, 0, 3, 1, 2, 3, 0, 1, 1, 2]))));
}

#[test]
fn test_out_of_range_value_fails_at_any_position() {
    for position in 0..QUESTION_COUNT {
        let mut values = [0; QUESTION_COUNT];
        values[position] = 5;
        let err = compute(&ResponseVector::new(values)).unwrap_err();
        let ScoreError::Range(violations) = err;
        let found: Vec<RangeViolation> = violations.iter().copied().collect();
        assert_eq!(found, vec![RangeViolation { position, value: 5 }]);
    }
}

#[test]
fn test_negative_value_fails() {
    let mut values = [3; QUESTION_COUNT];
    values[8] = -1;
    assert!(compute(&ResponseVector::new(values)).is_err());
}
