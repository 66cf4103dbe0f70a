use super::*;
use crate::dice::roller::Roller;

struct MockRoller {
    value_to_return: u32,
}

impl Roller for MockRoller {
    fn roll_in_range(&self, _max: u32) -> u32 {
        self.value_to_return
    }
}

fn sides(n: u32) -> Sides {
    Sides::new(n).unwrap()
}

#[test]
fn test_roll_returns_roller_value_and_requested_sides() {
    let roller = MockRoller { value_to_return: 4 };
    let outcome = roll(&roller, "6").unwrap();

    assert_eq!(outcome.result(), 4);
    assert_eq!(outcome.sides(), 6);
}

#[test]
fn test_roll_stays_in_range_with_real_rng() {
    let roller = ThreadRngRoller::new();

    for sides in [1u32, 2, 4, 6, 10, 20, 100] {
        for _ in 0..500 {
            let outcome = roll(&roller, &sides.to_string()).unwrap();
            assert!((1..=sides).contains(&outcome.result()));
            assert_eq!(outcome.sides(), sides);
        }
    }
}

#[test]
fn test_one_sided_die_always_rolls_one() {
    let roller = ThreadRngRoller::new();
    for _ in 0..200 {
        assert_eq!(roll(&roller, "1").unwrap().result(), 1);
    }
}

#[test]
fn test_non_numeric_input_is_not_a_number() {
    let roller = MockRoller { value_to_return: 1 };

    for input in ["abc", "", "   ", "null", "NaN", "6abc", "d20"] {
        assert_eq!(
            roll(&roller, input),
            Err(RollError::NotANumber(input.to_string())),
            "input {input:?}"
        );
    }
}

#[test]
fn test_numeric_but_unusable_input_is_invalid_sides() {
    let roller = MockRoller { value_to_return: 1 };

    for input in ["0", "-5", "2.5", "inf", "-inf", "4294967296", "1e20"] {
        assert_eq!(
            roll(&roller, input),
            Err(RollError::InvalidSides(input.to_string())),
            "input {input:?}"
        );
    }
}

#[test]
fn test_sides_coercion_accepts_numeric_spellings() {
    assert_eq!(" 6 ".parse::<Sides>(), Ok(sides(6)));
    assert_eq!("+20".parse::<Sides>(), Ok(sides(20)));
    assert_eq!("20.0".parse::<Sides>(), Ok(sides(20)));
    assert_eq!("1e2".parse::<Sides>(), Ok(sides(100)));
    assert_eq!("4294967295".parse::<Sides>(), Ok(sides(u32::MAX)));
}

#[test]
fn test_sides_rejects_zero() {
    assert_eq!(Sides::new(0), Err(RollError::InvalidSides("0".to_string())));
    assert_eq!(Sides::try_from(12).map(Sides::get), Ok(12));
}

#[test]
fn test_roller_out_of_range_is_reported() {
    let roller = MockRoller { value_to_return: 7 };
    assert_eq!(
        roll_sides(&roller, sides(6)),
        Err(RollError::OutOfRange { result: 7, sides: 6 })
    );

    let roller = MockRoller { value_to_return: 0 };
    assert!(matches!(
        roll_sides(&roller, sides(6)),
        Err(RollError::OutOfRange { result: 0, .. })
    ));
}

#[test]
fn test_roll_result_serializes_to_exactly_two_fields() {
    let outcome = RollResult::new(3, sides(6)).unwrap();
    let value = serde_json::to_value(outcome).unwrap();

    assert_eq!(value, serde_json::json!({ "result": 3, "sides": 6 }));
}

#[test]
fn test_roll_result_display() {
    let outcome = RollResult::new(17, sides(20)).unwrap();
    assert_eq!(outcome.to_string(), "17 - D20");
}

#[test]
fn test_history_is_most_recent_first() {
    let mut history = RollHistory::new();
    assert!(history.is_empty());
    assert_eq!(history.latest(), None);

    let first = RollResult::new(12, sides(20)).unwrap();
    let second = RollResult::new(3, sides(6)).unwrap();
    let third = RollResult::new(1, sides(2)).unwrap();
    history.record(first);
    history.record(second);
    history.record(third);

    assert_eq!(history.len(), 3);
    assert_eq!(history.latest(), Some(&third));
    assert_eq!(history.get(0), Some(&third));
    assert_eq!(history.get(2), Some(&first));
    assert_eq!(history.get(3), None);

    let order: Vec<u32> = history.iter().map(RollResult::sides).collect();
    assert_eq!(order, vec![2, 6, 20]);
}
