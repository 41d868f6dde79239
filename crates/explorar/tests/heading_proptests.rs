//! Property-based tests for the heading algebra, position bounds and
//! parser round-trip.

#![allow(clippy::unwrap_used)]

use explorar::{parse_line, ExplorarError, GridBounds, Heading, Position, Rotation};
use proptest::prelude::*;

// ===== Strategies =====

fn heading_strategy() -> impl Strategy<Value = Heading> {
    prop_oneof![
        Just(Heading::North),
        Just(Heading::South),
        Just(Heading::East),
        Just(Heading::West),
    ]
}

fn rotation_strategy() -> impl Strategy<Value = Rotation> {
    prop_oneof![Just(Rotation::Left), Just(Rotation::Right)]
}

fn command_char_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just('L'), Just('R'), Just('M')]
}

fn inverse(rotation: Rotation) -> Rotation {
    match rotation {
        Rotation::Left => Rotation::Right,
        Rotation::Right => Rotation::Left,
    }
}

// ===== Heading group laws =====

proptest! {
    #[test]
    fn prop_left_then_right_is_identity(heading in heading_strategy()) {
        prop_assert_eq!(heading.turned(Rotation::Left).turned(Rotation::Right), heading);
        prop_assert_eq!(heading.turned(Rotation::Right).turned(Rotation::Left), heading);
    }

    #[test]
    fn prop_four_equal_turns_are_identity(
        heading in heading_strategy(),
        rotation in rotation_strategy(),
    ) {
        let mut current = heading;
        for _ in 0..4 {
            current = current.turned(rotation);
        }
        prop_assert_eq!(current, heading);
    }

    #[test]
    fn prop_any_turn_sequence_can_be_undone(
        heading in heading_strategy(),
        rotations in prop::collection::vec(rotation_strategy(), 0..32),
    ) {
        let mut current = heading;
        for rotation in &rotations {
            current = current.turned(*rotation);
        }
        for rotation in rotations.iter().rev() {
            current = current.turned(inverse(*rotation));
        }
        prop_assert_eq!(current, heading);
    }

    #[test]
    fn prop_net_rotation_decides_the_final_heading(
        heading in heading_strategy(),
        rotations in prop::collection::vec(rotation_strategy(), 0..32),
    ) {
        let mut current = heading;
        for rotation in &rotations {
            current = current.turned(*rotation);
        }

        let rights = rotations.iter().filter(|r| **r == Rotation::Right).count() as i64;
        let lefts = rotations.len() as i64 - rights;
        let mut expected = heading;
        for _ in 0..(rights - lefts).rem_euclid(4) {
            expected = expected.turned(Rotation::Right);
        }
        prop_assert_eq!(current, expected);
    }

    #[test]
    fn prop_turning_rotates_the_delta_a_quarter_turn(heading in heading_strategy()) {
        let (dx, dy) = heading.delta();
        prop_assert_eq!(heading.turned(Rotation::Left).delta(), (-dy, dx));
        prop_assert_eq!(heading.turned(Rotation::Right).delta(), (dy, -dx));
    }
}

// ===== Position bounds =====

proptest! {
    #[test]
    fn prop_in_bounds_positions_construct(x in 0..6i32, y in 0..6i32) {
        let position = Position::new(x, y, GridBounds::default()).unwrap();
        prop_assert_eq!((position.x(), position.y()), (x, y));
    }

    #[test]
    fn prop_out_of_bounds_positions_fail(x in -20..26i32, y in -20..26i32) {
        prop_assume!(!GridBounds::default().contains(x, y));
        let err = Position::new(x, y, GridBounds::default()).unwrap_err();
        prop_assert!(
            matches!(err, ExplorarError::OutOfBounds { .. }),
            "unexpected error: {err}"
        );
    }
}

// ===== Parser round-trip =====

proptest! {
    #[test]
    fn prop_valid_lines_parse_and_round_trip(
        x in 0..6i32,
        y in 0..6i32,
        heading in heading_strategy(),
        commands in prop::collection::vec(command_char_strategy(), 1..40),
        lowercase in any::<bool>(),
    ) {
        let command_text: String = commands.iter().collect();
        let line = format!("{x} {y} {heading}|{command_text}");
        let input = if lowercase { line.to_lowercase() } else { line.clone() };

        let parsed = parse_line(&input, GridBounds::default()).unwrap();
        prop_assert_eq!((parsed.x, parsed.y), (x, y));
        prop_assert_eq!(parsed.heading, heading);

        let reformatted: String = parsed.commands.iter().map(|c| c.as_char()).collect();
        let canonical = format!("{} {} {}|{}", parsed.x, parsed.y, parsed.heading, reformatted);
        prop_assert_eq!(canonical, input.to_uppercase());
    }

    #[test]
    fn prop_intruder_command_chars_are_reported(
        x in 0..6i32,
        y in 0..6i32,
        heading in heading_strategy(),
        commands in prop::collection::vec(command_char_strategy(), 1..20),
        intruder in prop_oneof![Just('X'), Just('Q'), Just('Z'), Just('7'), Just('?')],
        at in any::<prop::sample::Index>(),
    ) {
        let mut command_chars = commands;
        command_chars.insert(at.index(command_chars.len() + 1), intruder);
        let command_text: String = command_chars.iter().collect();
        let line = format!("{x} {y} {heading}|{command_text}");

        let err = parse_line(&line, GridBounds::default()).unwrap_err();
        match err {
            ExplorarError::InvalidCommandChar { found, .. } => {
                prop_assert!(found.contains(intruder));
            }
            other => prop_assert!(false, "unexpected error: {other}"),
        }
    }
}

// ===== Plain invariants =====

#[test]
fn invariant_all_four_headings_have_distinct_deltas() {
    let mut deltas: Vec<(i32, i32)> = Heading::ALL.iter().map(|h| h.delta()).collect();
    deltas.sort_unstable();
    deltas.dedup();
    assert_eq!(deltas.len(), 4);
}

#[test]
fn invariant_left_orbit_visits_every_heading() {
    let mut seen = vec![Heading::North];
    let mut current = Heading::North;
    for _ in 0..3 {
        current = current.turned(Rotation::Left);
        seen.push(current);
    }
    seen.sort_by_key(|h| h.as_char());
    seen.dedup();
    assert_eq!(seen.len(), 4);
}
