// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Position};

#[test]
fn test_all_contains_twelve_positions() {
    assert_eq!(Position::ALL.len(), 12);
}

#[test]
fn test_field_positions_exclude_out() {
    assert_eq!(Position::FIELD_POSITIONS.len(), 11);
    assert!(!Position::FIELD_POSITIONS.contains(&Position::Out));
}

#[test]
fn test_parse_round_trips_every_position() {
    for position in Position::ALL {
        let parsed: Position = Position::parse(position.as_str()).unwrap();
        assert_eq!(parsed, position, "round trip failed for {position}");
    }
}

#[test]
fn test_parse_rejects_unknown_position() {
    let result: Result<Position, DomainError> = Position::parse("Goalkeeper");
    assert!(matches!(result, Err(DomainError::UnknownPosition(_))));
}

#[test]
fn test_parse_is_case_sensitive() {
    let result: Result<Position, DomainError> = Position::parse("pitcher");
    assert!(matches!(result, Err(DomainError::UnknownPosition(_))));
}

#[test]
fn test_display_strings() {
    assert_eq!(Position::ShortStop.as_str(), "Short Stop");
    assert_eq!(Position::LeftCenter.as_str(), "Left Center");
    assert_eq!(Position::RightCenter.as_str(), "Right Center");
    assert_eq!(Position::Out.as_str(), "Out");
}

#[test]
fn test_is_out() {
    assert!(Position::Out.is_out());
    for position in Position::FIELD_POSITIONS {
        assert!(!position.is_out(), "{position} should not be the Out slot");
    }
}
