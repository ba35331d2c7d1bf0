//! Move legality as a pure computation.
//!
//! [`validate`] never touches the live board: placement and captures are
//! worked out on a scratch copy, and the result is handed back as a
//! [`Transition`] for the game to commit. A rejected move therefore leaves
//! nothing behind to roll back.

use crate::error::GoError;
use crate::goban::Goban;
use crate::history::History;
use crate::ko::Position;
use crate::point::Point;
use crate::rules::Rules;
use crate::stone::Stone;
use crate::turn::Action;

/// A legal, not yet committed, state change.
#[derive(Debug, Clone)]
pub struct Transition {
    pub(crate) stone: Stone,
    pub(crate) action: Action,
    /// Board after the move; `None` for a pass.
    pub(crate) goban: Option<Goban>,
    pub(crate) captured: Vec<Point>,
    pub(crate) position: Position,
}

impl Transition {
    pub fn stone(&self) -> Stone {
        self.stone
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn captured(&self) -> &[Point] {
        &self.captured
    }

    pub fn position(&self) -> &Position {
        &self.position
    }
}

/// Decide whether `stone` may take `action` on `goban` given the game so far.
///
/// Checks run in order: bounds, occupancy, captures, suicide, repetition.
/// Captures are resolved before the suicide check, so a stone that only
/// gains liberties by capturing is legal.
pub fn validate(
    goban: &Goban,
    history: &History,
    rules: &Rules,
    action: Action,
    stone: Stone,
) -> Result<Transition, GoError> {
    let point = match action {
        Action::Pass => {
            return Ok(Transition {
                stone,
                action,
                goban: None,
                captured: Vec::new(),
                position: goban.position(),
            });
        }
        Action::Place(point) => point,
    };

    if !goban.on_board(point) {
        return Err(GoError::OutOfBounds);
    }

    if !goban.cell(point).is_empty() {
        return Err(GoError::OccupiedPoint);
    }

    let mut next = goban.clone();
    next.place(point, stone);
    let captured = next.resolve_captures(point, stone);

    if next.liberties(point).is_empty() {
        return Err(GoError::SuicideMove);
    }

    let position = next.position();
    if history.repeats(&position, rules.ko) {
        return Err(GoError::KoViolation);
    }

    Ok(Transition {
        stone,
        action,
        goban: Some(next),
        captured,
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goban::tests::goban_from_layout;

    fn check(layout: &[&str], col: u8, row: u8, stone: Stone) -> Result<Transition, GoError> {
        let goban = goban_from_layout(layout);
        let history = History::new(goban.position());
        validate(
            &goban,
            &history,
            &Rules::default(),
            Action::Place(Point::new(col, row)),
            stone,
        )
    }

    #[test]
    fn pass_is_always_legal() {
        let goban = goban_from_layout(&["BW", "WB"]);
        let history = History::new(goban.position());
        let t = validate(&goban, &history, &Rules::default(), Action::Pass, Stone::White).unwrap();

        assert!(t.goban.is_none());
        assert!(t.captured().is_empty());
        assert_eq!(t.position(), &goban.position());
    }

    #[test]
    fn rejects_out_of_bounds() {
        let result = check(&["++", "++"], 2, 0, Stone::Black);
        assert_eq!(result.unwrap_err(), GoError::OutOfBounds);
    }

    #[test]
    fn rejects_occupied_by_either_color() {
        let layout = &["BW", "++"];
        assert_eq!(check(layout, 0, 0, Stone::Black).unwrap_err(), GoError::OccupiedPoint);
        assert_eq!(check(layout, 0, 0, Stone::White).unwrap_err(), GoError::OccupiedPoint);
        assert_eq!(check(layout, 1, 0, Stone::Black).unwrap_err(), GoError::OccupiedPoint);
    }

    #[test]
    fn rejects_suicide() {
        let result = check(&["+B++", "B+++", "++++", "++++"], 0, 0, Stone::White);
        assert_eq!(result.unwrap_err(), GoError::SuicideMove);
    }

    #[test]
    fn rejects_group_suicide() {
        // White (0,1) would join (0,0) and leave the pair without liberties.
        let result = check(&["WB++", "+B++", "B+++", "++++"], 0, 1, Stone::White);
        assert_eq!(result.unwrap_err(), GoError::SuicideMove);
    }

    #[test]
    fn capture_before_suicide_check() {
        // Black (1,0) keeps a liberty at (2,0): White (0,0) would be suicide.
        let result = check(&["+B++", "BW++", "++++", "++++"], 0, 0, Stone::White);
        assert_eq!(result.unwrap_err(), GoError::SuicideMove);

        // Without it, White captures (1,0) and breathes through the gap.
        let t = check(&["+BW+", "BW++", "++++", "++++"], 0, 0, Stone::White).unwrap();
        assert_eq!(t.captured(), &[Point::new(1, 0)]);
        assert_eq!(t.goban.unwrap().stone_at(Point::new(0, 1)), Some(Stone::Black));
    }

    #[test]
    fn input_board_is_untouched() {
        let goban = goban_from_layout(&["+BW+", "BW++", "++++", "++++"]);
        let before = goban.clone();
        let history = History::new(goban.position());
        validate(
            &goban,
            &history,
            &Rules::default(),
            Action::Place(Point::new(0, 0)),
            Stone::White,
        )
        .unwrap();

        assert_eq!(goban, before);
    }

    #[test]
    fn detects_immediate_recapture() {
        // Black captured a white stone at (1,1) from this position.
        let before = goban_from_layout(&["+BW+", "BW+W", "+BW+", "++++"]);
        let after = goban_from_layout(&["+BW+", "B+BW", "+BW+", "++++"]);

        let mut history = History::new(goban_from_layout(&["++++"; 4]).position());
        history.record(
            crate::turn::Move {
                number: 1,
                stone: Stone::White,
                action: Action::Pass,
            },
            Vec::new(),
            before.position(),
        );
        history.record(
            crate::turn::Move {
                number: 2,
                stone: Stone::Black,
                action: Action::Place(Point::new(2, 1)),
            },
            vec![Point::new(1, 1)],
            after.position(),
        );

        let result = validate(
            &after,
            &history,
            &Rules::default(),
            Action::Place(Point::new(1, 1)),
            Stone::White,
        );
        assert_eq!(result.unwrap_err(), GoError::KoViolation);
    }
}
