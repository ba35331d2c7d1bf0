use crate::ko::{KoRule, Position};
use crate::point::Point;
use crate::turn::Move;

/// What undoing a move has to reverse, alongside the position it produced.
#[derive(Debug, Clone)]
struct Entry {
    captured: Vec<Point>,
    position: Position,
}

/// Append-only move log plus the position reached after every move.
#[derive(Debug, Clone)]
pub struct History {
    initial: Position,
    moves: Vec<Move>,
    entries: Vec<Entry>,
}

impl History {
    pub fn new(initial: Position) -> Self {
        History {
            initial,
            moves: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Points captured by the most recent move.
    pub fn last_captured(&self) -> &[Point] {
        match self.entries.last() {
            Some(entry) => &entry.captured,
            None => &[],
        }
    }

    /// The position after the most recent move.
    pub fn current_position(&self) -> &Position {
        self.entries.last().map_or(&self.initial, |e| &e.position)
    }

    /// Every position of the game, oldest first, starting with the empty board.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        std::iter::once(&self.initial).chain(self.entries.iter().map(|e| &e.position))
    }

    /// Whether `position` recreates a position forbidden under `rule`.
    pub fn repeats(&self, position: &Position, rule: KoRule) -> bool {
        match rule {
            KoRule::Simple => self.position_before_last() == Some(position),
            KoRule::Superko => self.positions().any(|p| p == position),
        }
    }

    pub fn record(&mut self, mv: Move, captured: Vec<Point>, position: Position) {
        self.moves.push(mv);
        self.entries.push(Entry { captured, position });
    }

    /// Remove the most recent move, returning it with the points it captured.
    pub(crate) fn pop(&mut self) -> Option<(Move, Vec<Point>)> {
        let mv = self.moves.pop()?;
        let entry = self
            .entries
            .pop()
            .expect("move log and position log have the same length");
        Some((mv, entry.captured))
    }

    /// The position just before the opponent's last move.
    fn position_before_last(&self) -> Option<&Position> {
        match self.entries.len() {
            0 => None,
            1 => Some(&self.initial),
            n => Some(&self.entries[n - 2].position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goban::tests::goban_from_layout;
    use crate::stone::Stone;
    use crate::turn::Action;

    fn pass(number: u32, stone: Stone) -> Move {
        Move {
            number,
            stone,
            action: Action::Pass,
        }
    }

    #[test]
    fn starts_empty() {
        let empty = goban_from_layout(&["++", "++"]).position();
        let history = History::new(empty.clone());
        assert!(history.is_empty());
        assert_eq!(history.current_position(), &empty);
        assert!(history.last_captured().is_empty());
        assert!(!history.repeats(&empty, KoRule::Simple));
        assert!(history.repeats(&empty, KoRule::Superko));
    }

    #[test]
    fn simple_ko_looks_one_move_back() {
        let a = goban_from_layout(&["++", "++"]).position();
        let b = goban_from_layout(&["B+", "++"]).position();
        let c = goban_from_layout(&["B+", "+W"]).position();

        let mut history = History::new(a.clone());
        history.record(pass(1, Stone::Black), Vec::new(), b.clone());
        history.record(pass(2, Stone::White), Vec::new(), c.clone());

        assert!(history.repeats(&b, KoRule::Simple));
        assert!(!history.repeats(&a, KoRule::Simple));
        assert!(history.repeats(&a, KoRule::Superko));
        assert!(history.repeats(&c, KoRule::Superko));
    }

    #[test]
    fn pop_returns_last_move_and_captures() {
        let a = goban_from_layout(&["++", "++"]).position();
        let b = goban_from_layout(&["B+", "++"]).position();

        let mut history = History::new(a.clone());
        history.record(pass(1, Stone::Black), vec![Point::new(1, 1)], b);

        let (mv, captured) = history.pop().unwrap();
        assert_eq!(mv.number, 1);
        assert_eq!(captured, vec![Point::new(1, 1)]);
        assert_eq!(history.current_position(), &a);
        assert!(history.pop().is_none());
    }
}
