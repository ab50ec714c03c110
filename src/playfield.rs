use tracing::debug;

use crate::action::Action;
use crate::board::Board;

/// Owns the live board on behalf of an external shell (an agent loop, a
/// frontend): consumes actions, answers nothing, and exposes the board for
/// display. Placement and removal edit the board directly; moves go through
/// the legality-checked incremental move, so illegal input degrades to a
/// no-op here too.
pub struct Playfield {
    board: Board,
}

impl Playfield {
    pub fn new(board: Board) -> Playfield {
        Playfield { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn execute(&mut self, action: &Action) {
        match *action {
            Action::Place(loc) => self.board.add_tower(loc),
            Action::Remove(loc) => self.board.remove_tower(loc),
            Action::Move { from, to } => self.board.move_tower(from, to),
        }
        debug!(%action, towers = self.board.tower_count(), "applied");
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::Loc;

    #[test]
    fn actions_drive_the_owned_board() {
        let mut field = Playfield::new(Board::new(8).unwrap());

        field.execute(&Action::Place(Loc::new(2, 2)));
        assert!(field.board().tower_at(Loc::new(2, 2)));

        field.execute(&Action::Move {
            from: Loc::new(2, 2),
            to: Loc::new(2, 0),
        });
        assert!(field.board().tower_at(Loc::new(2, 0)));

        field.execute(&Action::Remove(Loc::new(2, 0)));
        assert_eq!(field.board().tower_count(), 0);
    }

    #[test]
    fn illegal_moves_leave_the_board_alone() {
        let mut field = Playfield::new(Board::with_corner_towers(8).unwrap());
        let before = field.board().clone();
        field.execute(&Action::Move {
            from: Loc::new(4, 4),
            to: Loc::new(5, 5),
        });
        assert_eq!(*field.board(), before);
    }
}
