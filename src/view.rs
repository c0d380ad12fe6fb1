//! Read-only snapshot for presentation layers.
//!
//! A `GameView` carries everything a front-end renders: board contents,
//! which pieces each player still holds, whose turn it is and what they
//! picked. It serializes to JSON for non-Rust front-ends.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Cell};
use crate::core::{GameState, Player, PlayerMap, TurnPhase};
use crate::games::levels::LevelsGame;
use crate::pieces::Weight;
use crate::rules::GameResult;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub game_number: u32,
    pub turn_number: u32,
    pub starter: Player,
    /// `None` once the game is over.
    pub active_player: Option<Player>,
    pub selected: Option<Weight>,
    pub cells: Vec<Cell>,
    /// Unused weights per player, lightest first.
    pub available: PlayerMap<SmallVec<[Weight; 6]>>,
    pub phase: TurnPhase,
    /// Result of the most recently finished game of the session.
    pub last_result: Option<GameResult>,
}

impl GameView {
    /// Snapshot `state` as seen by a front-end.
    #[must_use]
    pub fn capture(game: &LevelsGame, state: &GameState) -> Self {
        Self {
            game_number: state.game_number,
            turn_number: state.turn_number,
            starter: state.starter,
            active_player: state.active_player(),
            selected: state.selected(),
            cells: state.board.cells().to_vec(),
            available: PlayerMap::new(|p| state.inventory(p).available()),
            phase: state.phase,
            last_result: game.last_result(),
        }
    }

    /// Rebuild the board from the snapshot.
    #[must_use]
    pub fn board(&self) -> Board {
        let mut cells: [Cell; 9] = [None; 9];
        for (slot, cell) in cells.iter_mut().zip(&self.cells) {
            *slot = *cell;
        }
        Board::from_cells(cells)
    }

    /// Headline for the turn ("Player 2 to move, level 4 selected").
    #[must_use]
    pub fn headline(&self) -> String {
        match (self.active_player, self.selected, self.phase) {
            (Some(player), Some(weight), _) => format!("{player} to move, level {weight} selected"),
            (Some(player), None, _) => format!("{player} to move, select a level"),
            (None, _, TurnPhase::GameOver { result }) => result.announcement(),
            (None, _, _) => "Waiting for a new game".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::games::levels::LevelsGameBuilder;

    #[test]
    fn test_capture_fresh_game() {
        let (game, state) = LevelsGameBuilder::new().build();
        let view = GameView::capture(&game, &state);

        assert_eq!(view.active_player, Some(Player::One));
        assert_eq!(view.selected, None);
        assert!(view.cells.iter().all(Option::is_none));
        assert_eq!(view.available[Player::Two].len(), 6);
        assert_eq!(view.headline(), "Player 1 to move, select a level");
        assert_eq!(view.board(), state.board);
    }

    #[test]
    fn test_capture_after_moves() {
        let (mut game, mut state) = LevelsGameBuilder::new().build();
        let three = Weight::new(3).unwrap();
        game.select_piece(&mut state, Player::One, three).unwrap();
        game.place_piece(&mut state, Position::new(4).unwrap()).unwrap();
        game.select_piece(&mut state, Player::Two, Weight::MAX).unwrap();

        let view = GameView::capture(&game, &state);
        assert_eq!(view.headline(), "Player 2 to move, level 6 selected");
        assert!(!view.available[Player::One].contains(&three));
        assert_eq!(view.board(), state.board);
    }

    #[test]
    fn test_view_json() {
        let (game, state) = LevelsGameBuilder::new().build();
        let view = GameView::capture(&game, &state);

        let json = serde_json::to_string(&view).unwrap();
        let back: GameView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, back);
    }
}
