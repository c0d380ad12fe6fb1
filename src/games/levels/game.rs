//! Levels game implementation.

use tracing::{debug, info};

use crate::board::{Mark, Position};
use crate::core::{Action, DrawPolicy, GameConfig, GameState, Player, TurnPhase};
use crate::error::{MoveError, Result};
use crate::pieces::Weight;
use crate::rules::{GameResult, Outcome, RulesEngine};

/// The rules of levels tic-tac-toe.
#[derive(Clone, Debug, Default)]
pub struct LevelsGame {
    config: GameConfig,
    /// Result of the most recently finished game.
    last_result: Option<GameResult>,
    /// Finished games this session.
    games_finished: u32,
}

/// Builder for creating a LevelsGame.
#[derive(Clone, Debug, Default)]
pub struct LevelsGameBuilder {
    config: GameConfig,
}

impl LevelsGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn first_player(mut self, player: Player) -> Self {
        self.config.first_player = player;
        self
    }

    pub fn draw_policy(mut self, policy: DrawPolicy) -> Self {
        self.config.draw_policy = policy;
        self
    }

    pub fn alternate_starter(mut self, alternate: bool) -> Self {
        self.config.alternate_starter = alternate;
        self
    }

    pub fn auto_reset(mut self, auto_reset: bool) -> Self {
        self.config.auto_reset = auto_reset;
        self
    }

    /// Build the game and the state of its first round.
    pub fn build(self) -> (LevelsGame, GameState) {
        let state = GameState::new(self.config.first_player, 1);
        let game = LevelsGame {
            config: self.config,
            last_result: None,
            games_finished: 0,
        };
        (game, state)
    }
}

impl LevelsGame {
    /// Result of the most recently finished game.
    #[must_use]
    pub fn last_result(&self) -> Option<GameResult> {
        self.last_result
    }

    /// Number of games finished this session.
    #[must_use]
    pub fn games_finished(&self) -> u32 {
        self.games_finished
    }

    /// `player` picks their piece of `weight`.
    ///
    /// Picking again before placing replaces the selection.
    pub fn select_piece(&mut self, state: &mut GameState, player: Player, weight: Weight) -> Result<Outcome> {
        let active = match state.phase {
            TurnPhase::GameOver { .. } => return Err(MoveError::GameOver),
            TurnPhase::AwaitingSelection { player: active } | TurnPhase::PieceSelected { player: active, .. } => {
                active
            }
        };

        if player != active {
            return Err(MoveError::NotYourTurn {
                expected: active,
                actual: player,
            });
        }

        if !state.inventory(player).is_available(weight) {
            return Err(MoveError::PieceUnavailable {
                player,
                weight: weight.get(),
            });
        }

        state.phase = TurnPhase::PieceSelected { player, weight };
        state.record_action(player, Action::SelectPiece(weight));
        debug!(%player, %weight, "piece selected");

        Ok(Outcome::Selected { player, weight })
    }

    /// Put the selected piece on `position`.
    ///
    /// Empty cells and cells holding a strictly lighter piece accept it.
    pub fn place_piece(&mut self, state: &mut GameState, position: Position) -> Result<Outcome> {
        let (player, weight) = match state.phase {
            TurnPhase::GameOver { .. } => return Err(MoveError::GameOver),
            TurnPhase::AwaitingSelection { .. } => return Err(MoveError::NoPieceSelected),
            TurnPhase::PieceSelected { player, weight } => (player, weight),
        };

        if let Some(occupant) = state.board.get(position) {
            if occupant.weight >= weight {
                return Err(MoveError::InvalidMove {
                    position: position.into(),
                    occupant: occupant.weight.get(),
                    weight: weight.get(),
                });
            }
        }

        let captured = state.board.set(position, Mark::new(player, weight));
        state.inventories[player].mark_used(weight);
        state.record_action(player, Action::PlacePiece(position));
        debug!(%player, %weight, %position, captured = captured.is_some(), "piece placed");

        if let Some((owner, line)) = state.board.winning_line() {
            debug_assert_eq!(owner, player, "only the mover can complete a line");
            let result = GameResult::Winner(owner);
            self.finish(state, result);
            return Ok(Outcome::Finished {
                position,
                result,
                line: Some(line),
            });
        }

        let next = player.other();
        if self.is_draw(state, next) {
            self.finish(state, GameResult::Draw);
            return Ok(Outcome::Finished {
                position,
                result: GameResult::Draw,
                line: None,
            });
        }

        state.pass_turn(next);
        Ok(Outcome::Placed {
            position,
            captured,
            next,
        })
    }

    /// No line, and `next` cannot continue under the draw policy.
    fn is_draw(&self, state: &GameState, next: Player) -> bool {
        match self.config.draw_policy {
            DrawPolicy::NoLegalMove => !state.has_legal_move(next),
            DrawPolicy::FullBoard => state.board.is_full() || !state.has_legal_move(next),
        }
    }

    fn finish(&mut self, state: &mut GameState, result: GameResult) {
        self.last_result = Some(result);
        self.games_finished += 1;
        info!(
            game = state.game_number,
            placements = state.placements(),
            "{}",
            result.announcement()
        );

        if self.config.auto_reset {
            self.new_game(state);
        } else {
            state.phase = TurnPhase::GameOver { result };
        }
    }
}

impl RulesEngine for LevelsGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState, player: Player) -> Vec<Action> {
        // Only the active player can act
        if state.active_player() != Some(player) {
            return vec![];
        }

        let useful_selections = |except: Option<Weight>| {
            state
                .inventory(player)
                .available()
                .into_iter()
                .filter(|&w| Some(w) != except && !state.board.accepting(w).is_empty())
                .map(Action::SelectPiece)
                .collect::<Vec<_>>()
        };

        match state.phase {
            TurnPhase::AwaitingSelection { .. } => useful_selections(None),
            TurnPhase::PieceSelected { weight, .. } => {
                let placements: Vec<_> = state
                    .legal_placements(player, weight)
                    .into_iter()
                    .map(Action::PlacePiece)
                    .collect();
                if placements.is_empty() {
                    // Selected piece fits nowhere; switching is the only way on
                    useful_selections(Some(weight))
                } else {
                    placements
                }
            }
            TurnPhase::GameOver { .. } => vec![],
        }
    }

    fn apply_action(&mut self, state: &mut GameState, player: Player, action: Action) -> Result<Outcome> {
        match action {
            Action::SelectPiece(weight) => self.select_piece(state, player, weight),
            Action::PlacePiece(position) => {
                if let Some(active) = state.active_player() {
                    if active != player {
                        return Err(MoveError::NotYourTurn {
                            expected: active,
                            actual: player,
                        });
                    }
                }
                self.place_piece(state, position)
            }
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        match state.phase {
            TurnPhase::GameOver { result } => Some(result),
            TurnPhase::AwaitingSelection { player } | TurnPhase::PieceSelected { player, .. } => {
                if let Some(winner) = state.board.winner() {
                    Some(GameResult::Winner(winner))
                } else if self.is_draw(state, player) {
                    Some(GameResult::Draw)
                } else {
                    None
                }
            }
        }
    }

    fn new_game(&mut self, state: &mut GameState) {
        let starter = self.config.next_starter(state.starter);
        *state = GameState::new(starter, state.game_number + 1);
        info!(game = state.game_number, %starter, "new game");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(value: u8) -> Weight {
        Weight::new(value).unwrap()
    }

    fn pos(index: u8) -> Position {
        Position::new(index).unwrap()
    }

    /// Select then place for whoever is active.
    fn play(game: &mut LevelsGame, state: &mut GameState, weight: u8, position: u8) -> Result<Outcome> {
        let player = state.active_player().expect("game running");
        game.select_piece(state, player, w(weight))?;
        game.place_piece(state, pos(position))
    }

    #[test]
    fn test_game_creation() {
        let (game, state) = LevelsGameBuilder::new().build();

        assert_eq!(game.config().first_player, Player::One);
        assert_eq!(state.active_player(), Some(Player::One));
        assert_eq!(state.game_number, 1);
        assert_eq!(game.last_result(), None);
        assert_eq!(game.is_terminal(&state), None);
    }

    #[test]
    fn test_select_out_of_turn() {
        let (mut game, mut state) = LevelsGameBuilder::new().build();
        let before = state.clone();

        let err = game.select_piece(&mut state, Player::Two, w(3)).unwrap_err();

        assert_eq!(
            err,
            MoveError::NotYourTurn {
                expected: Player::One,
                actual: Player::Two
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_place_without_selection() {
        let (mut game, mut state) = LevelsGameBuilder::new().build();
        let before = state.clone();

        assert_eq!(game.place_piece(&mut state, pos(4)), Err(MoveError::NoPieceSelected));
        assert_eq!(state, before);
    }

    #[test]
    fn test_reselect_replaces_selection() {
        let (mut game, mut state) = LevelsGameBuilder::new().build();

        game.select_piece(&mut state, Player::One, w(2)).unwrap();
        game.select_piece(&mut state, Player::One, w(5)).unwrap();

        assert_eq!(state.selected(), Some(w(5)));
        game.place_piece(&mut state, pos(0)).unwrap();
        assert!(state.inventory(Player::One).is_available(w(2)));
        assert!(!state.inventory(Player::One).is_available(w(5)));
    }

    #[test]
    fn test_used_piece_cannot_be_selected() {
        let (mut game, mut state) = LevelsGameBuilder::new().build();
        play(&mut game, &mut state, 4, 0).unwrap();
        play(&mut game, &mut state, 1, 8).unwrap();

        let err = game.select_piece(&mut state, Player::One, w(4)).unwrap_err();
        assert_eq!(
            err,
            MoveError::PieceUnavailable {
                player: Player::One,
                weight: 4
            }
        );
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_place_passes_turn() {
        let (mut game, mut state) = LevelsGameBuilder::new().build();

        let outcome = play(&mut game, &mut state, 3, 4).unwrap();

        assert_eq!(
            outcome,
            Outcome::Placed {
                position: pos(4),
                captured: None,
                next: Player::Two
            }
        );
        assert_eq!(state.active_player(), Some(Player::Two));
        assert_eq!(state.selected(), None);
        assert_eq!(state.board.get(pos(4)), Some(Mark::new(Player::One, w(3))));
    }

    #[test]
    fn test_capture_and_invalid_move() {
        let (mut game, mut state) = LevelsGameBuilder::new().build();
        play(&mut game, &mut state, 3, 0).unwrap();

        game.select_piece(&mut state, Player::Two, w(3)).unwrap();
        let before = state.clone();
        let err = game.place_piece(&mut state, pos(0)).unwrap_err();
        assert_eq!(
            err,
            MoveError::InvalidMove {
                position: 0,
                occupant: 3,
                weight: 3
            }
        );
        assert_eq!(state, before);

        game.select_piece(&mut state, Player::Two, w(4)).unwrap();
        let outcome = game.place_piece(&mut state, pos(0)).unwrap();
        assert_eq!(
            outcome,
            Outcome::Placed {
                position: pos(0),
                captured: Some(Mark::new(Player::One, w(3))),
                next: Player::One
            }
        );
        assert_eq!(state.board.get(pos(0)), Some(Mark::new(Player::Two, w(4))));
    }

    #[test]
    fn test_win_resets_and_alternates_starter() {
        let (mut game, mut state) = LevelsGameBuilder::new().build();
        play(&mut game, &mut state, 1, 0).unwrap();
        play(&mut game, &mut state, 1, 3).unwrap();
        play(&mut game, &mut state, 2, 1).unwrap();
        play(&mut game, &mut state, 2, 4).unwrap();
        let outcome = play(&mut game, &mut state, 3, 2).unwrap();

        assert_eq!(outcome.result(), Some(GameResult::Winner(Player::One)));
        assert_eq!(outcome.announcement().as_deref(), Some("Player 1 wins!"));
        assert_eq!(game.last_result(), Some(GameResult::Winner(Player::One)));
        assert_eq!(game.games_finished(), 1);

        assert!(state.board.is_empty());
        assert_eq!(state.game_number, 2);
        assert_eq!(state.starter, Player::Two);
        assert_eq!(state.active_player(), Some(Player::Two));
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_game_over_without_auto_reset() {
        let (mut game, mut state) = LevelsGameBuilder::new().auto_reset(false).build();
        play(&mut game, &mut state, 1, 0).unwrap();
        play(&mut game, &mut state, 1, 3).unwrap();
        play(&mut game, &mut state, 2, 1).unwrap();
        play(&mut game, &mut state, 2, 4).unwrap();
        play(&mut game, &mut state, 3, 2).unwrap();

        let result = GameResult::Winner(Player::One);
        assert_eq!(state.phase, TurnPhase::GameOver { result });
        assert_eq!(game.is_terminal(&state), Some(result));
        assert!(game.legal_actions(&state, Player::Two).is_empty());
        assert_eq!(
            game.select_piece(&mut state, Player::Two, w(6)),
            Err(MoveError::GameOver)
        );
        assert_eq!(game.place_piece(&mut state, pos(8)), Err(MoveError::GameOver));

        game.new_game(&mut state);
        assert_eq!(state.active_player(), Some(Player::Two));
        assert_eq!(game.is_terminal(&state), None);
    }

    #[test]
    fn test_legal_actions() {
        let (game, mut state) = LevelsGameBuilder::new().build();

        let actions = game.legal_actions(&state, Player::One);
        assert_eq!(actions.len(), 6);
        assert!(actions.iter().all(Action::is_selection));
        assert!(game.legal_actions(&state, Player::Two).is_empty());

        state.phase = TurnPhase::PieceSelected {
            player: Player::One,
            weight: w(1),
        };
        state.board.set(pos(0), Mark::new(Player::Two, w(1)));
        let actions = game.legal_actions(&state, Player::One);
        assert_eq!(actions.len(), 8);
        assert!(!actions.contains(&Action::PlacePiece(pos(0))));
        assert!(game.is_legal(&state, Player::One, Action::PlacePiece(pos(1))));
    }

    #[test]
    fn test_apply_action_checks_turn_for_placement() {
        let (mut game, mut state) = LevelsGameBuilder::new().build();
        game.apply_action(&mut state, Player::One, Action::SelectPiece(w(2))).unwrap();

        let err = game
            .apply_action(&mut state, Player::Two, Action::PlacePiece(pos(0)))
            .unwrap_err();
        assert!(matches!(err, MoveError::NotYourTurn { .. }));

        game.apply_action(&mut state, Player::One, Action::PlacePiece(pos(0))).unwrap();
        assert_eq!(state.active_player(), Some(Player::Two));
    }

    #[test]
    fn test_fixed_starter() {
        let (mut game, mut state) = LevelsGameBuilder::new()
            .first_player(Player::Two)
            .alternate_starter(false)
            .build();

        assert_eq!(state.active_player(), Some(Player::Two));
        game.new_game(&mut state);
        assert_eq!(state.active_player(), Some(Player::Two));
        assert_eq!(state.game_number, 2);
    }
}
