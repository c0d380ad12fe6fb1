//! Terminal front-end for levels tic-tac-toe.
//!
//! `levels play` runs a hot-seat game on one terminal, `levels simulate`
//! runs random playouts and prints a summary.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use levels_ttt::{
    simulate, DrawPolicy, GameConfig, GameState, GameView, LevelsGame, LevelsGameBuilder, MoveError, Outcome,
    Player, Position, RulesEngine, Weight, LINES,
};
use tracing::{debug, info};

/// Levels tic-tac-toe.
#[derive(Parser)]
#[command(name = "levels", version)]
#[command(about = "Tic-tac-toe with weighted level pieces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a two-player game on this terminal.
    Play {
        /// Opener of the first game (p1 or p2).
        #[arg(long, default_value = "p1", value_parser = parse_player)]
        first: Player,

        /// When a game without a winner ends (no-legal-move or full-board).
        #[arg(long, default_value = "no-legal-move")]
        draw_policy: DrawPolicy,

        /// Keep the same opener for every game.
        #[arg(long)]
        fixed_starter: bool,
    },

    /// Run random playouts and print a summary.
    Simulate {
        /// Number of games.
        #[arg(short, long, default_value = "1000")]
        games: u32,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// When a game without a winner ends.
        #[arg(long, default_value = "no-legal-move")]
        draw_policy: DrawPolicy,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the eight winning lines.
    Lines,
}

fn parse_player(s: &str) -> Result<Player, String> {
    Player::from_tag(s).ok_or_else(|| format!("expected p1 or p2, got {s:?}"))
}

fn init_telemetry() {
    use tracing_subscriber::{fmt, EnvFilter};
    let filter = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

fn main() -> Result<()> {
    init_telemetry();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            first,
            draw_policy,
            fixed_starter,
        } => {
            let mut config = GameConfig::new()
                .with_first_player(first)
                .with_draw_policy(draw_policy);
            if fixed_starter {
                config = config.fixed_starter();
            }
            let stdin = io::stdin();
            let stdout = io::stdout();
            play(config, stdin.lock(), stdout.lock())
        }
        Commands::Simulate {
            games,
            seed,
            draw_policy,
            json,
        } => {
            let config = GameConfig::new().with_draw_policy(draw_policy);
            info!(games, seed, ?draw_policy, "simulating");
            let summary = simulate(config, games, seed);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("games:        {}", summary.games);
                println!("p1 wins:      {}", summary.wins[Player::One]);
                println!("p2 wins:      {}", summary.wins[Player::Two]);
                println!("draws:        {}", summary.draws);
                println!("unfinished:   {}", summary.unfinished);
                println!("placements:   {}", summary.placements);
                println!("captures:     {}", summary.captures);
            }
            Ok(())
        }
        Commands::Lines => {
            for line in LINES {
                let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
                println!("{}", cells.join(" "));
            }
            Ok(())
        }
    }
}

/// One line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    /// `select <level> [p1|p2]`; without a player, the active one.
    Select { level: u8, player: Option<Player> },
    /// `place <cell>`
    Place { cell: u8 },
    /// `<level> <cell>`: select and place in one go.
    Move { level: u8, cell: u8 },
    Show,
    Json,
    Reset,
    Help,
    Quit,
}

fn parse_number(word: &str) -> Result<u8, String> {
    word.parse::<u8>()
        .map_err(|_| format!("expected a number, got {word:?}"))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        ["select" | "s", level] => Ok(Command::Select {
            level: parse_number(level)?,
            player: None,
        }),
        ["select" | "s", level, player] => Ok(Command::Select {
            level: parse_number(level)?,
            player: Some(parse_player(player)?),
        }),
        ["place" | "p", cell] => Ok(Command::Place { cell: parse_number(cell)? }),
        [level, cell] => Ok(Command::Move {
            level: parse_number(level)?,
            cell: parse_number(cell)?,
        }),
        ["show"] => Ok(Command::Show),
        ["json"] => Ok(Command::Json),
        ["reset"] => Ok(Command::Reset),
        ["help" | "?"] => Ok(Command::Help),
        ["quit" | "q" | "exit"] => Ok(Command::Quit),
        _ => Err(format!("unknown command {line:?}, try \"help\"")),
    }
}

const HELP: &str = "\
commands:
  select <level> [p1|p2]   pick one of your unused levels (1-6)
  place <cell>             put the selected level on a cell (0-8)
  <level> <cell>           select and place in one go
  show                     print the board
  json                     print the game state as JSON
  reset                    start a new game
  quit";

/// Interactive loop over `input`, writing the board and notices to `out`.
fn play(config: GameConfig, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let (mut game, mut state) = LevelsGameBuilder::new().config(config).build();
    render(&game, &state, &mut out)?;

    for line in input.lines() {
        let line = line.context("reading input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };
        debug!(?command, "input");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Show => render(&game, &state, &mut out)?,
            Command::Json => {
                let view = GameView::capture(&game, &state);
                writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
            }
            Command::Reset => {
                game.new_game(&mut state);
                render(&game, &state, &mut out)?;
            }
            Command::Select { level, player } => {
                let result = select(&mut game, &mut state, level, player);
                report(&game, &state, result, &mut out)?;
            }
            Command::Place { cell } => {
                let result = place(&mut game, &mut state, cell);
                report(&game, &state, result, &mut out)?;
            }
            Command::Move { level, cell } => {
                let snapshot = state.clone();
                let result = select(&mut game, &mut state, level, None)
                    .and_then(|_| place(&mut game, &mut state, cell));
                if result.is_err() {
                    // A rejected placement must not leave the selection behind
                    state = snapshot;
                }
                report(&game, &state, result, &mut out)?;
            }
        }
    }

    Ok(())
}

fn select(game: &mut LevelsGame, state: &mut GameState, level: u8, player: Option<Player>) -> Result<Outcome, MoveError> {
    let weight = Weight::new(level)?;
    let player = player
        .or_else(|| state.active_player())
        .ok_or(MoveError::GameOver)?;
    game.select_piece(state, player, weight)
}

fn place(game: &mut LevelsGame, state: &mut GameState, cell: u8) -> Result<Outcome, MoveError> {
    let position = Position::new(cell)?;
    game.place_piece(state, position)
}

fn report(game: &LevelsGame, state: &GameState, result: Result<Outcome, MoveError>, out: &mut impl Write) -> Result<()> {
    match result {
        Ok(outcome) => {
            if let Some(announcement) = outcome.announcement() {
                writeln!(out, "*** {announcement} ***")?;
            }
            if !matches!(outcome, Outcome::Selected { .. }) {
                render(game, state, out)?;
            } else {
                writeln!(out, "{}", GameView::capture(game, state).headline())?;
            }
        }
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

fn render(game: &LevelsGame, state: &GameState, out: &mut impl Write) -> Result<()> {
    let view = GameView::capture(game, state);
    writeln!(out)?;
    writeln!(out, "game {}  turn {}", view.game_number, view.turn_number)?;
    write!(out, "{}", state.board)?;
    for (player, weights) in view.available.iter() {
        let levels: Vec<String> = weights.iter().map(ToString::to_string).collect();
        writeln!(out, "{} levels: {}", player.tag(), levels.join(" "))?;
    }
    writeln!(out, "{}", view.headline())?;
    Ok(())
}
