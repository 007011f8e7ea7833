#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use log::warn;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    game::{Match, MatchStatus},
    player::Player,
    scores::ScoreEntry,
};

/// Parse a `row col` pair, separated by whitespace or a comma.
pub fn parse_target(input: &str) -> Option<(i32, i32)> {
    let mut parts = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Terminal player reading targets from `input` and reporting to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text) {
            warn!("failed to write to terminal: {}", e);
        }
    }

    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "Target (row col, q to quit): ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Print the end-of-match summary.
    pub fn show_summary(&mut self, game: &Match, award: Option<&ScoreEntry>) {
        let banner = match game.status() {
            MatchStatus::Finished => "All ships destroyed!",
            _ => "Match abandoned.",
        };
        let board = game.board();
        let text = format!(
            "\n{}\n\nFinal board:\n{}Shots: {}  Hits: {}",
            banner,
            board.render(),
            board.shots_fired(),
            board.hits()
        );
        self.say(&text);
        if let Some(entry) = award {
            let line = format!("{} now has {} points", entry.player, entry.points);
            self.say(&line);
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, board: &Board) -> Option<(i32, i32)> {
        let header = format!(
            "\n{}Ships remaining: {}",
            board.render(),
            board.ships_remaining()
        );
        self.say(&header);
        loop {
            let line = match self.prompt() {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    warn!("failed to read target: {}", e);
                    return None;
                }
            };
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return None;
            }
            match parse_target(&line) {
                Some(target) => return Some(target),
                None => {
                    warn!("unparsable target {:?}", line);
                    self.say("Invalid input. Enter two whole numbers, e.g. `3 4`.");
                }
            }
        }
    }

    fn handle_shot_result(&mut self, target: (i32, i32), outcome: ShotOutcome) {
        let text = match outcome {
            ShotOutcome::Miss => "Splash, nothing there.",
            ShotOutcome::Hit => "Hit!",
            ShotOutcome::Sunk => "Hit! Ship destroyed.",
        };
        let line = format!("({}, {}): {}", target.0, target.1, text);
        self.say(&line);
    }

    fn handle_error(&mut self, target: (i32, i32), error: BoardError) {
        let line = format!("({}, {}): {}", target.0, target.1, error);
        self.say(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_targets() {
        assert_eq!(parse_target("3 4"), Some((3, 4)));
        assert_eq!(parse_target(" 0,1 "), Some((0, 1)));
        assert_eq!(parse_target("-1 2"), Some((-1, 2)));
        assert_eq!(parse_target("3"), None);
        assert_eq!(parse_target("a b"), None);
        assert_eq!(parse_target("1 2 3"), None);
    }
}
