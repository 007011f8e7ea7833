use alloc::vec::Vec;
use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    game::{Match, MatchStatus},
};

/// Interface implemented by anything that chooses where to shoot.
pub trait Player {
    /// Choose the next target, or `None` to leave the match.
    fn select_target(&mut self, board: &Board) -> Option<(i32, i32)>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: (i32, i32), _outcome: ShotOutcome) {}

    /// Inform the player that its last shot was rejected.
    fn handle_error(&mut self, _target: (i32, i32), _error: BoardError) {}
}

/// Drive `game` until it is finished or the player quits.
///
/// Rejected shots are reported back to the player and the loop carries on.
pub fn run_match<P: Player + ?Sized>(game: &mut Match, player: &mut P) -> MatchStatus {
    while !game.is_finished() {
        let Some((row, col)) = player.select_target(game.board()) else {
            debug!("player left the match");
            break;
        };
        match game.fire(row, col) {
            Ok(outcome) => player.handle_shot_result((row, col), outcome),
            Err(e) => player.handle_error((row, col), e),
        }
    }
    game.status()
}

/// Fires at a fixed list of targets in order, then gives up.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    targets: Vec<(i32, i32)>,
    next: usize,
    outcomes: Vec<ShotOutcome>,
    rejected: usize,
}

impl ScriptedPlayer {
    pub fn new(targets: Vec<(i32, i32)>) -> Self {
        Self {
            targets,
            ..Self::default()
        }
    }

    /// Every cell of a `width` x `height` board, in shuffled order.
    pub fn sweep<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut targets: Vec<(i32, i32)> = (0..height)
            .flat_map(|r| (0..width).map(move |c| (r as i32, c as i32)))
            .collect();
        targets.shuffle(rng);
        Self::new(targets)
    }

    /// Outcomes of accepted shots, in order.
    pub fn outcomes(&self) -> &[ShotOutcome] {
        &self.outcomes
    }

    /// Number of shots the board refused.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl Player for ScriptedPlayer {
    fn select_target(&mut self, _board: &Board) -> Option<(i32, i32)> {
        let target = self.targets.get(self.next).copied();
        self.next += 1;
        target
    }

    fn handle_shot_result(&mut self, _target: (i32, i32), outcome: ShotOutcome) {
        self.outcomes.push(outcome);
    }

    fn handle_error(&mut self, _target: (i32, i32), _error: BoardError) {
        self.rejected += 1;
    }
}
