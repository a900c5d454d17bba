//! Battle module - the two-contestant match protocol
//!
//! Owns both players, the one-slot next-piece mailboxes, and the garbage
//! transfer rules. Advanced one discrete step at a time by an external
//! tick source: gravity for both players, then the tick's commands, then
//! lock resolution for player 0 before player 1. Resolutions within one
//! tick are ordered, not atomic: garbage sent by player 0's lock is
//! already on player 1's board when player 1's own lock resolves.

use crate::core::player::Player;
use crate::core::rng::SimpleRng;
use crate::core::snapshot::BattleSnapshot;
use crate::types::{Command, PieceKind, GARBAGE_ROWS};

#[derive(Debug, Clone)]
pub struct Battle {
    players: [Player; 2],
    /// Pending forced kind for each player's next spawn. Holds at most one
    /// kind between consumptions.
    mailbox: [Option<PieceKind>; 2],
    /// Players whose piece failed its last downward attempt this tick.
    lock_pending: [bool; 2],
    running: bool,
}

impl Battle {
    /// Create a match; both players' RNG seeds derive from the one seed.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let players = [Player::new(rng.next_u32()), Player::new(rng.next_u32())];

        Self {
            players,
            mailbox: [None, None],
            lock_pending: [false, false],
            running: false,
        }
    }

    /// Spawn the opening pieces and start the match. Player 0 draws;
    /// player 1 is forced to the identical kind (first spawn only), so
    /// both boards open with the same piece.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        let kind = self.players[0].request_new_piece(None);
        self.players[1].request_new_piece(Some(kind));
        self.running = true;
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn player(&self, ix: usize) -> &Player {
        &self.players[ix]
    }

    #[cfg(test)]
    pub fn player_mut(&mut self, ix: usize) -> &mut Player {
        &mut self.players[ix]
    }

    #[cfg(test)]
    pub fn mailbox(&self, ix: usize) -> Option<PieceKind> {
        self.mailbox[ix]
    }

    /// Automatic downward attempt for both players; a failed attempt
    /// marks that player for lock resolution this tick.
    pub fn gravity(&mut self) {
        if !self.running {
            return;
        }
        for ix in 0..2 {
            if !self.players[ix].down() {
                self.lock_pending[ix] = true;
            }
        }
    }

    /// Apply one externally supplied command for one player.
    ///
    /// A soft drop records the outcome of its own downward attempt (a
    /// success supersedes an earlier failed attempt this tick); a hard
    /// drop always forces lock resolution.
    pub fn apply(&mut self, ix: usize, command: Command) {
        if !self.running {
            return;
        }
        match command {
            Command::MoveLeft => {
                self.players[ix].left();
            }
            Command::MoveRight => {
                self.players[ix].right();
            }
            Command::SoftDrop => {
                self.lock_pending[ix] = !self.players[ix].down();
            }
            Command::Rotate => {
                self.players[ix].rotate();
            }
            Command::HardDrop => {
                self.players[ix].hard_drop();
                self.lock_pending[ix] = true;
            }
        }
    }

    /// Run lock resolution for every player marked this tick, player 0
    /// first. Both marked players resolve even when the first resolution
    /// ends the match, preserving the same-tick ordering.
    pub fn resolve(&mut self) {
        if !self.running {
            self.lock_pending = [false, false];
            return;
        }
        for ix in 0..2 {
            if self.lock_pending[ix] {
                self.lock_pending[ix] = false;
                self.resolve_lock(ix);
            }
        }
    }

    /// One full external tick: gravity, then the supplied commands, then
    /// lock resolution in player order.
    pub fn step(&mut self, commands: &[(usize, Command)]) {
        if !self.running {
            return;
        }
        self.gravity();
        for &(ix, command) in commands {
            self.apply(ix, command);
        }
        self.resolve();
    }

    /// Lock resolution for one player: next piece via the mailbox
    /// protocol, clear lines, send garbage to the opponent, then check
    /// both overflow signals. Either one ends the match.
    fn resolve_lock(&mut self, ix: usize) {
        self.advance_piece(ix);

        let cleared = self.players[ix].clear_lines();
        let garbage = GARBAGE_ROWS[cleared as usize];
        let opponent_overflowed = self.players[1 - ix].receive_garbage(garbage);

        if opponent_overflowed || self.players[ix].is_overflowing() {
            self.running = false;
        }
    }

    /// The next-piece mailbox protocol: an empty own slot means draw and
    /// push the drawn kind into the opponent's slot; a full own slot is
    /// consumed instead of drawing. The two piece sequences mirror each
    /// other with a one-step lag without sharing a generator.
    fn advance_piece(&mut self, ix: usize) {
        match self.mailbox[ix].take() {
            Some(kind) => {
                self.players[ix].request_new_piece(Some(kind));
            }
            None => {
                let kind = self.players[ix].request_new_piece(None);
                self.mailbox[1 - ix] = Some(kind);
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut BattleSnapshot) {
        for ix in 0..2 {
            self.players[ix].board().write_grid(&mut out.players[ix].grid);
            out.players[ix].active = self.players[ix].active().map(Into::into);
        }
        out.running = self.running;
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        let mut s = BattleSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
