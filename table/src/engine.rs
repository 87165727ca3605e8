//! Round lifecycle engine.
//!
//! Owns the one table the process runs: the player roster with every active
//! bet, plus the state machine that moves the round between BETTING and
//! SPINNING. All mutation flows through the handlers here while the caller
//! holds the engine lock, so each handler is atomic with respect to every
//! other event. Settlement in particular runs as a single uninterruptible
//! step: one draw, with every player settled against it before anything else
//! can observe the engine.
//!
//! Handlers return the messages they produced instead of sending them; the
//! socket layer fans them out after the lock is released.
//!
//! ## Spin triggers
//!
//! - the betting countdown reaching zero (tick-driven), or
//! - every registered player being ready, re-evaluated after each readiness
//!   event and after each disconnect (a departing not-ready player can be the
//!   one holding the round open). An empty roster never triggers.
//!
//! The spin window closes on a deadline checked by the tick; phase guards
//! make a stale tick from a superseded round inert.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use uuid::Uuid;
use wheelhouse_types::{settle, validate_bets, Bet, Phase, Player, Wheel, SYSTEM_NAME};

use crate::config::TableConfig;
use crate::protocol::{BoardEntry, Outbound, RoundResult, ServerMessage};

pub struct Engine {
    config: TableConfig,
    players: HashMap<Uuid, Player>,
    phase: Phase,
    countdown: u32,
    spin_ends_at: Option<Instant>,
    round_id: u64,
    rng: StdRng,
}

impl Engine {
    pub fn new(config: TableConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Injectable RNG so tests can replay a known draw sequence.
    pub fn with_rng(config: TableConfig, rng: StdRng) -> Self {
        let countdown = config.betting_secs;
        Self {
            config,
            players: HashMap::new(),
            phase: Phase::Betting,
            countdown,
            spin_ends_at: None,
            round_id: 1,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn player(&self, id: Uuid) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Registers the endpoint as a player. A second join from the same
    /// connection overwrites the prior record.
    pub fn handle_join(&mut self, id: Uuid, raw_name: &str) -> Vec<Outbound> {
        let player = Player::new(raw_name, self.config.starting_balance);
        let name = player.name.clone();
        info!(%id, name = %name, round = self.round_id, "player joined");
        self.players.insert(id, player);
        vec![
            Outbound::to(
                id,
                ServerMessage::GameState {
                    state: self.phase,
                    time: self.countdown,
                    balance: self.config.starting_balance,
                },
            ),
            Outbound::all(ServerMessage::ChatMessage {
                name: SYSTEM_NAME.to_string(),
                text: format!("{name} joined the table."),
            }),
            Outbound::all(self.board()),
        ]
    }

    /// Relays a chat line under the sender's registered name.
    pub fn handle_chat(&self, id: Uuid, text: &str) -> Vec<Outbound> {
        match self.players.get(&id) {
            Some(player) => vec![Outbound::all(ServerMessage::ChatMessage {
                name: player.name.clone(),
                text: text.to_string(),
            })],
            None => Vec::new(),
        }
    }

    /// Replaces the sender's bet set. Ignored outside BETTING and for
    /// unregistered endpoints; malformed sets are rejected whole.
    pub fn handle_bets(&mut self, id: Uuid, bets: Vec<Bet>) -> Vec<Outbound> {
        if self.phase != Phase::Betting {
            return Vec::new();
        }
        let Some(player) = self.players.get_mut(&id) else {
            return Vec::new();
        };
        if let Err(err) = validate_bets(&bets) {
            debug!(%id, %err, "rejected bet update");
            return vec![Outbound::to(
                id,
                ServerMessage::Error {
                    code: "INVALID_BET",
                    message: err.to_string(),
                },
            )];
        }
        debug!(%id, bets = bets.len(), "bets updated");
        player.bets = bets;
        vec![Outbound::all(self.board())]
    }

    /// Marks the sender ready; spins immediately if that completes unanimity.
    pub fn handle_ready(&mut self, id: Uuid, now: Instant) -> Vec<Outbound> {
        if self.phase != Phase::Betting {
            return Vec::new();
        }
        let Some(player) = self.players.get_mut(&id) else {
            return Vec::new();
        };
        player.ready = true;
        debug!(%id, "player ready");
        if self.all_ready() {
            self.spin(now)
        } else {
            Vec::new()
        }
    }

    /// Removes a player. The departure can complete unanimity among those
    /// who remain, so readiness is re-evaluated.
    pub fn handle_leave(&mut self, id: Uuid, now: Instant) -> Vec<Outbound> {
        let Some(player) = self.players.remove(&id) else {
            return Vec::new();
        };
        info!(%id, name = %player.name, "player left");
        let mut events = vec![Outbound::all(self.board())];
        if self.phase == Phase::Betting && self.all_ready() {
            events.extend(self.spin(now));
        }
        events
    }

    /// One-second heartbeat. Drives the countdown while betting and the
    /// reopen deadline while spinning.
    pub fn tick(&mut self, now: Instant) -> Vec<Outbound> {
        match self.phase {
            Phase::Betting => {
                self.countdown = self.countdown.saturating_sub(1);
                let mut events = vec![Outbound::all(ServerMessage::Timer {
                    seconds_remaining: self.countdown,
                })];
                if self.countdown == 0 {
                    events.extend(self.spin(now));
                }
                events
            }
            Phase::Spinning => match self.spin_ends_at {
                Some(deadline) if now >= deadline => self.begin_round(),
                _ => Vec::new(),
            },
        }
    }

    /// Draws one pocket and settles every registered player against it.
    /// Runs to completion under the engine lock; nothing can interleave
    /// between the draw and the last settlement.
    fn spin(&mut self, now: Instant) -> Vec<Outbound> {
        let result = Wheel::draw(&mut self.rng);
        self.phase = Phase::Spinning;
        self.spin_ends_at = Some(now + Duration::from_secs(self.config.spin_secs));
        let mut round_results = Vec::with_capacity(self.players.len());
        for (id, player) in self.players.iter_mut() {
            let net = settle(result, &player.bets);
            player.balance += net;
            round_results.push(RoundResult {
                socket_id: *id,
                name: player.name.clone(),
                net,
                new_balance: player.balance,
            });
            player.clear_round();
        }
        info!(
            round = self.round_id,
            result,
            players = round_results.len(),
            "wheel spun"
        );
        vec![Outbound::all(ServerMessage::Spin {
            result,
            round_results,
        })]
    }

    /// Reopens betting after the spin window.
    fn begin_round(&mut self) -> Vec<Outbound> {
        self.round_id += 1;
        self.phase = Phase::Betting;
        self.countdown = self.config.betting_secs;
        self.spin_ends_at = None;
        info!(round = self.round_id, "betting reopened");
        vec![
            Outbound::all(ServerMessage::NewRound),
            Outbound::all(self.board()),
        ]
    }

    fn all_ready(&self) -> bool {
        !self.players.is_empty() && self.players.values().all(|p| p.ready)
    }

    /// Full reconstruction of the aggregated bet board; never an
    /// incremental patch.
    fn board(&self) -> ServerMessage {
        let mut bets = Vec::new();
        for (id, player) in &self.players {
            for bet in &player.bets {
                bets.push(BoardEntry {
                    socket_id: *id,
                    player_name: player.name.clone(),
                    bet_id: bet.id.clone(),
                    label: bet.label.clone(),
                    amount: bet.amount,
                });
            }
        }
        ServerMessage::UpdateGlobalBets { bets }
    }
}
