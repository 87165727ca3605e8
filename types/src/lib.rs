//! Domain types for the wheelhouse table.
//!
//! Defines the wheel, bets, players, payout arithmetic, and round phases used
//! by the table service. Everything here is pure and deterministic: there is
//! no I/O, and randomness comes only through a caller-supplied [`rand::Rng`].

mod bet;
mod constants;
mod payout;
mod player;
mod round;
mod wheel;

pub use bet::*;
pub use constants::*;
pub use payout::*;
pub use player::*;
pub use round::*;
pub use wheel::*;
