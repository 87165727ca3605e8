//! Wire protocol for the table's WebSocket channel.
//!
//! JSON text frames, tagged by `type`. Client frames are deserialized into
//! [`ClientMessage`] at the boundary; everything the table says back is a
//! [`ServerMessage`]. Engine handlers return [`Outbound`] values so routing
//! (broadcast vs. a single endpoint) is decided where the state changes, not
//! in the socket glue.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wheelhouse_types::{Bet, Phase};

/// Messages sent by a connected client.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Registers the connection as a player with a display name.
    Join {
        #[serde(default)]
        name: String,
    },
    /// Chat line relayed to the whole table.
    SendMessage { text: String },
    /// Replaces the sender's entire bet set.
    UpdateBets { bets: Vec<Bet> },
    /// Marks the sender ready to spin early.
    PlayerReady,
}

/// Messages sent from the table to clients.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    /// Initial snapshot, sent only to the endpoint that just joined.
    GameState { state: Phase, time: u32, balance: i64 },
    /// Chat relay (player or system line).
    ChatMessage { name: String, text: String },
    /// Full reconstruction of every player's active bets.
    UpdateGlobalBets { bets: Vec<BoardEntry> },
    /// Seconds remaining in the betting window.
    #[serde(rename_all = "camelCase")]
    Timer { seconds_remaining: u32 },
    /// Drawn pocket plus every player's settlement for the round.
    #[serde(rename_all = "camelCase")]
    Spin {
        result: u8,
        round_results: Vec<RoundResult>,
    },
    /// Betting has reopened.
    NewRound,
    /// A request failed boundary validation.
    Error { code: &'static str, message: String },
}

/// One bet on the aggregated bet board.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardEntry {
    pub socket_id: Uuid,
    pub player_name: String,
    pub bet_id: String,
    pub label: String,
    pub amount: u64,
}

/// One player's settlement, emitted at spin time and never stored.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub socket_id: Uuid,
    pub name: String,
    pub net: i64,
    pub new_balance: i64,
}

/// Delivery target for a server message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    All,
    Player(Uuid),
}

/// A server message paired with where it should go.
#[derive(Clone, Debug)]
pub struct Outbound {
    pub target: Target,
    pub message: ServerMessage,
}

impl Outbound {
    pub fn all(message: ServerMessage) -> Self {
        Self {
            target: Target::All,
            message,
        }
    }

    pub fn to(id: Uuid, message: ServerMessage) -> Self {
        Self {
            target: Target::Player(id),
            message,
        }
    }

    /// Whether the endpoint `id` should receive this message.
    pub fn addressed_to(&self, id: Uuid) -> bool {
        match self.target {
            Target::All => true,
            Target::Player(target) => target == id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_join_decodes() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"join","name":"Ada"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Join { name } if name == "Ada"));
    }

    #[test]
    fn test_client_join_name_defaults_when_absent() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"join"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Join { name } if name.is_empty()));
    }

    #[test]
    fn test_client_update_bets_decodes() {
        let raw = r#"{"type":"updateBets","bets":[{"id":"s17","label":"Straight 17","nums":[17],"amount":100,"payout":35}]}"#;
        let msg: ClientMessage = serde_json::from_str(raw).unwrap();
        let ClientMessage::UpdateBets { bets } = msg else {
            panic!("expected updateBets");
        };
        assert_eq!(bets.len(), 1);
        assert_eq!(bets[0].nums, vec![17]);
        assert_eq!(bets[0].payout, 35);
    }

    #[test]
    fn test_client_ready_and_chat_decode() {
        assert!(matches!(
            serde_json::from_str(r#"{"type":"playerReady"}"#).unwrap(),
            ClientMessage::PlayerReady
        ));
        assert!(matches!(
            serde_json::from_str(r#"{"type":"sendMessage","text":"hi"}"#).unwrap(),
            ClientMessage::SendMessage { text } if text == "hi"
        ));
    }

    #[test]
    fn test_client_unknown_type_rejected() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"cashOut"}"#).is_err());
    }

    #[test]
    fn test_game_state_wire_shape() {
        let msg = ServerMessage::GameState {
            state: Phase::Betting,
            time: 300,
            balance: 500,
        };
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"type":"gameState","state":"BETTING","time":300,"balance":500}"#
        );
    }

    #[test]
    fn test_timer_wire_shape() {
        let msg = ServerMessage::Timer {
            seconds_remaining: 299,
        };
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"type":"timer","secondsRemaining":299}"#
        );
    }

    #[test]
    fn test_spin_wire_shape() {
        let id = Uuid::nil();
        let msg = ServerMessage::Spin {
            result: 17,
            round_results: vec![RoundResult {
                socket_id: id,
                name: "Ada".to_string(),
                net: 3_500,
                new_balance: 4_000,
            }],
        };
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            format!(
                r#"{{"type":"spin","result":17,"roundResults":[{{"socketId":"{id}","name":"Ada","net":3500,"newBalance":4000}}]}}"#
            )
        );
    }

    #[test]
    fn test_board_wire_shape() {
        let id = Uuid::nil();
        let msg = ServerMessage::UpdateGlobalBets {
            bets: vec![BoardEntry {
                socket_id: id,
                player_name: "Ada".to_string(),
                bet_id: "s17".to_string(),
                label: "Straight 17".to_string(),
                amount: 100,
            }],
        };
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            format!(
                r#"{{"type":"updateGlobalBets","bets":[{{"socketId":"{id}","playerName":"Ada","betId":"s17","label":"Straight 17","amount":100}}]}}"#
            )
        );
    }

    #[test]
    fn test_new_round_wire_shape() {
        assert_eq!(
            serde_json::to_string(&ServerMessage::NewRound).unwrap(),
            r#"{"type":"newRound"}"#
        );
    }

    #[test]
    fn test_targeting() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let broadcast = Outbound::all(ServerMessage::NewRound);
        let unicast = Outbound::to(a, ServerMessage::NewRound);
        assert!(broadcast.addressed_to(a) && broadcast.addressed_to(b));
        assert!(unicast.addressed_to(a));
        assert!(!unicast.addressed_to(b));
    }
}
