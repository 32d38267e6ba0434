//! Metrics collection and output for AI simulation results.

use dudo_engine::domain::{ChallengeKind, Seat};
use serde::Serialize;

use crate::simulator::{MatchResult, RoundRecord};
use crate::types::MetricsLevel;

/// Complete match metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: MatchMetricsConfig,
    pub result: MatchResultMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchMetricsConfig {
    pub ai_types: Vec<String>,
    pub starting_dice: u8,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultMetrics {
    pub winner: Option<Seat>,
    pub winner_ai: Option<String>,
    pub rounds_played: u32,
    pub final_dice: Vec<u8>,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub starter: Seat,
    pub table_cap: u32,
    pub bid_count: usize,
    pub final_bid: String,
    pub challenge: &'static str,
    pub caller: Seat,
    pub bidder: Seat,
    pub actual: u32,
    pub challenger_won: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loser: Option<Seat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gainer: Option<Seat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eliminated: Option<Seat>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PlayerMetrics {
    pub seat: Seat,
    pub ai_type: String,
    pub won: bool,
    pub dice_left: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eliminated_in_round: Option<u32>,
    pub bids_made: u32,
    pub calls_made: u32,
    pub calls_won: u32,
    pub exact_calls_made: u32,
    pub exact_calls_won: u32,
    /// Times this seat's bid was challenged and held.
    pub bids_survived: u32,
    pub dice_lost: u32,
    pub dice_gained: u32,
}

fn challenge_label(kind: ChallengeKind) -> &'static str {
    match kind {
        ChallengeKind::Call => "call",
        ChallengeKind::ExactCall => "exact_call",
    }
}

/// Build metrics from a finished match.
#[allow(clippy::too_many_arguments)]
pub fn build_match_metrics(
    game_id: u32,
    seed: u64,
    ai_types: Vec<String>,
    starting_dice: u8,
    total_games: u32,
    result: &MatchResult,
    duration_ms: f64,
    level: &MetricsLevel,
) -> MatchMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let rounds = match level {
        MetricsLevel::Detailed => result.rounds.iter().map(build_round_metrics).collect(),
        MetricsLevel::Basic => Vec::new(),
    };

    let player_metrics = ai_types
        .iter()
        .enumerate()
        .map(|(seat, ai_type)| build_player_metrics(seat, ai_type, result))
        .collect();

    MatchMetrics {
        game_id,
        seed,
        timestamp,
        result: MatchResultMetrics {
            winner: result.winner,
            winner_ai: result.winner.and_then(|w| ai_types.get(w).cloned()),
            rounds_played: result.rounds_played(),
            final_dice: result.final_dice.clone(),
            duration_ms,
        },
        config: MatchMetricsConfig {
            ai_types,
            starting_dice,
            total_games,
        },
        rounds,
        player_metrics,
    }
}

fn build_round_metrics(round: &RoundRecord) -> RoundMetrics {
    RoundMetrics {
        round_no: round.round_no,
        starter: round.starter,
        table_cap: round.table_cap,
        bid_count: round.bids.len(),
        final_bid: round.final_bid.to_string(),
        challenge: challenge_label(round.challenge),
        caller: round.caller,
        bidder: round.bidder,
        actual: round.actual,
        challenger_won: round.challenger_won,
        loser: round.loser,
        gainer: round.gainer,
        eliminated: round.eliminated,
    }
}

fn build_player_metrics(seat: Seat, ai_type: &str, result: &MatchResult) -> PlayerMetrics {
    let mut m = PlayerMetrics {
        seat,
        ai_type: ai_type.to_string(),
        won: result.winner == Some(seat),
        dice_left: result.final_dice.get(seat).copied().unwrap_or(0),
        eliminated_in_round: result.eliminated_in(seat),
        ..PlayerMetrics::default()
    };

    for round in &result.rounds {
        m.bids_made += round.bids.iter().filter(|(s, _)| *s == seat).count() as u32;
        if round.caller == seat {
            match round.challenge {
                ChallengeKind::Call => {
                    m.calls_made += 1;
                    m.calls_won += round.challenger_won as u32;
                }
                ChallengeKind::ExactCall => {
                    m.exact_calls_made += 1;
                    m.exact_calls_won += round.challenger_won as u32;
                }
            }
        }
        if round.bidder == seat && !round.challenger_won {
            m.bids_survived += 1;
        }
        if round.loser == Some(seat) {
            m.dice_lost += 1;
        }
        if round.gainer == Some(seat) {
            m.dice_gained += 1;
        }
    }
    m
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub winner: Option<Seat>,
    pub winner_ai: String,
    pub rounds_played: u32,
    /// Seat AIs joined with `|`.
    pub seats: String,
    /// Final dice per seat joined with `|`.
    pub final_dice: String,
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(metrics: &MatchMetrics) -> Self {
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            winner: metrics.result.winner,
            winner_ai: metrics.result.winner_ai.clone().unwrap_or_default(),
            rounds_played: metrics.result.rounds_played,
            seats: metrics.config.ai_types.join("|"),
            final_dice: metrics
                .result
                .final_dice
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join("|"),
        }
    }
}
