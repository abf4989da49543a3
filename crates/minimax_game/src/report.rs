//! Text and JSON reports for the one-shot `evaluate` and `suggest` commands.

use anyhow::{Context, Result, bail};
use minimax_core::{Board, DRAW, LOSS, Outcome, ScoredMove, WIN, analyze_moves, evaluate};
use serde_json::json;
use tracing::{debug, instrument};

/// Board on one line, rows split by `/`.
pub fn compact(board: &Board) -> String {
    board.to_string().replace('\n', "/")
}

/// Reads a utility from the computer's side.
pub fn utility_label(utility: i32) -> &'static str {
    match utility {
        WIN => "computer wins",
        DRAW => "draw",
        LOSS => "human wins",
        _ => "unknown",
    }
}

/// Describes the outcome of `board`.
#[instrument(skip(board), fields(board = %compact(board)))]
pub fn evaluate_report(board: &Board, as_json: bool) -> Result<String> {
    let outcome = evaluate(board);
    debug!(%outcome, "Evaluated board");

    if as_json {
        let value = json!({
            "board": compact(board),
            "outcome": outcome.to_string(),
            "terminal": outcome.is_terminal(),
            "winner": outcome.winner().map(|mark| mark.to_string()),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    Ok(format!("{}\n{}", board, outcome))
}

/// Describes the computer's move on `board`.
///
/// # Errors
///
/// Fails when the game on `board` is already over.
#[instrument(skip(board), fields(board = %compact(board)))]
pub fn suggest_report(board: &Board, as_json: bool, verbose: bool) -> Result<String> {
    let outcome = evaluate(board);
    if outcome != Outcome::InProgress {
        bail!("Board {} is not in progress: {}", compact(board), outcome);
    }

    let analysis = analyze_moves(board);
    let best = analysis
        .best()
        .context("No legal moves on an in-progress board")?;
    debug!(
        position = %best.position,
        utility = best.utility,
        nodes = analysis.nodes,
        "Suggested move"
    );

    if as_json {
        let mut value = scored_json(&best);
        if verbose {
            value["candidates"] = analysis.moves.iter().map(scored_json).collect();
            value["nodes"] = json!(analysis.nodes);
        }
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let (row, col) = best.position.coords();
    let mut out = format!("{} {}", row + 1, col + 1);
    if verbose {
        out.push_str("\nCandidates:");
        for scored in &analysis.moves {
            let (row, col) = scored.position.coords();
            out.push_str(&format!(
                "\n  {} {}  {:<13} {:+} ({})",
                row + 1,
                col + 1,
                scored.position.label(),
                scored.utility,
                utility_label(scored.utility)
            ));
        }
        out.push_str(&format!("\nNodes searched: {}", analysis.nodes));
    }
    Ok(out)
}

fn scored_json(scored: &ScoredMove) -> serde_json::Value {
    let (row, col) = scored.position.coords();
    json!({
        "row": row,
        "col": col,
        "position": scored.position,
        "utility": scored.utility,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_compact_round_trips() {
        let b = board("XO./.X./..O");
        assert_eq!(compact(&b), "XO./.X./..O");
        assert_eq!(board(&compact(&b)), b);
    }

    #[test]
    fn test_evaluate_text() {
        let report = evaluate_report(&board("XXX/OO./..."), false).unwrap();
        assert!(report.ends_with("X wins"), "{report}");
    }

    #[test]
    fn test_evaluate_json() {
        let report = evaluate_report(&board("OXO/XXO/XOX"), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["outcome"], "draw");
        assert_eq!(value["terminal"], true);
        assert_eq!(value["winner"], serde_json::Value::Null);
    }

    #[test]
    fn test_suggest_text_is_one_based() {
        let report = suggest_report(&board("XX./OO./X.."), false, false).unwrap();
        assert_eq!(report, "2 3");
    }

    #[test]
    fn test_suggest_json_is_zero_based() {
        let report = suggest_report(&board("XX./OO./X.."), true, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["row"], 1);
        assert_eq!(value["col"], 2);
        assert_eq!(value["utility"], WIN);
        assert!(value.get("candidates").is_none());
    }

    #[test]
    fn test_suggest_verbose_lists_candidates() {
        let b = board("XX./OO./X..");
        let text = suggest_report(&b, false, true).unwrap();
        assert!(text.starts_with("2 3\nCandidates:"));
        assert!(text.contains("Nodes searched:"));

        let value: serde_json::Value =
            serde_json::from_str(&suggest_report(&b, true, true).unwrap()).unwrap();
        let candidates = value["candidates"].as_array().unwrap();
        assert_eq!(candidates.len(), b.legal_moves().len());
        assert!(value["nodes"].as_u64().unwrap() > 0);
    }

    #[test]
    fn test_suggest_rejects_finished_board() {
        assert!(suggest_report(&board("XXX/OO./..."), false, false).is_err());
        assert!(suggest_report(&board("OXO/XXO/XOX"), true, false).is_err());
    }

    #[test]
    fn test_utility_labels() {
        assert_eq!(utility_label(WIN), "computer wins");
        assert_eq!(utility_label(DRAW), "draw");
        assert_eq!(utility_label(LOSS), "human wins");
    }
}
