// Host-side tests for the live voting-cell constellation.

use ambient_core::live::{self, cell_sides, CellStatus, CellSummary, ConstellationSummary, GridLayout, Phase};
use ambient_core::surface::{DrawOp, Recorder};
use ambient_core::viewport::Viewport;
use glam::DVec2;

fn cell(status: CellStatus, participants: u32, votes: u32) -> CellSummary {
    CellSummary {
        cell_id: format!("c{participants}-{votes}"),
        status,
        participant_count: participants,
        vote_count: votes,
        ..CellSummary::default()
    }
}

#[test]
fn summary_parses_host_json() {
    let json = r#"{
        "cells": [
            {"id": "a", "tier": 1, "status": "COMPLETED", "participants": 5, "votes": 5},
            {"cellId": "b", "tier": 2, "status": "VOTING", "participantCount": 4, "voteCount": 2, "votersNeeded": 4},
            {"id": "c", "status": "DELIBERATING"}
        ],
        "currentTier": 2,
        "totalIdeas": 17,
        "phase": "VOTING"
    }"#;
    let summary = ConstellationSummary::from_json(json).expect("valid summary");
    assert_eq!(summary.cells.len(), 3);
    assert_eq!(summary.cells[0].cell_id, "a");
    assert_eq!(summary.cells[0].status, CellStatus::Completed);
    assert_eq!(summary.cells[0].participant_count, 5);
    assert_eq!(summary.cells[1].cell_id, "b");
    assert_eq!(summary.cells[1].vote_count, 2);
    assert_eq!(summary.cells[1].voters_needed, 4);
    assert_eq!(summary.cells[2].status, CellStatus::Other);
    assert_eq!(summary.cells[2].participant_count, 0);
    assert_eq!(summary.current_tier, 2);
    assert_eq!(summary.total_ideas, 17);
    assert_eq!(summary.phase, Phase::Voting);
}

#[test]
fn summary_defaults_missing_fields() {
    let summary = ConstellationSummary::from_json("{}").expect("empty object is valid");
    assert!(summary.cells.is_empty());
    assert_eq!(summary.phase, Phase::Unknown);

    let odd = ConstellationSummary::from_json(r#"{"phase":"SOMETHING_NEW"}"#).expect("unknown phase");
    assert_eq!(odd.phase, Phase::Unknown);
}

#[test]
fn malformed_summary_is_rejected() {
    assert!(ConstellationSummary::from_json("not json").is_err());
    assert!(ConstellationSummary::from_json(r#"{"cells": 3}"#).is_err());
}

#[test]
fn links_show_after_first_tier_or_on_completion() {
    let mut summary = ConstellationSummary::default();
    assert!(!summary.shows_links());
    summary.current_tier = 2;
    assert!(summary.shows_links());
    summary.current_tier = 1;
    summary.phase = Phase::Completed;
    assert!(summary.shows_links());
}

#[test]
fn sides_follow_participants_within_limits() {
    assert_eq!(cell_sides(0), 5);
    assert_eq!(cell_sides(1), 3);
    assert_eq!(cell_sides(3), 3);
    assert_eq!(cell_sides(6), 6);
    assert_eq!(cell_sides(8), 8);
    assert_eq!(cell_sides(40), 8);
}

#[test]
fn grid_covers_every_cell() {
    let vp = Viewport::new(1200.0, 600.0);
    for n in 1..=50 {
        let grid = GridLayout::new(n, &vp).expect("non-empty grid");
        assert!(grid.cols >= 1 && grid.cols <= n);
        assert!(grid.cols * grid.rows >= n);
        assert!(grid.cols * (grid.rows - 1) < n, "spare row for n={n}");
        for idx in 0..n {
            let c = grid.center(idx);
            assert!(c.x > 0.0 && c.x < vp.width && c.y > 0.0 && c.y < vp.height);
        }
        assert!((grid.radius - grid.cell_width.min(grid.cell_height) * 0.32).abs() < 1e-9);
    }
}

#[test]
fn grid_for_four_cells_in_a_wide_viewport() {
    let grid = GridLayout::new(4, &Viewport::new(800.0, 400.0)).expect("grid");
    // ceil(sqrt(4 * 2)) = 3 columns
    assert_eq!((grid.cols, grid.rows), (3, 2));
    assert_eq!(grid.center(0), DVec2::new(800.0 / 6.0, 100.0));
    assert_eq!(grid.center(3), DVec2::new(800.0 / 6.0, 300.0));
}

#[test]
fn grid_needs_cells_and_space() {
    assert!(GridLayout::new(0, &Viewport::new(100.0, 100.0)).is_none());
    assert!(GridLayout::new(3, &Viewport::new(0.0, 100.0)).is_none());
}

#[test]
fn empty_summary_draws_a_placeholder_pentagon() {
    let mut rec = Recorder::new(1);
    live::render(&mut rec, &ConstellationSummary::default(), 0.0, &Viewport::new(400.0, 400.0));
    assert_eq!(rec.strokes(), 1);
    assert_eq!(rec.count(|op| matches!(op, DrawOp::LineTo(_))), 4);
    assert!(rec.circles().is_empty());
}

#[test]
fn cells_draw_outline_vertices_and_completion_marks() {
    let summary = ConstellationSummary {
        cells: vec![
            cell(CellStatus::Voting, 4, 1),
            cell(CellStatus::Completed, 6, 6),
            cell(CellStatus::Other, 0, 0),
        ],
        current_tier: 1,
        ..ConstellationSummary::default()
    };
    let mut rec = Recorder::new(1);
    live::render(&mut rec, &summary, 1.0, &Viewport::new(900.0, 300.0));

    // one outline per cell, no links at tier 1
    assert_eq!(rec.strokes(), 3);
    // 4 + 6 + 5 vertex dots plus one centre mark
    assert_eq!(rec.circles().len(), 16);
}

#[test]
fn vote_count_lights_vertices() {
    use ambient_core::color::INDIGO;
    let summary = ConstellationSummary {
        cells: vec![cell(CellStatus::Voting, 7, 3)],
        ..ConstellationSummary::default()
    };
    let mut rec = Recorder::new(1);
    live::render(&mut rec, &summary, 0.0, &Viewport::new(300.0, 300.0));
    let lit = rec.count(|op| matches!(op, DrawOp::SetFill(c) if c.r == INDIGO.r && c.g == INDIGO.g && c.b == INDIGO.b));
    assert_eq!(lit, 3);
}

#[test]
fn completed_cells_link_to_center_in_later_tiers() {
    let summary = ConstellationSummary {
        cells: vec![
            cell(CellStatus::Completed, 5, 5),
            cell(CellStatus::Completed, 5, 5),
            cell(CellStatus::Voting, 5, 0),
        ],
        current_tier: 2,
        ..ConstellationSummary::default()
    };
    let vp = Viewport::new(600.0, 600.0);
    let mut rec = Recorder::new(1);
    live::render(&mut rec, &summary, 0.0, &vp);
    // three outlines plus two links
    assert_eq!(rec.strokes(), 5);
    let to_center = rec.count(|op| matches!(op, DrawOp::LineTo(p) if *p == vp.center()));
    assert_eq!(to_center, 2);
}
