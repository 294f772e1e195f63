//! Live constellation: one polygon per voting cell, laid out on a grid.
//!
//! The summary is supplied by the host page and is read-only here; counts
//! are only mapped onto shapes (sides from participants, lit vertices from
//! votes, a centre mark for completed cells).

use crate::color::{Rgba, GREEN, INDIGO, ORANGE, SLATE};
use crate::error::SummaryError;
use crate::geometry::{draw_dot, draw_polygon, polygon_vertices, PolygonStyle, DEFAULT_ROTATION};
use crate::surface::Canvas2d;
use crate::viewport::Viewport;
use glam::DVec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellStatus {
    Completed,
    Voting,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Submission,
    Voting,
    Completed,
    Accumulating,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellSummary {
    #[serde(alias = "id")]
    pub cell_id: String,
    pub tier: u32,
    pub status: CellStatus,
    #[serde(alias = "participants")]
    pub participant_count: u32,
    #[serde(alias = "votes")]
    pub vote_count: u32,
    pub voters_needed: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConstellationSummary {
    pub cells: Vec<CellSummary>,
    pub current_tier: u32,
    pub total_ideas: u32,
    pub phase: Phase,
}

impl ConstellationSummary {
    pub fn from_json(json: &str) -> Result<Self, SummaryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Completed cells are linked to the centre once the run has moved on.
    pub fn shows_links(&self) -> bool {
        self.phase == Phase::Completed || self.current_tier > 1
    }
}

/// Polygon side count for a cell: participants, or 5 when unknown,
/// clamped to `3..=8`.
pub fn cell_sides(participants: u32) -> usize {
    let n = if participants == 0 { 5 } else { participants };
    n.clamp(3, 8) as usize
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub cols: usize,
    pub rows: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    pub radius: f64,
}

impl GridLayout {
    /// Near-square grid for `n` cells matching the viewport aspect.
    pub fn new(n: usize, vp: &Viewport) -> Option<Self> {
        if n == 0 || vp.is_empty() {
            return None;
        }
        let cols = ((n as f64 * (vp.width / vp.height)).sqrt().ceil() as usize).clamp(1, n);
        let rows = n.div_ceil(cols);
        let cell_width = vp.width / cols as f64;
        let cell_height = vp.height / rows as f64;
        Some(Self {
            cols,
            rows,
            cell_width,
            cell_height,
            radius: cell_width.min(cell_height) * 0.32,
        })
    }

    pub fn center(&self, idx: usize) -> DVec2 {
        let col = idx % self.cols;
        let row = idx / self.cols;
        DVec2::new(
            self.cell_width * col as f64 + self.cell_width / 2.0,
            self.cell_height * row as f64 + self.cell_height / 2.0,
        )
    }
}

fn outline_color(status: CellStatus, time: f64, idx: usize) -> Rgba {
    match status {
        CellStatus::Completed => GREEN.with_alpha(0.25),
        CellStatus::Voting => ORANGE.with_alpha(0.15 + 0.15 * (time * 3.0 + idx as f64).sin()),
        CellStatus::Other => SLATE.with_alpha(0.2),
    }
}

fn vertex_color(cell: &CellSummary, vertex: usize) -> Rgba {
    if cell.status == CellStatus::Completed {
        GREEN.with_alpha(0.4)
    } else if (vertex as u32) < cell.vote_count {
        INDIGO.with_alpha(0.4)
    } else {
        SLATE.with_alpha(0.35)
    }
}

pub fn render<C: Canvas2d>(canvas: &mut C, summary: &ConstellationSummary, time: f64, vp: &Viewport) {
    if vp.is_empty() {
        return;
    }
    let Some(grid) = GridLayout::new(summary.cells.len(), vp) else {
        // nothing to show yet
        draw_polygon(
            canvas,
            vp.center(),
            vp.min_dim() * 0.25,
            5,
            DEFAULT_ROTATION + time * 0.2,
            &PolygonStyle::outline(INDIGO.with_alpha(0.06), 0.5),
        );
        return;
    };

    for (idx, cell) in summary.cells.iter().enumerate() {
        let center = grid.center(idx);
        let sides = cell_sides(cell.participant_count);
        draw_polygon(
            canvas,
            center,
            grid.radius,
            sides,
            DEFAULT_ROTATION,
            &PolygonStyle::outline(outline_color(cell.status, time, idx), 0.8),
        );
        for (vi, v) in polygon_vertices(center, grid.radius, sides, DEFAULT_ROTATION)
            .into_iter()
            .enumerate()
        {
            draw_dot(canvas, v, 2.0, vertex_color(cell, vi));
        }
        if cell.status == CellStatus::Completed {
            draw_dot(canvas, center, 2.5, ORANGE.with_alpha(0.3));
        }
    }

    if summary.shows_links() {
        canvas.set_stroke(ORANGE.with_alpha(0.06));
        canvas.set_line_width(0.5);
        for (idx, cell) in summary.cells.iter().enumerate() {
            if cell.status == CellStatus::Completed {
                canvas.begin_path();
                canvas.move_to(grid.center(idx));
                canvas.line_to(vp.center());
                canvas.stroke();
            }
        }
    }
}
