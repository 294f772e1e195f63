// Viewport size and the four edges the fire hugs.

use glam::DVec2;

/// Drawing area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when nothing can be drawn (zero, negative or non-finite size).
    /// Renderers return early on an empty viewport instead of dividing by
    /// an edge length of zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn min_dim(&self) -> f64 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Smallest distance from `p` to any edge, each axis normalised by its
    /// own dimension.
    pub fn normalized_edge_distance(&self, p: DVec2) -> f64 {
        (p.x / self.width)
            .min((self.width - p.x) / self.width)
            .min(p.y / self.height)
            .min((self.height - p.y) / self.height)
    }
}

/// Viewport edges, walked clockwise starting at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }

    pub fn length(self, vp: &Viewport) -> f64 {
        if self.is_horizontal() {
            vp.width
        } else {
            vp.height
        }
    }

    /// Point on the edge at fraction `f` of the clockwise walk.
    pub fn boundary_point(self, f: f64, vp: &Viewport) -> DVec2 {
        let (w, h) = (vp.width, vp.height);
        match self {
            Edge::Top => DVec2::new(f * w, 0.0),
            Edge::Right => DVec2::new(w, f * h),
            Edge::Bottom => DVec2::new((1.0 - f) * w, h),
            Edge::Left => DVec2::new(0.0, (1.0 - f) * h),
        }
    }

    /// Unit vector pointing from this edge into the viewport.
    pub fn inward(self) -> DVec2 {
        match self {
            Edge::Top => DVec2::Y,
            Edge::Right => DVec2::NEG_X,
            Edge::Bottom => DVec2::NEG_Y,
            Edge::Left => DVec2::X,
        }
    }

    /// Unit vector along the clockwise walk.
    pub fn tangent(self) -> DVec2 {
        -self.inward().perp()
    }

    /// Boundary point at `f`, pushed `depth` pixels inward.
    #[inline]
    pub fn displaced(self, f: f64, depth: f64, vp: &Viewport) -> DVec2 {
        self.boundary_point(f, vp) + self.inward() * depth
    }

    /// The coordinate that varies along this edge.
    #[inline]
    pub fn along(self, p: DVec2) -> f64 {
        if self.is_horizontal() {
            p.x
        } else {
            p.y
        }
    }
}

/// Treats a missing, non-finite or non-positive device pixel ratio as 1.
#[inline]
pub fn effective_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}

/// Backing-store size in device pixels for a CSS-sized surface (min 1x1).
pub fn backing_size(css: Viewport, dpr: f64) -> (u32, u32) {
    let dpr = effective_dpr(dpr);
    let px = |v: f64| {
        if v.is_finite() && v > 0.0 {
            ((v * dpr) as u32).max(1)
        } else {
            1
        }
    };
    (px(css.width), px(css.height))
}
