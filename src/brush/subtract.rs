//! Brush subtraction: carve a tool box out of intersecting solid brushes.
//!
//! Each overlapping `Add` brush is replaced by up to six slab fragments,
//! generated in the fixed order -X, +X, -Y, +Y, -Z, +Z. X slabs keep the
//! brush's full Y and Z extent, Y slabs are narrowed to the overlap in X,
//! and Z slabs are narrowed to the overlap in X and Y, so no two fragments
//! cover the same volume. The split is not minimal, and a tool fully inside
//! a brush leaves an open six-piece shell.

use rayon::prelude::*;

use crate::math::{Aabb, Axis};
use super::volume::{Brush, BrushOp, EPSILON};

/// Tolerances for carving
#[derive(Clone, Copy, Debug)]
pub struct SubtractConfig {
    /// Fragments with any extent at or below this are dropped
    pub epsilon: f32,
}

impl Default for SubtractConfig {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

/// Counters from one subtraction pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubtractStats {
    /// Solid brushes that overlapped the tool
    pub carved: usize,
    /// Carved brushes that left no fragments
    pub removed: usize,
    /// Fragments emitted in total
    pub fragments: usize,
}

/// Subtract `tool` from every solid brush in `brushes`.
///
/// `brushes` must not contain the tool itself. The result holds the
/// untouched brushes and fragments in input order, followed by `tool`.
pub fn subtract(brushes: Vec<Brush>, tool: Brush, config: &SubtractConfig) -> Vec<Brush> {
    subtract_with_stats(brushes, tool, config).0
}

/// `subtract`, also reporting how many brushes were carved
pub fn subtract_with_stats(
    brushes: Vec<Brush>,
    tool: Brush,
    config: &SubtractConfig,
) -> (Vec<Brush>, SubtractStats) {
    let tool_box = tool.aabb();
    let mut stats = SubtractStats::default();
    let mut out = Vec::with_capacity(brushes.len() + 1);

    for brush in brushes {
        if !is_carvable(&brush, &tool_box) {
            out.push(brush);
            continue;
        }
        let fragments = carve(&brush, &tool_box, config.epsilon);
        stats.carved += 1;
        stats.fragments += fragments.len();
        if fragments.is_empty() {
            stats.removed += 1;
        }
        out.extend(fragments);
    }

    log::debug!(
        "subtract: carved {} brushes into {} fragments ({} removed), {} brushes out",
        stats.carved, stats.fragments, stats.removed, out.len() + 1
    );

    out.push(tool);
    (out, stats)
}

/// Parallel `subtract`. Produces exactly the same list.
pub fn subtract_par(brushes: Vec<Brush>, tool: Brush, config: &SubtractConfig) -> Vec<Brush> {
    let tool_box = tool.aabb();
    let epsilon = config.epsilon;

    let mut out: Vec<Brush> = brushes
        .into_par_iter()
        .flat_map_iter(|brush| {
            if is_carvable(&brush, &tool_box) {
                carve(&brush, &tool_box, epsilon)
            } else {
                vec![brush]
            }
        })
        .collect();

    out.push(tool);
    out
}

fn is_carvable(brush: &Brush, tool_box: &Aabb) -> bool {
    brush.operation == BrushOp::Add && brush.aabb().overlaps(tool_box)
}

/// Slab fragments covering `brush` minus `tool`, in -X, +X, -Y, +Y, -Z, +Z order.
///
/// Fragments are `Add` brushes carrying a copy of the source textures.
pub fn carve(brush: &Brush, tool: &Aabb, epsilon: f32) -> Vec<Brush> {
    let source = brush.aabb();
    if tool.contains(&source) {
        return Vec::new();
    }
    // Cross-section for the next axis; narrowed to the overlap after each axis.
    let mut cross = source;
    let mut fragments = Vec::with_capacity(6);

    for axis in Axis::ALL {
        let i = axis.index();
        let (lo, hi) = (source.min[i], source.max[i]);

        let below = cross.with_span(axis, lo, hi.min(tool.min[i]));
        let above = cross.with_span(axis, lo.max(tool.max[i]), hi);

        for slab in [below, above] {
            if slab.is_valid(epsilon) {
                fragments.push(Brush::from_aabb(&slab, BrushOp::Add, brush.textures.clone()));
            }
        }

        cross = cross.with_span(axis, lo.max(tool.min[i]), hi.min(tool.max[i]));
    }

    fragments
}
