//! Removal of sticks, degenerate rings and small rings.
//!
//! These run on collections before they are handed to a boolean engine.

use super::core::{Polygon, Polygons};
use crate::primitives::Point;
use tracing::debug;

/// Removes zero-area spurs (`A, B, A` vertex runs) from a ring.
///
/// Spurs are removed until none remain, including nested spurs and spurs
/// that wrap around the seam between the last and first vertex, so a second
/// call is always a no-op. Each spur takes its tip and one copy of its base
/// with it, so a ring without consecutive duplicates stays without them.
/// Returns whether the ring changed. The ring may end up with fewer than
/// three points; [`remove_degenerate`] drops those.
pub fn remove_sticks(polygon: &mut Polygon) -> bool {
    let original_len = polygon.points.len();

    // Walking the ring with a stack unwinds nested spurs in one pass.
    let mut kept: Vec<Point> = Vec::with_capacity(original_len);
    for &p in &polygon.points {
        if kept.len() >= 2 && kept[kept.len() - 2] == p {
            kept.pop();
        } else {
            kept.push(p);
        }
    }

    loop {
        let n = kept.len();
        if n < 3 {
            break;
        }
        if kept[n - 2] == kept[0] {
            // ..., A, B | A, ...: drop the tip and one copy of its base
            kept.truncate(n - 2);
        } else if kept[1] == kept[n - 1] {
            // ..., B | A, B, ...: same, with the tip at the start
            kept.drain(..2);
        } else {
            break;
        }
    }

    // Only removals happen above, so a length change is the only possible change.
    let modified = kept.len() != original_len;
    polygon.points = kept;
    modified
}

/// Runs [`remove_sticks`] on every polygon. Returns whether any changed.
pub fn remove_sticks_polygons(polygons: &mut Polygons) -> bool {
    let mut modified = 0usize;
    for polygon in polygons.iter_mut() {
        if remove_sticks(polygon) {
            modified += 1;
        }
    }
    if modified > 0 {
        debug!(modified, total = polygons.len(), "removed sticks");
    }
    modified > 0
}

/// Drops every polygon with fewer than three points. Returns whether any were dropped.
pub fn remove_degenerate(polygons: &mut Polygons) -> bool {
    let before = polygons.len();
    polygons.retain(Polygon::is_valid);
    let removed = before - polygons.len();
    if removed > 0 {
        debug!(removed, remaining = polygons.len(), "removed degenerate polygons");
    }
    removed > 0
}

/// Drops every polygon whose absolute area is below `min_area`.
///
/// Returns whether any were dropped.
pub fn remove_small(polygons: &mut Polygons, min_area: f64) -> bool {
    let before = polygons.len();
    polygons.retain(|p| p.area().abs() >= min_area);
    let removed = before - polygons.len();
    if removed > 0 {
        debug!(removed, min_area, remaining = polygons.len(), "removed small polygons");
    }
    removed > 0
}
