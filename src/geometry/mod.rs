// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Direction classification between two node centers.
//!
//! Classification is total: every finite delta maps to exactly one of the 8
//! direction categories, and a degenerate (zero) delta falls through the
//! dominance checks into a fixed diagonal, so repeated identical inputs
//! always classify identically.

pub mod mapping;

use crate::model::{Direction, Node, NodeKind, Point, Size};

/// Fallback node size for any kind without its own entry in the size table.
pub const DEFAULT_NODE_SIZE: Size = Size::new(200.0, 120.0);

/// Note nodes render smaller than every other kind.
pub const NOTE_NODE_SIZE: Size = Size::new(180.0, 100.0);

/// Dominance factor: one axis must exceed the other by this factor for the
/// relation to classify as cardinal rather than diagonal.
const DOMINANCE: f64 = 1.5;

pub fn default_size(kind: NodeKind) -> Size {
    match kind {
        NodeKind::Note => NOTE_NODE_SIZE,
        _ => DEFAULT_NODE_SIZE,
    }
}

/// Center of a node, using the per-kind default size when the canvas has not
/// measured the node yet.
pub fn node_center(node: &Node) -> Point {
    let size = node.size().unwrap_or_else(|| default_size(node.kind()));
    Point::new(
        node.position().x() + size.width() / 2.0,
        node.position().y() + size.height() / 2.0,
    )
}

/// Outcome of geometry resolution: a direction category plus the euclidean
/// distance between the two centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionResolution {
    direction: Direction,
    distance: f64,
}

impl DirectionResolution {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// Classifies a center-to-center delta into a direction category.
///
/// Screen coordinates: positive `dy` means the target sits below the source.
pub fn classify_delta(dx: f64, dy: f64) -> Direction {
    let ax = dx.abs();
    let ay = dy.abs();

    if ax > DOMINANCE * ay {
        if dx < 0.0 {
            Direction::HorizontalLeft
        } else {
            Direction::HorizontalRight
        }
    } else if ay > DOMINANCE * ax {
        if dy < 0.0 {
            Direction::VerticalUp
        } else {
            Direction::VerticalDown
        }
    } else {
        // Zero and near-tied deltas land here; the quadrant signs keep the
        // result fixed for repeated identical inputs.
        match (dx < 0.0, dy < 0.0) {
            (false, false) => Direction::DiagonalBottomRight,
            (true, false) => Direction::DiagonalBottomLeft,
            (false, true) => Direction::DiagonalTopRight,
            (true, true) => Direction::DiagonalTopLeft,
        }
    }
}

/// Resolves the direction between two nodes.
///
/// A caller-supplied `user_direction` always wins over geometry; the
/// distance is reported either way.
pub fn resolve_direction(
    source: &Node,
    target: &Node,
    user_direction: Option<Direction>,
) -> DirectionResolution {
    let source_center = node_center(source);
    let target_center = node_center(target);
    let dx = target_center.x() - source_center.x();
    let dy = target_center.y() - source_center.y();

    let direction = user_direction.unwrap_or_else(|| classify_delta(dx, dy));

    DirectionResolution {
        direction,
        distance: dx.hypot(dy),
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_delta, default_size, node_center, resolve_direction, DEFAULT_NODE_SIZE};
    use crate::model::fixtures::node_at;
    use crate::model::{Direction, NodeKind, Point, Size};

    #[test]
    fn horizontal_dominance_picks_left_or_right() {
        assert_eq!(classify_delta(400.0, 0.0), Direction::HorizontalRight);
        assert_eq!(classify_delta(-400.0, 0.0), Direction::HorizontalLeft);
        assert_eq!(classify_delta(301.0, 200.0), Direction::HorizontalRight);
    }

    #[test]
    fn vertical_dominance_picks_up_or_down() {
        assert_eq!(classify_delta(0.0, 300.0), Direction::VerticalDown);
        assert_eq!(classify_delta(0.0, -300.0), Direction::VerticalUp);
        assert_eq!(classify_delta(200.0, -301.0), Direction::VerticalUp);
    }

    #[test]
    fn near_tied_deltas_classify_by_quadrant() {
        assert_eq!(classify_delta(300.0, 200.0), Direction::DiagonalBottomRight);
        assert_eq!(classify_delta(-300.0, 200.0), Direction::DiagonalBottomLeft);
        assert_eq!(classify_delta(300.0, -200.0), Direction::DiagonalTopRight);
        assert_eq!(classify_delta(-300.0, -200.0), Direction::DiagonalTopLeft);
    }

    #[test]
    fn zero_delta_classifies_deterministically() {
        let first = classify_delta(0.0, 0.0);
        assert_eq!(first, Direction::DiagonalBottomRight);
        assert_eq!(classify_delta(0.0, 0.0), first);
    }

    #[test]
    fn classification_is_total_over_a_delta_grid() {
        for dx in -5..=5 {
            for dy in -5..=5 {
                let direction = classify_delta(f64::from(dx) * 37.0, f64::from(dy) * 23.0);
                assert!(Direction::ALL.contains(&direction));
            }
        }
    }

    #[test]
    fn size_table_has_a_single_small_entry() {
        assert_eq!(default_size(NodeKind::Note), Size::new(180.0, 100.0));
        for kind in [
            NodeKind::Condition,
            NodeKind::Execution,
            NodeKind::Material,
            NodeKind::Result,
        ] {
            assert_eq!(default_size(kind), DEFAULT_NODE_SIZE);
        }
    }

    #[test]
    fn center_uses_measured_size_when_present() {
        let mut node = node_at("n:a", NodeKind::Execution, 10.0, 20.0);
        assert_eq!(node_center(&node), Point::new(110.0, 80.0));

        node.set_size(Some(Size::new(100.0, 40.0)));
        assert_eq!(node_center(&node), Point::new(60.0, 40.0));
    }

    #[test]
    fn user_direction_short_circuits_geometry() {
        let source = node_at("n:a", NodeKind::Execution, 0.0, 0.0);
        let target = node_at("n:b", NodeKind::Execution, 400.0, 0.0);

        let forced = resolve_direction(&source, &target, Some(Direction::VerticalUp));
        assert_eq!(forced.direction(), Direction::VerticalUp);

        let geometric = resolve_direction(&source, &target, None);
        assert_eq!(geometric.direction(), Direction::HorizontalRight);
        assert_eq!(forced.distance(), geometric.distance());
    }

    #[test]
    fn distance_is_the_euclidean_norm_of_the_center_delta() {
        let source = node_at("n:a", NodeKind::Execution, 0.0, 0.0);
        let target = node_at("n:b", NodeKind::Execution, 300.0, 400.0);

        let resolution = resolve_direction(&source, &target, None);
        assert_eq!(resolution.distance(), 500.0);
    }

    #[test]
    fn identical_inputs_resolve_identically() {
        let source = node_at("n:a", NodeKind::Condition, 5.0, 5.0);
        let target = node_at("n:b", NodeKind::Result, 505.0, 8.0);

        let first = resolve_direction(&source, &target, None);
        let second = resolve_direction(&source, &target, None);
        assert_eq!(first, second);
    }
}
