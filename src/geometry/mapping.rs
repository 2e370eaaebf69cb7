// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Direction category to handle-pair lookup.
//!
//! Only generic handles are produced here; branch overrides for condition
//! nodes happen in the policy layer afterwards.

use crate::model::{Direction, Handle, HandlePair, Point};

fn horizontal_right() -> HandlePair {
    HandlePair::new(Handle::RightSource, Handle::LeftTarget)
}

fn horizontal_left() -> HandlePair {
    HandlePair::new(Handle::LeftSource, Handle::RightTarget)
}

fn vertical_down() -> HandlePair {
    HandlePair::new(Handle::BottomSource, Handle::TopTarget)
}

fn vertical_up() -> HandlePair {
    HandlePair::new(Handle::TopSource, Handle::BottomTarget)
}

/// Maps a direction category to the generic handle pair an edge binds to.
///
/// Cardinal categories are a fixed table. Diagonal categories pick the
/// dominant axis of the actual center delta and fall back to the cardinal
/// pair consistent with their quadrant; on an exact tie the horizontal pair
/// wins, keeping the mapping total and deterministic.
pub fn handles_for(direction: Direction, source_center: Point, target_center: Point) -> HandlePair {
    let ax = (target_center.x() - source_center.x()).abs();
    let ay = (target_center.y() - source_center.y()).abs();
    let horizontal_dominant = ax >= ay;

    match direction {
        Direction::HorizontalRight => horizontal_right(),
        Direction::HorizontalLeft => horizontal_left(),
        Direction::VerticalDown => vertical_down(),
        Direction::VerticalUp => vertical_up(),
        Direction::DiagonalBottomRight => {
            if horizontal_dominant {
                horizontal_right()
            } else {
                vertical_down()
            }
        }
        Direction::DiagonalTopRight => {
            if horizontal_dominant {
                horizontal_right()
            } else {
                vertical_up()
            }
        }
        Direction::DiagonalBottomLeft => {
            if horizontal_dominant {
                horizontal_left()
            } else {
                vertical_down()
            }
        }
        Direction::DiagonalTopLeft => {
            if horizontal_dominant {
                horizontal_left()
            } else {
                vertical_up()
            }
        }
    }
}
