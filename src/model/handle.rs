// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The fixed handle vocabulary and direction categories.
//!
//! String forms are a bit-exact contract with the rendering layer: it maps
//! the identifiers directly to screen-side anchor positions, so they must
//! never drift.

use std::fmt;
use std::str::FromStr;

/// A named anchor point on a node where an edge endpoint attaches.
///
/// 8 generic handles ({top,bottom,left,right} x {source,target}) exist on
/// every node; the 2 branch handles are valid only as source handles on
/// condition nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Handle {
    TopSource,
    BottomSource,
    LeftSource,
    RightSource,
    TopTarget,
    BottomTarget,
    LeftTarget,
    RightTarget,
    RightTrue,
    LeftFalse,
}

impl Handle {
    /// Every member of the vocabulary, generic handles first.
    pub const ALL: [Handle; 10] = [
        Handle::TopSource,
        Handle::BottomSource,
        Handle::LeftSource,
        Handle::RightSource,
        Handle::TopTarget,
        Handle::BottomTarget,
        Handle::LeftTarget,
        Handle::RightTarget,
        Handle::RightTrue,
        Handle::LeftFalse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopSource => "top-source",
            Self::BottomSource => "bottom-source",
            Self::LeftSource => "left-source",
            Self::RightSource => "right-source",
            Self::TopTarget => "top-target",
            Self::BottomTarget => "bottom-target",
            Self::LeftTarget => "left-target",
            Self::RightTarget => "right-target",
            Self::RightTrue => "right-true",
            Self::LeftFalse => "left-false",
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, Self::RightTrue | Self::LeftFalse)
    }

    pub fn is_generic(&self) -> bool {
        !self.is_branch()
    }

    /// True for handles an edge may start from (branch handles included).
    pub fn is_source(&self) -> bool {
        matches!(
            self,
            Self::TopSource
                | Self::BottomSource
                | Self::LeftSource
                | Self::RightSource
                | Self::RightTrue
                | Self::LeftFalse
        )
    }

    pub fn is_target(&self) -> bool {
        !self.is_source()
    }

    pub fn branch_kind(&self) -> Option<BranchKind> {
        match self {
            Self::RightTrue => Some(BranchKind::True),
            Self::LeftFalse => Some(BranchKind::False),
            _ => None,
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHandleError;

impl fmt::Display for ParseHandleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid handle identifier")
    }
}

impl std::error::Error for ParseHandleError {}

impl FromStr for Handle {
    type Err = ParseHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-source" => Ok(Self::TopSource),
            "bottom-source" => Ok(Self::BottomSource),
            "left-source" => Ok(Self::LeftSource),
            "right-source" => Ok(Self::RightSource),
            "top-target" => Ok(Self::TopTarget),
            "bottom-target" => Ok(Self::BottomTarget),
            "left-target" => Ok(Self::LeftTarget),
            "right-target" => Ok(Self::RightTarget),
            "right-true" => Ok(Self::RightTrue),
            "left-false" => Ok(Self::LeftFalse),
            _ => Err(ParseHandleError),
        }
    }
}

/// One of the two mutually exclusive logical outcomes of a condition node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BranchKind {
    True,
    False,
}

impl BranchKind {
    /// The source handle carrying this branch.
    pub fn handle(&self) -> Handle {
        match self {
            Self::True => Handle::RightTrue,
            Self::False => Handle::LeftFalse,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
        }
    }
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The discrete classification of the spatial relationship between two node
/// centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    HorizontalLeft,
    HorizontalRight,
    VerticalUp,
    VerticalDown,
    DiagonalTopLeft,
    DiagonalTopRight,
    DiagonalBottomLeft,
    DiagonalBottomRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::HorizontalLeft,
        Direction::HorizontalRight,
        Direction::VerticalUp,
        Direction::VerticalDown,
        Direction::DiagonalTopLeft,
        Direction::DiagonalTopRight,
        Direction::DiagonalBottomLeft,
        Direction::DiagonalBottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HorizontalLeft => "horizontal-left",
            Self::HorizontalRight => "horizontal-right",
            Self::VerticalUp => "vertical-up",
            Self::VerticalDown => "vertical-down",
            Self::DiagonalTopLeft => "diagonal-top-left",
            Self::DiagonalTopRight => "diagonal-top-right",
            Self::DiagonalBottomLeft => "diagonal-bottom-left",
            Self::DiagonalBottomRight => "diagonal-bottom-right",
        }
    }

    pub fn is_diagonal(&self) -> bool {
        matches!(
            self,
            Self::DiagonalTopLeft
                | Self::DiagonalTopRight
                | Self::DiagonalBottomLeft
                | Self::DiagonalBottomRight
        )
    }

    pub fn is_cardinal(&self) -> bool {
        !self.is_diagonal()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid direction category")
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal-left" => Ok(Self::HorizontalLeft),
            "horizontal-right" => Ok(Self::HorizontalRight),
            "vertical-up" => Ok(Self::VerticalUp),
            "vertical-down" => Ok(Self::VerticalDown),
            "diagonal-top-left" => Ok(Self::DiagonalTopLeft),
            "diagonal-top-right" => Ok(Self::DiagonalTopRight),
            "diagonal-bottom-left" => Ok(Self::DiagonalBottomLeft),
            "diagonal-bottom-right" => Ok(Self::DiagonalBottomRight),
            _ => Err(ParseDirectionError),
        }
    }
}

/// The concrete (source handle, target handle) pair an edge binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlePair {
    source: Handle,
    target: Handle,
}

impl HandlePair {
    pub fn new(source: Handle, target: Handle) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> Handle {
        self.source
    }

    pub fn target(&self) -> Handle {
        self.target
    }
}
