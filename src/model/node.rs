// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::ids::NodeId;

/// The closed set of node kinds the engine knows about.
///
/// `Condition` is the distinguished kind carrying the dual-tier branch
/// handles; the remaining kinds matter only to the semantic classification
/// fallback and the default-size table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Condition,
    Execution,
    Material,
    Result,
    Note,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Condition => "condition",
            Self::Execution => "execution",
            Self::Material => "material",
            Self::Result => "result",
            Self::Note => "note",
        }
    }

    pub fn is_condition(&self) -> bool {
        matches!(self, Self::Condition)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNodeKindError;

impl fmt::Display for ParseNodeKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid node kind")
    }
}

impl std::error::Error for ParseNodeKindError {}

impl FromStr for NodeKind {
    type Err = ParseNodeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "condition" => Ok(Self::Condition),
            "execution" => Ok(Self::Execution),
            "material" => Ok(Self::Material),
            "result" => Ok(Self::Result),
            "note" => Ok(Self::Note),
            _ => Err(ParseNodeKindError),
        }
    }
}

/// A position on the canvas, in screen coordinates (positive `y` is down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// User-visible text carried by a node; the semantic classifier reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeContent {
    label: String,
    description: Option<String>,
}

impl NodeContent {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
        }
    }

    pub fn new_with(label: impl Into<String>, description: Option<String>) -> Self {
        Self {
            label: label.into(),
            description,
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_description<T: Into<String>>(&mut self, description: Option<T>) {
        self.description = description.map(Into::into);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A read-only snapshot of a canvas node.
///
/// The canvas state store owns the authoritative node; the engine only ever
/// reads these. `size` is `None` when the canvas has not measured the node
/// yet, in which case the per-kind default size table applies.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    node_id: NodeId,
    kind: NodeKind,
    position: Point,
    size: Option<Size>,
    content: NodeContent,
}

impl Node {
    pub fn new(node_id: NodeId, kind: NodeKind, position: Point, label: impl Into<String>) -> Self {
        Self {
            node_id,
            kind,
            position,
            size: None,
            content: NodeContent::new(label),
        }
    }

    pub fn new_with(
        node_id: NodeId,
        kind: NodeKind,
        position: Point,
        size: Option<Size>,
        content: NodeContent,
    ) -> Self {
        Self {
            node_id,
            kind,
            position,
            size,
            content,
        }
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_size(&mut self, size: Option<Size>) {
        self.size = size;
    }

    pub fn set_content(&mut self, content: NodeContent) {
        self.content = content;
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn content(&self) -> &NodeContent {
        &self.content
    }
}
