// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire-format snapshots handed over by the canvas state store.
//!
//! The canvas keeps nodes and edges as JSON; these DTOs accept that shape
//! and convert it into validated model types. Invalid ids and unknown node
//! kinds are rejected here so the engine proper stays total.

use std::fmt;

use serde::Deserialize;

use super::connection::Connection;
use super::handle::{Handle, ParseHandleError};
use super::ids::{IdError, NodeId};
use super::node::{Node, NodeContent, NodeKind, ParseNodeKindError, Point, Size};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeSnapshot {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    position: PointSnapshot,
    #[serde(default)]
    size: Option<SizeSnapshot>,
    #[serde(default)]
    data: NodeDataSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct PointSnapshot {
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct SizeSnapshot {
    width: f64,
    height: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
struct NodeDataSnapshot {
    #[serde(default)]
    label: String,
    #[serde(default)]
    description: Option<String>,
}

impl NodeSnapshot {
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(text).map_err(|source| SnapshotError::Json { source })
    }

    pub fn into_node(self) -> Result<Node, SnapshotError> {
        let node_id = NodeId::new(self.id.clone()).map_err(|source| SnapshotError::InvalidId {
            field: "id",
            value: self.id.clone(),
            source,
        })?;
        let kind: NodeKind = self
            .kind
            .parse()
            .map_err(|source| SnapshotError::UnknownKind {
                value: self.kind.clone(),
                source,
            })?;

        Ok(Node::new_with(
            node_id,
            kind,
            Point::new(self.position.x, self.position.y),
            self.size.map(|size| Size::new(size.width, size.height)),
            NodeContent::new_with(self.data.label, self.data.description),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConnectionSnapshot {
    source: String,
    target: String,
    #[serde(rename = "sourceHandle")]
    source_handle: String,
    #[serde(rename = "targetHandle")]
    target_handle: String,
}

impl ConnectionSnapshot {
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(text).map_err(|source| SnapshotError::Json { source })
    }

    pub fn into_connection(self) -> Result<Connection, SnapshotError> {
        let source = NodeId::new(self.source.clone()).map_err(|source_err| {
            SnapshotError::InvalidId {
                field: "source",
                value: self.source.clone(),
                source: source_err,
            }
        })?;
        let target = NodeId::new(self.target.clone()).map_err(|source_err| {
            SnapshotError::InvalidId {
                field: "target",
                value: self.target.clone(),
                source: source_err,
            }
        })?;
        let source_handle: Handle =
            self.source_handle
                .parse()
                .map_err(|source_err| SnapshotError::UnknownHandle {
                    field: "sourceHandle",
                    value: self.source_handle.clone(),
                    source: source_err,
                })?;
        let target_handle: Handle =
            self.target_handle
                .parse()
                .map_err(|source_err| SnapshotError::UnknownHandle {
                    field: "targetHandle",
                    value: self.target_handle.clone(),
                    source: source_err,
                })?;

        Ok(Connection::new(source, target, source_handle, target_handle))
    }
}

#[derive(Debug)]
pub enum SnapshotError {
    Json {
        source: serde_json::Error,
    },
    InvalidId {
        field: &'static str,
        value: String,
        source: IdError,
    },
    UnknownKind {
        value: String,
        source: ParseNodeKindError,
    },
    UnknownHandle {
        field: &'static str,
        value: String,
        source: ParseHandleError,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "json error in snapshot: {source}"),
            Self::InvalidId { field, value, source } => {
                write!(f, "invalid id in snapshot field '{field}' ('{value}'): {source}")
            }
            Self::UnknownKind { value, .. } => {
                write!(f, "unknown node kind in snapshot ('{value}')")
            }
            Self::UnknownHandle { field, value, .. } => {
                write!(f, "unknown handle in snapshot field '{field}' ('{value}')")
            }
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::UnknownKind { source, .. } => Some(source),
            Self::UnknownHandle { source, .. } => Some(source),
        }
    }
}
