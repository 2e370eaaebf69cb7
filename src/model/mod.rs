// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Node and connection data are owned by the surrounding diagram session;
//! the engine reads node snapshots and produces handle decisions from the
//! fixed vocabulary in [`handle`].

pub mod connection;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod handle;
pub mod ids;
pub mod node;
pub mod snapshot;

pub use connection::{
    Connection, ConnectionIntent, ConnectionKey, DecisionRule, DragContext, IntentKind,
};
pub use handle::{
    BranchKind, Direction, Handle, HandlePair, ParseDirectionError, ParseHandleError,
};
pub use ids::{Id, IdError, NodeId};
pub use node::{Node, NodeContent, NodeKind, ParseNodeKindError, Point, Size};
pub use snapshot::{ConnectionSnapshot, NodeSnapshot, SnapshotError};
