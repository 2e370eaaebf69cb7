// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::connection::Connection;
use super::handle::Handle;
use super::ids::NodeId;
use super::node::{Node, NodeContent, NodeKind, Point};

pub(crate) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

pub(crate) fn node_at(id: &str, kind: NodeKind, x: f64, y: f64) -> Node {
    Node::new(nid(id), kind, Point::new(x, y), id.to_uppercase())
}

pub(crate) fn labeled_node(id: &str, kind: NodeKind, label: &str) -> Node {
    Node::new(nid(id), kind, Point::new(0.0, 0.0), label)
}

pub(crate) fn described_node(id: &str, kind: NodeKind, label: &str, description: &str) -> Node {
    Node::new_with(
        nid(id),
        kind,
        Point::new(0.0, 0.0),
        None,
        NodeContent::new_with(label, Some(description.to_owned())),
    )
}

pub(crate) fn outgoing_connection(source: &str, target: &str, source_handle: Handle) -> Connection {
    Connection::new(nid(source), nid(target), source_handle, Handle::LeftTarget)
}
