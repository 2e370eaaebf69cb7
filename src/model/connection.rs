// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::handle::{BranchKind, Handle, HandlePair};
use super::ids::NodeId;

/// Identity of a connection: the ordered (source, target) node pair.
///
/// Canonical string form is `<source>-<target>`, matching the key format the
/// canvas uses for its own edge bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionKey {
    source: NodeId,
    target: NodeId,
}

impl ConnectionKey {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }
}

impl fmt::Display for ConnectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

/// A resolved edge endpoint pair, as remembered by the registry or supplied
/// by the canvas as part of an existing-connection snapshot.
///
/// `recorded_at` is a monotonic sequence number stamped by the registry; the
/// engine never reads a clock.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Connection {
    source_node_id: NodeId,
    target_node_id: NodeId,
    source_handle: Handle,
    target_handle: Handle,
    recorded_at: u64,
}

impl Connection {
    pub fn new(
        source_node_id: NodeId,
        target_node_id: NodeId,
        source_handle: Handle,
        target_handle: Handle,
    ) -> Self {
        Self::new_with(source_node_id, target_node_id, source_handle, target_handle, 0)
    }

    pub fn new_with(
        source_node_id: NodeId,
        target_node_id: NodeId,
        source_handle: Handle,
        target_handle: Handle,
        recorded_at: u64,
    ) -> Self {
        Self {
            source_node_id,
            target_node_id,
            source_handle,
            target_handle,
            recorded_at,
        }
    }

    pub fn key(&self) -> ConnectionKey {
        ConnectionKey::new(self.source_node_id.clone(), self.target_node_id.clone())
    }

    pub fn source_node_id(&self) -> &NodeId {
        &self.source_node_id
    }

    pub fn target_node_id(&self) -> &NodeId {
        &self.target_node_id
    }

    pub fn source_handle(&self) -> Handle {
        self.source_handle
    }

    pub fn target_handle(&self) -> Handle {
        self.target_handle
    }

    pub fn endpoints(&self) -> HandlePair {
        HandlePair::new(self.source_handle, self.target_handle)
    }

    pub fn recorded_at(&self) -> u64 {
        self.recorded_at
    }

    pub fn touches(&self, node_id: &NodeId) -> bool {
        &self.source_node_id == node_id || &self.target_node_id == node_id
    }
}

/// Which precedence rule picked the handle.
///
/// Confidence is a heuristic score, not a probability; it is a pure function
/// of the rule that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DecisionRule {
    /// The drag started on a branch handle; user intent is honored verbatim.
    ExplicitBranch,
    /// The drag started on a generic handle; the geometric default stands.
    ExplicitNormal,
    /// Machine-generated edge; the target node was classified semantically.
    Assisted,
    /// No explicit origin; the target node was classified semantically.
    Inferred,
    /// No origin and no target node known; generic fallback.
    Fallback,
}

impl DecisionRule {
    pub fn confidence(&self) -> f64 {
        match self {
            Self::ExplicitBranch => 1.0,
            Self::ExplicitNormal => 0.8,
            Self::Assisted => 0.7,
            Self::Inferred => 0.6,
            Self::Fallback => 0.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExplicitBranch => "explicit-branch",
            Self::ExplicitNormal => "explicit-normal",
            Self::Assisted => "assisted",
            Self::Inferred => "inferred",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for DecisionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntentKind {
    Branch,
    Normal,
}

/// Intermediate decision artifact produced by the condition-branch policy.
///
/// Not persisted; callers read it to understand (and, for conflicts,
/// confirm) what the engine decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionIntent {
    kind: IntentKind,
    handle: Handle,
    branch: Option<BranchKind>,
    rule: DecisionRule,
}

impl ConnectionIntent {
    pub fn branch(handle: Handle, branch: BranchKind, rule: DecisionRule) -> Self {
        Self {
            kind: IntentKind::Branch,
            handle,
            branch: Some(branch),
            rule,
        }
    }

    pub fn normal(handle: Handle, rule: DecisionRule) -> Self {
        Self {
            kind: IntentKind::Normal,
            handle,
            branch: None,
            rule,
        }
    }

    pub fn kind(&self) -> IntentKind {
        self.kind
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn branch_kind(&self) -> Option<BranchKind> {
        self.branch
    }

    pub fn rule(&self) -> DecisionRule {
        self.rule
    }

    pub fn confidence(&self) -> f64 {
        self.rule.confidence()
    }
}

/// What the interaction layer knows about the drag that created the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DragContext {
    origin_handle: Option<Handle>,
    ai_generated: bool,
}

impl DragContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_origin_handle(&mut self, origin_handle: Option<Handle>) {
        self.origin_handle = origin_handle;
    }

    pub fn set_ai_generated(&mut self, ai_generated: bool) {
        self.ai_generated = ai_generated;
    }

    /// The handle the user started the drag from, when the drag began on a
    /// specific handle rather than the node body.
    pub fn origin_handle(&self) -> Option<Handle> {
        self.origin_handle
    }

    pub fn ai_generated(&self) -> bool {
        self.ai_generated
    }
}
