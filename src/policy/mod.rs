// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dual-tier handle policy for condition nodes.
//!
//! Condition nodes layer two mutually exclusive branch handles
//! (`right-true`, `left-false`) over the generic vocabulary. This module
//! owns the precedence rules that decide between them, the semantic
//! classification of target nodes, and conflict resolution against the
//! caller-supplied list of existing connections.

pub mod vocabulary;

pub use vocabulary::{BranchVocabulary, VocabularyError};

use crate::model::{
    BranchKind, Connection, ConnectionIntent, DecisionRule, DragContext, Handle, Node, NodeId,
    NodeKind,
};

/// Outcome of resolving the source handle for one prospective edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionResolution {
    handle: Handle,
    intent: Option<ConnectionIntent>,
    conflict: Option<BranchConflict>,
}

impl ConditionResolution {
    fn passthrough(handle: Handle) -> Self {
        Self {
            handle,
            intent: None,
            conflict: None,
        }
    }

    /// The final source handle the edge should bind to.
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// The decision artifact, present only for condition source nodes.
    pub fn intent(&self) -> Option<ConnectionIntent> {
        self.intent
    }

    pub fn conflict(&self) -> Option<BranchConflict> {
        self.conflict
    }
}

/// How an occupied branch handle was handled.
///
/// `BothOccupied` is a policy outcome, not an error: the requested handle is
/// returned unchanged and the caller decides whether to confirm, reroute or
/// drop the edge. The engine never silently replaces an existing edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchConflict {
    SwitchedBranch { requested: Handle, granted: Handle },
    BothOccupied { requested: Handle },
}

/// The condition-branch policy: precedence rules plus semantic inference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BranchPolicy {
    vocabulary: BranchVocabulary,
}

impl BranchPolicy {
    pub fn new(vocabulary: BranchVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &BranchVocabulary {
        &self.vocabulary
    }

    /// Resolves the source handle for an edge leaving `source`.
    ///
    /// Non-condition nodes pass the mapper default through unchanged. For
    /// condition nodes the precedence rules pick an intent, then any branch
    /// handle is checked against `connections` for conflicts.
    pub fn resolve_condition_handle(
        &self,
        default_handle: Handle,
        source: &Node,
        target: Option<&Node>,
        context: Option<&DragContext>,
        connections: &[Connection],
    ) -> ConditionResolution {
        if !source.kind().is_condition() {
            return ConditionResolution::passthrough(default_handle);
        }

        let intent = self.connection_intent(default_handle, target, context);

        let mut handle = intent.handle();
        let mut conflict = None;
        if handle.is_branch() && Self::check_conflict(source.node_id(), handle, connections) {
            let granted = Self::resolve_conflict(source.node_id(), handle, connections);
            conflict = Some(if granted == handle {
                BranchConflict::BothOccupied { requested: handle }
            } else {
                BranchConflict::SwitchedBranch {
                    requested: handle,
                    granted,
                }
            });
            handle = granted;
        }

        ConditionResolution {
            handle,
            intent: Some(intent),
            conflict,
        }
    }

    /// Applies the precedence rules; first match wins.
    ///
    /// 1. drag started on a branch handle: honor it verbatim;
    /// 2. drag started on a generic handle: keep the mapper default;
    /// 3. machine-generated edge with a known target: classify the target;
    /// 4. known target: classify it; no target at all: generic fallback.
    pub fn connection_intent(
        &self,
        default_handle: Handle,
        target: Option<&Node>,
        context: Option<&DragContext>,
    ) -> ConnectionIntent {
        if let Some(origin) = context.and_then(DragContext::origin_handle) {
            if let Some(branch) = origin.branch_kind() {
                return ConnectionIntent::branch(origin, branch, DecisionRule::ExplicitBranch);
            }
            return ConnectionIntent::normal(default_handle, DecisionRule::ExplicitNormal);
        }

        if context.is_some_and(DragContext::ai_generated) {
            if let Some(target) = target {
                let branch = self.classify_branch(target);
                return ConnectionIntent::branch(branch.handle(), branch, DecisionRule::Assisted);
            }
        }

        if let Some(target) = target {
            let branch = self.classify_branch(target);
            return ConnectionIntent::branch(branch.handle(), branch, DecisionRule::Inferred);
        }

        ConnectionIntent::normal(Handle::RightSource, DecisionRule::Fallback)
    }

    /// Infers which branch a target node belongs to from its wording.
    ///
    /// Positive-only wording picks the true branch, negative-only the false
    /// branch. Ambiguous or silent wording falls back to node-kind
    /// heuristics, and ultimately to the true branch.
    pub fn classify_branch(&self, node: &Node) -> BranchKind {
        let label = node.content().label().to_lowercase();
        let text = match node.content().description() {
            Some(description) => {
                let mut text = label.clone();
                text.push(' ');
                text.push_str(&description.to_lowercase());
                text
            }
            None => label.clone(),
        };

        let positive = self.vocabulary.has_positive(&text);
        let negative = self.vocabulary.has_negative(&text);

        match (positive, negative) {
            (true, false) => BranchKind::True,
            (false, true) => BranchKind::False,
            _ => match node.kind() {
                NodeKind::Execution | NodeKind::Material => BranchKind::True,
                NodeKind::Result if self.vocabulary.has_negative(&label) => BranchKind::False,
                _ => BranchKind::True,
            },
        }
    }

    /// True if an existing connection already leaves `node_id` via `handle`.
    pub fn check_conflict(node_id: &NodeId, handle: Handle, connections: &[Connection]) -> bool {
        connections
            .iter()
            .any(|connection| {
                connection.source_node_id() == node_id && connection.source_handle() == handle
            })
    }

    /// Resolves a branch-handle conflict.
    ///
    /// Returns the requested handle when it is free or not a branch handle;
    /// switches to the opposite branch when only the requested one is taken;
    /// returns the requested handle unchanged when both are occupied.
    pub fn resolve_conflict(
        node_id: &NodeId,
        requested: Handle,
        connections: &[Connection],
    ) -> Handle {
        let Some(branch) = requested.branch_kind() else {
            return requested;
        };

        if !Self::check_conflict(node_id, requested, connections) {
            return requested;
        }

        let other = branch.opposite().handle();
        if Self::check_conflict(node_id, other, connections) {
            return requested;
        }

        other
    }
}
