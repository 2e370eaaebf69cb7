// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The top-level resolution entry point.
//!
//! Combines geometry classification, the handle mapper and the
//! condition-branch policy into one call the canvas invokes from its drag
//! handlers. Resolution is pure: nothing is stored until the caller asks
//! the registry to remember the connection.

pub mod events;

pub use events::{NullObserver, RecordingObserver, ResolutionEvent, ResolutionObserver};

use crate::geometry::{self, mapping};
use crate::model::{
    Connection, ConnectionIntent, Direction, DragContext, Handle, HandlePair, Node,
};
use crate::policy::{BranchConflict, BranchPolicy};

/// The final answer for one prospective edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConnection {
    source_handle: Handle,
    target_handle: Handle,
    direction: Direction,
    distance: f64,
    intent: Option<ConnectionIntent>,
}

impl ResolvedConnection {
    pub fn source_handle(&self) -> Handle {
        self.source_handle
    }

    pub fn target_handle(&self) -> Handle {
        self.target_handle
    }

    pub fn endpoints(&self) -> HandlePair {
        HandlePair::new(self.source_handle, self.target_handle)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Decision metadata from the condition-branch policy; `None` when the
    /// source node is not a condition node.
    pub fn intent(&self) -> Option<ConnectionIntent> {
        self.intent
    }
}

/// Resolves anchor points for edges as the user (or an assistant) draws
/// them.
///
/// Owned by the session/editor controller alongside the registry; one
/// resolver serves the whole session. The observer receives typed decision
/// events; the default [`NullObserver`] discards them.
#[derive(Debug, Default)]
pub struct ConnectionResolver<O = NullObserver> {
    policy: BranchPolicy,
    observer: O,
}

impl ConnectionResolver<NullObserver> {
    pub fn new(policy: BranchPolicy) -> Self {
        Self {
            policy,
            observer: NullObserver,
        }
    }
}

impl<O: ResolutionObserver> ConnectionResolver<O> {
    pub fn with_observer(policy: BranchPolicy, observer: O) -> Self {
        Self { policy, observer }
    }

    pub fn policy(&self) -> &BranchPolicy {
        &self.policy
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Resolves the handle pair an edge from `source` to `target` should
    /// bind to.
    ///
    /// `user_direction` always wins over geometry. `connections` is the
    /// caller's snapshot of existing edges; the canvas, not this engine,
    /// owns that list. Identical inputs resolve identically, with no side
    /// effects beyond observer notifications.
    pub fn calculate_connection_points(
        &self,
        source: &Node,
        target: &Node,
        user_direction: Option<Direction>,
        context: Option<&DragContext>,
        connections: &[Connection],
    ) -> ResolvedConnection {
        let resolution = geometry::resolve_direction(source, target, user_direction);
        self.observer.observe(ResolutionEvent::DirectionResolved {
            source: source.node_id().clone(),
            target: target.node_id().clone(),
            direction: resolution.direction(),
            distance: resolution.distance(),
            user_override: user_direction.is_some(),
        });

        let default_pair = mapping::handles_for(
            resolution.direction(),
            geometry::node_center(source),
            geometry::node_center(target),
        );

        let condition = self.policy.resolve_condition_handle(
            default_pair.source(),
            source,
            Some(target),
            context,
            connections,
        );

        if let Some(intent) = condition.intent() {
            self.observer.observe(ResolutionEvent::BranchRuleApplied {
                node: source.node_id().clone(),
                rule: intent.rule(),
                handle: intent.handle(),
            });
        }
        match condition.conflict() {
            Some(BranchConflict::SwitchedBranch { requested, granted }) => {
                self.observer.observe(ResolutionEvent::BranchConflictSwitched {
                    node: source.node_id().clone(),
                    requested,
                    granted,
                });
            }
            Some(BranchConflict::BothOccupied { requested }) => {
                self.observer.observe(ResolutionEvent::BranchConflictExhausted {
                    node: source.node_id().clone(),
                    requested,
                });
            }
            None => {}
        }

        ResolvedConnection {
            source_handle: condition.handle(),
            target_handle: default_pair.target(),
            direction: resolution.direction(),
            distance: resolution.distance(),
            intent: condition.intent(),
        }
    }
}
