// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Typed decision events emitted during resolution.
//!
//! Events carry the data a caller (or a test) needs to see why a handle was
//! chosen, without parsing log text. Observation is synchronous and local;
//! observers must not block.

use std::cell::RefCell;

use crate::model::{DecisionRule, Direction, Handle, NodeId};

#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionEvent {
    DirectionResolved {
        source: NodeId,
        target: NodeId,
        direction: Direction,
        distance: f64,
        user_override: bool,
    },
    BranchRuleApplied {
        node: NodeId,
        rule: DecisionRule,
        handle: Handle,
    },
    BranchConflictSwitched {
        node: NodeId,
        requested: Handle,
        granted: Handle,
    },
    /// Both branch handles were occupied; the requested handle was returned
    /// unchanged. This is the caller's cue to confirm with the user.
    BranchConflictExhausted {
        node: NodeId,
        requested: Handle,
    },
}

pub trait ResolutionObserver {
    fn observe(&self, event: ResolutionEvent);
}

/// Discards every event; the default observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullObserver;

impl ResolutionObserver for NullObserver {
    fn observe(&self, _event: ResolutionEvent) {}
}

/// Buffers events for assertions.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<ResolutionEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ResolutionEvent> {
        self.events.borrow().clone()
    }

    /// Drains the buffer, returning everything observed so far.
    pub fn take(&self) -> Vec<ResolutionEvent> {
        self.events.take()
    }
}

impl ResolutionObserver for RecordingObserver {
    fn observe(&self, event: ResolutionEvent) {
        self.events.borrow_mut().push(event);
    }
}
