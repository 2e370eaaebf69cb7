// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Session-scoped ledger of resolved connections.
//!
//! One registry per editing session: construct it when the session opens,
//! `clear()` and drop it when the session closes. The canvas stays the
//! source of truth for the edge list; the registry only remembers what the
//! engine resolved, so "is this branch already taken" queries and removals
//! stay cheap. Branch exclusivity is advisory here: the registry does not
//! reject duplicates recorded around the policy.

use std::collections::BTreeMap;

use smallvec::SmallVec;
use tracing::trace;

use crate::model::{Connection, ConnectionKey, Handle, HandlePair, NodeId};

type NodeIndex = SmallVec<[ConnectionKey; 4]>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectionRegistry {
    connections: BTreeMap<ConnectionKey, Connection>,
    by_node: BTreeMap<NodeId, NodeIndex>,
    next_seq: u64,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts the connection for the ordered (source, target) pair.
    ///
    /// A fresh insert appends the key to both nodes' reverse-index lists;
    /// updating an existing pair replaces the endpoints and refreshes the
    /// `recorded_at` stamp without touching the index.
    pub fn record(
        &mut self,
        source: NodeId,
        target: NodeId,
        endpoints: HandlePair,
    ) -> &Connection {
        trace!(
            "registry::record({}-{}, {}/{})",
            source,
            target,
            endpoints.source(),
            endpoints.target()
        );

        let key = ConnectionKey::new(source.clone(), target.clone());
        let seq = self.next_seq;
        self.next_seq += 1;

        if !self.connections.contains_key(&key) {
            self.by_node.entry(source.clone()).or_default().push(key.clone());
            self.by_node.entry(target.clone()).or_default().push(key.clone());
        }

        let connection = Connection::new_with(
            source,
            target,
            endpoints.source(),
            endpoints.target(),
            seq,
        );
        self.connections.insert(key.clone(), connection);
        self.connections.get(&key).expect("connection just inserted")
    }

    /// Removes the connection; no-op when absent.
    pub fn remove(&mut self, source: &NodeId, target: &NodeId) -> Option<Connection> {
        let key = ConnectionKey::new(source.clone(), target.clone());
        let removed = self.connections.remove(&key)?;

        trace!("registry::remove({}-{})", source, target);

        for node_id in [source, target] {
            if let Some(index) = self.by_node.get_mut(node_id) {
                index.retain(|entry| entry != &key);
                if index.is_empty() {
                    self.by_node.remove(node_id);
                }
            }
        }

        Some(removed)
    }

    pub fn get(&self, source: &NodeId, target: &NodeId) -> Option<&Connection> {
        self.connections
            .get(&ConnectionKey::new(source.clone(), target.clone()))
    }

    /// Keys of all connections touching the node, in insertion order.
    pub fn connections_of(&self, node_id: &NodeId) -> &[ConnectionKey] {
        self.by_node
            .get(node_id)
            .map(|index| index.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Owned copy of the current connection list, in key order.
    ///
    /// Convenience for handing the registry's view to the resolver, which
    /// takes connection snapshots by slice.
    pub fn snapshot(&self) -> Vec<Connection> {
        self.connections.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Empties all state; used at session teardown.
    pub fn clear(&mut self) {
        trace!("registry::clear()");
        self.connections.clear();
        self.by_node.clear();
        self.next_seq = 0;
    }
}

/// Derived per-node counters over a supplied connection snapshot.
///
/// Decoupled from the registry's own storage so the policy can be exercised
/// against external snapshots as well as recorded state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectionStats {
    total: usize,
    branch: usize,
    normal: usize,
    true_occupied: bool,
    false_occupied: bool,
}

impl ConnectionStats {
    /// Connections touching the node on either side.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Connections leaving the node via a branch handle.
    pub fn branch(&self) -> usize {
        self.branch
    }

    pub fn normal(&self) -> usize {
        self.normal
    }

    pub fn true_occupied(&self) -> bool {
        self.true_occupied
    }

    pub fn false_occupied(&self) -> bool {
        self.false_occupied
    }
}

pub fn connection_stats(node_id: &NodeId, connections: &[Connection]) -> ConnectionStats {
    let mut stats = ConnectionStats::default();

    for connection in connections {
        if !connection.touches(node_id) {
            continue;
        }
        stats.total += 1;

        let outgoing_branch = connection.source_node_id() == node_id
            && connection.source_handle().is_branch();
        if outgoing_branch {
            stats.branch += 1;
            match connection.source_handle() {
                Handle::RightTrue => stats.true_occupied = true,
                Handle::LeftFalse => stats.false_occupied = true,
                _ => {}
            }
        } else {
            stats.normal += 1;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::{connection_stats, ConnectionRegistry};
    use crate::model::fixtures::{nid, outgoing_connection};
    use crate::model::{ConnectionKey, Handle, HandlePair};

    fn key(source: &str, target: &str) -> ConnectionKey {
        ConnectionKey::new(nid(source), nid(target))
    }

    fn generic_pair() -> HandlePair {
        HandlePair::new(Handle::RightSource, Handle::LeftTarget)
    }

    #[test]
    fn record_indexes_both_nodes() {
        let mut registry = ConnectionRegistry::new();
        let connection = registry.record(nid("n:a"), nid("n:b"), generic_pair());
        assert_eq!(connection.recorded_at(), 0);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.connections_of(&nid("n:a")), [key("n:a", "n:b")]);
        assert_eq!(registry.connections_of(&nid("n:b")), [key("n:a", "n:b")]);
        assert!(registry.connections_of(&nid("n:c")).is_empty());
    }

    #[test]
    fn record_upserts_without_duplicating_index_entries() {
        let mut registry = ConnectionRegistry::new();
        registry.record(nid("n:a"), nid("n:b"), generic_pair());
        registry.record(
            nid("n:a"),
            nid("n:b"),
            HandlePair::new(Handle::RightTrue, Handle::LeftTarget),
        );

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.connections_of(&nid("n:a")), [key("n:a", "n:b")]);
        assert_eq!(registry.connections_of(&nid("n:b")), [key("n:a", "n:b")]);

        let connection = registry.get(&nid("n:a"), &nid("n:b")).expect("connection");
        assert_eq!(connection.source_handle(), Handle::RightTrue);
        assert_eq!(connection.recorded_at(), 1);
    }

    #[test]
    fn ordered_pairs_are_distinct_connections() {
        let mut registry = ConnectionRegistry::new();
        registry.record(nid("n:a"), nid("n:b"), generic_pair());
        registry.record(nid("n:b"), nid("n:a"), generic_pair());

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.connections_of(&nid("n:a")).len(), 2);
        assert_eq!(registry.connections_of(&nid("n:b")).len(), 2);
    }

    #[test]
    fn record_then_remove_restores_the_index_exactly() {
        let mut registry = ConnectionRegistry::new();
        registry.record(nid("n:a"), nid("n:x"), generic_pair());
        registry.record(nid("n:b"), nid("n:y"), generic_pair());

        let before_a = registry.connections_of(&nid("n:a")).to_vec();
        let before_b = registry.connections_of(&nid("n:b")).to_vec();

        registry.record(nid("n:a"), nid("n:b"), generic_pair());
        let removed = registry.remove(&nid("n:a"), &nid("n:b")).expect("removed");
        assert_eq!(removed.key(), key("n:a", "n:b"));

        assert_eq!(registry.connections_of(&nid("n:a")), before_a.as_slice());
        assert_eq!(registry.connections_of(&nid("n:b")), before_b.as_slice());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn remove_is_a_noop_when_absent() {
        let mut registry = ConnectionRegistry::new();
        registry.record(nid("n:a"), nid("n:b"), generic_pair());

        assert_eq!(registry.remove(&nid("n:a"), &nid("n:c")), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn clear_empties_all_state() {
        let mut registry = ConnectionRegistry::new();
        registry.record(nid("n:a"), nid("n:b"), generic_pair());
        registry.record(nid("n:b"), nid("n:c"), generic_pair());

        registry.clear();

        assert!(registry.is_empty());
        assert!(registry.connections_of(&nid("n:a")).is_empty());
        assert!(registry.connections_of(&nid("n:b")).is_empty());
        assert_eq!(registry.snapshot(), Vec::new());

        // Sequence numbers restart with the fresh session state.
        let connection = registry.record(nid("n:a"), nid("n:b"), generic_pair());
        assert_eq!(connection.recorded_at(), 0);
    }

    #[test]
    fn snapshot_returns_connections_in_key_order() {
        let mut registry = ConnectionRegistry::new();
        registry.record(nid("n:b"), nid("n:c"), generic_pair());
        registry.record(nid("n:a"), nid("n:b"), generic_pair());

        let keys = registry
            .snapshot()
            .iter()
            .map(|connection| connection.key().to_string())
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["n:a-n:b", "n:b-n:c"]);
    }

    #[test]
    fn stats_split_branch_and_normal_sides() {
        let connections = [
            outgoing_connection("n:cond", "n:a", Handle::RightTrue),
            outgoing_connection("n:cond", "n:b", Handle::RightSource),
            outgoing_connection("n:x", "n:cond", Handle::LeftFalse),
        ];

        let stats = connection_stats(&nid("n:cond"), &connections);
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.branch(), 1);
        assert_eq!(stats.normal(), 2);
        assert!(stats.true_occupied());
        // The left-false edge reaches the node as a target; it does not
        // occupy the node's own false branch.
        assert!(!stats.false_occupied());

        let stats = connection_stats(&nid("n:unrelated"), &connections);
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.branch(), 0);
        assert_eq!(stats.normal(), 0);
        assert!(!stats.true_occupied());
        assert!(!stats.false_occupied());
    }
}
