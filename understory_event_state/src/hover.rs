// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: turn successive root→target paths into enter/leave transitions.
//!
//! ## Usage
//!
//! 1) Whenever the pointer moves, compute the root→target path of the element under it.
//! 2) Feed the path to [`HoverState::update_path`] and act on the returned events.
//! 3) When the pointer leaves the tracked surface entirely, call [`HoverState::clear`].
//!
//! Repeating the same path yields no events, so hosts that report "pointer entered"
//! more than once do not produce duplicate transitions.
//!
//! ## Minimal example
//!
//! ```
//! use understory_event_state::hover::{HoverEvent, HoverState};
//!
//! let mut hover = HoverState::new();
//! assert_eq!(hover.update_path(&["carousel"]), vec![HoverEvent::Enter("carousel")]);
//! assert!(hover.update_path(&["carousel"]).is_empty());
//! assert_eq!(hover.clear(), vec![HoverEvent::Leave("carousel")]);
//! ```

use alloc::vec::Vec;

/// A hover transition for a single node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered this node.
    Enter(K),
    /// The pointer left this node.
    Leave(K),
}

/// Tracks the currently hovered root→target path.
#[derive(Clone, Debug, Default)]
pub struct HoverState<K> {
    path: Vec<K>,
}

impl<K> HoverState<K> {
    /// Creates a state with nothing hovered.
    #[must_use]
    pub const fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Returns the currently hovered path, root first.
    #[must_use]
    pub fn current_path(&self) -> &[K] {
        &self.path
    }

    /// Returns `true` if anything is hovered.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        !self.path.is_empty()
    }
}

impl<K: Clone + PartialEq> HoverState<K> {
    /// Replaces the hovered path and returns the resulting transitions.
    ///
    /// Leave events are emitted first, deepest node first; enter events follow,
    /// root first. Nodes shared by the old and new path prefix produce no events.
    pub fn update_path(&mut self, path: &[K]) -> Vec<HoverEvent<K>> {
        let shared = self
            .path
            .iter()
            .zip(path)
            .take_while(|(old, new)| old == new)
            .count();

        let mut events: Vec<_> = self.path[shared..]
            .iter()
            .rev()
            .cloned()
            .map(HoverEvent::Leave)
            .collect();
        events.extend(path[shared..].iter().cloned().map(HoverEvent::Enter));

        self.path.truncate(shared);
        self.path.extend_from_slice(&path[shared..]);
        events
    }

    /// Leaves every hovered node, deepest first.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        self.update_path(&[])
    }

    /// Returns `true` if `node` is on the hovered path.
    #[must_use]
    pub fn is_hovered(&self, node: &K) -> bool {
        self.path.contains(node)
    }
}
