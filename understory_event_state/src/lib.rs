// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for common UI interactions
//! that require stateful tracking across multiple events. Each module handles a
//! specific interaction pattern:
//!
//! - [`hover`]: Track enter/leave transitions as the pointer moves across UI elements
//! - [`swipe`]: Classify a start→move→end drag as a horizontal swipe past a threshold
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any event routing or spatial query system
//! - **Generic**: Accept application-specific node/widget ID types
//!
//! The crate does not assume any particular UI framework, event system, or scene
//! graph structure. Instead, these managers accept pre-computed information (like
//! root→target paths or raw pointer positions) and produce transition events or
//! state queries that applications can interpret.
//!
//! ## Usage Patterns
//!
//! ### Hover Tracking
//!
//! Use [`hover::HoverState`] to compute enter/leave transitions when the pointer
//! moves between UI elements:
//!
//! ```rust
//! use understory_event_state::hover::{HoverState, HoverEvent};
//!
//! let mut hover = HoverState::new();
//!
//! // Pointer enters a nested element: [root, parent, child]
//! let events = hover.update_path(&[1, 2, 3]);
//! assert_eq!(events, vec![
//!     HoverEvent::Enter(1),
//!     HoverEvent::Enter(2),
//!     HoverEvent::Enter(3)
//! ]);
//!
//! // Pointer moves to sibling: [root, parent, sibling]
//! let events = hover.update_path(&[1, 2, 4]);
//! assert_eq!(events, vec![
//!     HoverEvent::Leave(3),   // Leave child
//!     HoverEvent::Enter(4)    // Enter sibling
//! ]);
//! ```
//!
//! ### Swipe Gestures
//!
//! Use [`swipe::SwipeTracker`] to turn pointer or touch drags into navigation:
//!
//! ```rust
//! # #[cfg(feature = "swipe")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::swipe::{SwipeDirection, SwipeTracker};
//!
//! let mut swipe = SwipeTracker::new(100.0);
//!
//! // Touch down at x = 20, drag right past the threshold
//! swipe.start(Some(Point::new(20.0, 300.0)));
//! assert!(swipe.update(Point::new(90.0, 305.0)));
//! let direction = swipe.end(Some(Point::new(180.0, 310.0)));
//! assert_eq!(direction, Some(SwipeDirection::Backward));
//! # }
//! ```
//!
//! Each manager is designed to be a focused building block that handles one
//! interaction pattern well, allowing applications to compose them as needed
//! for their specific UI requirements.
//!
//! ## Features
//!
//! - `swipe`: Enable swipe gesture tracking (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod hover;

#[cfg(feature = "swipe")]
pub mod swipe;
