// ABOUTME: Per-user collaborator services around the compliance pipeline
// ABOUTME: Dietary preferences and recipe history, each persisted in its own JSON document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! These services supply the pipeline's inputs (dietary configuration) and
//! record its outputs (history). They never make compliance decisions.

/// Recipe history append/list
pub mod history;

/// Dietary preferences view/update
pub mod preferences;

pub use history::{HistoryEntry, HistoryService};
pub use preferences::{parse_exclusions, PreferencesService};
