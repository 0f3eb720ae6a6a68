// ABOUTME: Flat-file persistence for the recipe assistant
// ABOUTME: Exposes JsonStore, which owns the data directory and its JSON documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! Every piece of state lives in a small JSON document inside one data
//! directory. Documents are read whole and written whole; there is no
//! locking because only one user is active per process.

/// JSON document store over the data directory
pub mod json_store;

pub use json_store::JsonStore;
