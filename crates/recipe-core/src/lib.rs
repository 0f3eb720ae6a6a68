// ABOUTME: Core types and constants for the recipe assistant
// ABOUTME: Foundation crate with error handling, recipe models, and dietary configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe
//! assistant. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: User-facing messages, file names and environment keys
//! - **models**: Recipes, ingredients, dietary configuration and compliance results

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, Ingredient, `DietaryConfiguration`, `ComplianceResult`)
pub mod models;
