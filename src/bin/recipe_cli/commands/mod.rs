// ABOUTME: Re-exports command modules for recipe-cli
// ABOUTME: Account, recipe, preference and history commands plus the interactive menus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod account;
pub mod history;
pub mod interactive;
pub mod preferences;
pub mod recipe;
