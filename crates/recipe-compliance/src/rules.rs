// ABOUTME: Fixed mapping from diet mode to the ingredient terms that diet bans
// ABOUTME: Lists are ordered; the first matching term is the one reported
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::models::DietMode;

/// Terms banned by a vegetarian diet, in reporting order
const VEGETARIAN: &[&str] = &["chicken", "beef", "pork", "fish", "shrimp"];

/// Terms banned by a vegan diet, in reporting order
const VEGAN: &[&str] = &[
    "chicken", "beef", "pork", "fish", "shrimp", "egg", "milk", "cheese", "butter",
];

/// Banned ingredient terms for a diet mode
///
/// `None` and unrecognised modes ban nothing.
#[must_use]
pub fn banned_terms(diet: &DietMode) -> &'static [&'static str] {
    match diet {
        DietMode::Vegetarian => VEGETARIAN,
        DietMode::Vegan => VEGAN,
        DietMode::None | DietMode::Other(_) => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vegan_extends_vegetarian_in_order() {
        let vegan = banned_terms(&DietMode::Vegan);
        assert_eq!(&vegan[..VEGETARIAN.len()], VEGETARIAN);
        assert_eq!(vegan.len(), 9);
    }

    #[test]
    fn test_unrestricted_modes_ban_nothing() {
        assert!(banned_terms(&DietMode::None).is_empty());
        assert!(banned_terms(&DietMode::Other(String::new())).is_empty());
        assert!(banned_terms(&DietMode::Other("keto".into())).is_empty());
    }
}
