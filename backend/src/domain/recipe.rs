//! Recipes, their difficulty levels, and the drafts used to create them.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{IngredientId, RecipeId, UserId};

/// Raised when a difficulty label is not one of `easy`, `medium`, or `hard`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("difficulty must be one of easy, medium, hard (got {value:?})")]
pub struct DifficultyParseError {
    value: String,
}

/// How demanding a recipe is to cook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Quick, beginner friendly.
    Easy,
    /// Some technique required.
    Medium,
    /// Demanding.
    Hard,
}

impl Difficulty {
    /// Every difficulty in declaration order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Lowercase label used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| DifficultyParseError {
                value: s.to_owned(),
            })
    }
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    /// Canonical ingredient referenced by this line.
    pub ingredient_id: IngredientId,
    /// Amount, in `unit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit of measure such as `grams`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Recipe entity as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Stable identifier.
    pub id: RecipeId,
    /// Non-empty title.
    pub title: String,
    /// Optional summary shown in listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered method steps; never empty.
    pub steps: Vec<String>,
    /// Preparation time in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<u32>,
    /// Declared difficulty.
    pub difficulty: Difficulty,
    /// User who published the recipe and may change it.
    #[serde(rename = "userId")]
    pub owner: UserId,
    /// Ingredient lines in authoring order.
    pub ingredients: Vec<RecipeIngredient>,
    /// When the recipe was first stored.
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Distinct ingredient identities referenced by this recipe.
    #[must_use]
    pub fn ingredient_ids(&self) -> HashSet<IngredientId> {
        self.ingredients
            .iter()
            .map(|entry| entry.ingredient_id)
            .collect()
    }

    /// Whether any ingredient line references one of `ids`.
    #[must_use]
    pub fn uses_any<S>(&self, ids: &HashSet<IngredientId, S>) -> bool
    where
        S: std::hash::BuildHasher,
    {
        self.ingredients
            .iter()
            .any(|entry| ids.contains(&entry.ingredient_id))
    }

    /// Case-insensitive substring match on title or description.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(needle))
    }
}

/// Ingredient line of a draft, naming the ingredient in free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientInput {
    /// Free-text ingredient name, resolved canonically.
    pub name: String,
    /// Amount, in `unit`.
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Unit of measure.
    #[serde(default)]
    pub unit: Option<String>,
}

/// Unvalidated recipe payload supplied on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    /// Title; must not be blank.
    pub title: String,
    /// Optional summary.
    #[serde(default)]
    pub description: Option<String>,
    /// Method steps; at least one non-blank step is required.
    #[serde(default)]
    pub steps: Vec<String>,
    /// Preparation time in minutes.
    #[serde(default)]
    pub preparation_time: Option<u32>,
    /// Difficulty name, parsed case-insensitively.
    pub difficulty: String,
    /// Ingredient lines naming ingredients in free text.
    #[serde(default)]
    pub ingredients: Vec<IngredientInput>,
}

/// Validation errors raised by [`RecipeDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeValidationError {
    /// Title was empty once trimmed.
    #[error("title must not be empty")]
    EmptyTitle,
    /// No non-blank step was supplied.
    #[error("at least one step is required")]
    MissingSteps,
    /// Difficulty did not parse.
    #[error(transparent)]
    InvalidDifficulty(#[from] DifficultyParseError),
    /// An ingredient line had a blank name.
    #[error("ingredient {position} must have a name")]
    EmptyIngredientName {
        /// Zero-based index of the offending line.
        position: usize,
    },
    /// An ingredient quantity was negative or not finite.
    #[error("ingredient {position} quantity must be a non-negative number")]
    InvalidQuantity {
        /// Zero-based index of the offending line.
        position: usize,
    },
}

impl RecipeValidationError {
    /// Draft field the error refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::MissingSteps => "steps",
            Self::InvalidDifficulty(_) => "difficulty",
            Self::EmptyIngredientName { .. } | Self::InvalidQuantity { .. } => "ingredients",
        }
    }
}

/// Draft whose fields have passed validation. Ingredient names are still
/// free text; they are resolved to identities just before persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRecipeDraft {
    /// Trimmed, non-empty title.
    pub title: String,
    /// Optional summary.
    pub description: Option<String>,
    /// Non-empty list of trimmed steps.
    pub steps: Vec<String>,
    /// Preparation time in minutes.
    pub preparation_time: Option<u32>,
    /// Parsed difficulty.
    pub difficulty: Difficulty,
    /// Ingredient lines still to be resolved.
    pub ingredients: Vec<IngredientInput>,
}

impl RecipeDraft {
    /// Check required fields and normalise whitespace.
    ///
    /// Blank steps are dropped; a blank description becomes `None`.
    pub fn validate(self) -> Result<ValidRecipeDraft, RecipeValidationError> {
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(RecipeValidationError::EmptyTitle);
        }
        let steps: Vec<String> = self
            .steps
            .into_iter()
            .map(|step| step.trim().to_owned())
            .filter(|step| !step.is_empty())
            .collect();
        if steps.is_empty() {
            return Err(RecipeValidationError::MissingSteps);
        }
        let difficulty = self.difficulty.parse::<Difficulty>()?;
        for (position, ingredient) in self.ingredients.iter().enumerate() {
            if ingredient.name.trim().is_empty() {
                return Err(RecipeValidationError::EmptyIngredientName { position });
            }
            if ingredient
                .quantity
                .is_some_and(|quantity| !quantity.is_finite() || quantity < 0.0)
            {
                return Err(RecipeValidationError::InvalidQuantity { position });
            }
        }
        let description = self
            .description
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty());

        Ok(ValidRecipeDraft {
            title,
            description,
            steps,
            preparation_time: self.preparation_time,
            difficulty,
            ingredients: self.ingredients,
        })
    }
}

#[cfg(test)]
#[path = "recipe_tests.rs"]
mod tests;
