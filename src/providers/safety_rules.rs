// ABOUTME: Safety rules engine port evaluated once per plan generation
// ABOUTME: Includes a static implementation returning a fixed, externally supplied context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, SafetyContext};
use crate::planning::ProfileSnapshot;

/// Evaluates safety rules for a profile
#[async_trait]
pub trait SafetyRulesEngine: Send + Sync {
    /// Applied rules, exclusions, and parameter overrides for a profile.
    ///
    /// `catalog` is the catalog fetched for this generation; exclusions
    /// should be drawn from it rather than from a second fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if rule evaluation fails; the plan generator then
    /// continues with an empty context
    async fn evaluate(
        &self,
        snapshot: &ProfileSnapshot<'_>,
        catalog: &[Exercise],
    ) -> AppResult<SafetyContext>;
}

/// Returns the same context for every profile
#[derive(Debug, Clone, Default)]
pub struct StaticSafetyRules {
    context: SafetyContext,
}

impl StaticSafetyRules {
    /// Engine returning `context`
    #[must_use]
    pub const fn new(context: SafetyContext) -> Self {
        Self { context }
    }

    /// Load the context from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid context
    pub async fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("Failed to read safety context {}", path.display()))
                .with_source(e)
        })?;
        let context = serde_json::from_str(&raw).map_err(|e| {
            AppError::invalid_input(format!("Invalid safety context {}: {e}", path.display()))
        })?;
        Ok(Self::new(context))
    }
}

#[async_trait]
impl SafetyRulesEngine for StaticSafetyRules {
    async fn evaluate(
        &self,
        _snapshot: &ProfileSnapshot<'_>,
        _catalog: &[Exercise],
    ) -> AppResult<SafetyContext> {
        Ok(self.context.clone())
    }
}
