// ABOUTME: Exercise catalog repository port with in-memory and JSON file implementations
// ABOUTME: The catalog is read once per plan generation and never mutated by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::Exercise;

/// Read access to the shared exercise catalog
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Every catalog exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or parsed
    async fn fetch_all(&self) -> AppResult<Vec<Exercise>>;
}

/// Catalog held in memory, cheap to clone
#[derive(Debug, Clone, Default)]
pub struct InMemoryExerciseRepository {
    exercises: Arc<Vec<Exercise>>,
}

impl InMemoryExerciseRepository {
    /// Wrap a catalog
    #[must_use]
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self {
            exercises: Arc::new(exercises),
        }
    }

    /// Number of exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryExerciseRepository {
    fn name(&self) -> &'static str {
        "in_memory"
    }

    async fn fetch_all(&self) -> AppResult<Vec<Exercise>> {
        Ok(self.exercises.as_ref().clone())
    }
}

/// Either a bare array or an object with an `exercises` array
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<Exercise>),
    Wrapped { exercises: Vec<Exercise> },
}

impl CatalogDocument {
    fn into_exercises(self) -> Vec<Exercise> {
        match self {
            Self::Bare(exercises) | Self::Wrapped { exercises } => exercises,
        }
    }
}

/// Catalog read from a JSON file on every fetch
#[derive(Debug, Clone)]
pub struct JsonFileExerciseRepository {
    path: PathBuf,
}

impl JsonFileExerciseRepository {
    /// Repository backed by `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ExerciseRepository for JsonFileExerciseRepository {
    fn name(&self) -> &'static str {
        "json_file"
    }

    async fn fetch_all(&self) -> AppResult<Vec<Exercise>> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to read exercise catalog {}",
                self.path.display()
            ))
            .with_source(e)
        })?;

        let document: CatalogDocument = serde_json::from_str(&raw).map_err(|e| {
            AppError::invalid_input(format!(
                "Invalid exercise catalog {}: {e}",
                self.path.display()
            ))
        })?;

        let exercises = document.into_exercises();
        debug!(
            path = %self.path.display(),
            count = exercises.len(),
            "loaded exercise catalog"
        );
        Ok(exercises)
    }
}
