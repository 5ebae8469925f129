// ABOUTME: Core types and constants for the TransFit plan generation engine
// ABOUTME: Foundation crate with error handling, domain models, and planning constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

#![deny(unsafe_code)]

//! # TransFit Core
//!
//! Shared types for the TransFit plan generation engine. This crate changes
//! rarely and holds no behavior beyond parsing, display and small derived
//! accessors on the domain models.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and profile `ValidationError`
//! - **constants**: Recovery-phase boundaries, prescription clamps, variety limits
//! - **models**: Profile, Exercise, `SafetyContext`, and Plan structures

/// Unified error handling with standard error codes
pub mod errors;

/// Planning constants organized by domain
pub mod constants;

/// Domain models consumed and produced by the plan generator
pub mod models;
