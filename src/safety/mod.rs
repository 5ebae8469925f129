// ABOUTME: Safety rules evaluation producing the SafetyContext consumed by plan generation
// ABOUTME: Re-exports the default rules engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

/// Built-in binding, HRT, and post-operative rules
pub mod rules_engine;

pub use rules_engine::DefaultSafetyRulesEngine;
