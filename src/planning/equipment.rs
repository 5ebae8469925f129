// ABOUTME: Canonical equipment tokens and raw label normalization
// ABOUTME: Maps catalog and user equipment labels like "dumbbells" onto shared tokens like "db"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! Equipment normalization.
//!
//! Catalog rows and user selections use free-form labels. Both sides are
//! normalized to the canonical tokens below before matching.

use std::collections::BTreeSet;

/// Bodyweight, i.e. no equipment
pub const BODYWEIGHT: &str = "bodyweight";

/// Every canonical token
pub const CANONICAL_TOKENS: [&str; 12] = [
    BODYWEIGHT,
    "db",
    "kb",
    "barbell",
    "band",
    "bench",
    "step",
    "cable",
    "machine",
    "bike",
    "treadmill",
    "sled",
];

/// Keyword to token table; first match wins
const KEYWORDS: [(&str, &str); 17] = [
    ("dumbbell", "db"),
    ("kettlebell", "kb"),
    ("barbell", "barbell"),
    ("smith", "barbell"),
    ("trap bar", "barbell"),
    ("ez bar", "barbell"),
    ("band", "band"),
    ("bench", "bench"),
    ("step", "step"),
    ("box", "step"),
    ("cable", "cable"),
    ("machine", "machine"),
    ("leverage", "machine"),
    ("bike", "bike"),
    ("ergometer", "bike"),
    ("tread", "treadmill"),
    ("sled", "sled"),
];

/// Small accessories that count as bodyweight work
const ACCESSORIES: [&str; 8] = [
    "none",
    "assisted",
    "roller",
    "rope",
    "medicine ball",
    "bosu ball",
    "hammer",
    "wheel roller",
];

/// Canonical token for a raw label; unknown labels normalize to themselves
#[must_use]
pub fn canonical_token(label: &str) -> String {
    let normalized = label.trim().to_lowercase();
    if normalized.is_empty()
        || matches!(normalized.as_str(), "body weight" | "bodyweight" | "body_weight")
        || ACCESSORIES.contains(&normalized.as_str())
    {
        return BODYWEIGHT.to_owned();
    }
    if CANONICAL_TOKENS.contains(&normalized.as_str()) {
        return normalized;
    }
    KEYWORDS
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map_or(normalized, |(_, token)| (*token).to_owned())
}

/// Canonical token set for a list of labels
#[must_use]
pub fn canonical_set<S: AsRef<str>>(labels: &[S]) -> BTreeSet<String> {
    labels.iter().map(|l| canonical_token(l.as_ref())).collect()
}

/// True when the labels require nothing beyond bodyweight
#[must_use]
pub fn is_bodyweight_only<S: AsRef<str>>(labels: &[S]) -> bool {
    labels
        .iter()
        .all(|l| canonical_token(l.as_ref()) == BODYWEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_normalize() {
        assert_eq!(canonical_token("Dumbbells"), "db");
        assert_eq!(canonical_token("  Resistance Band "), "band");
        assert_eq!(canonical_token("Smith Machine"), "barbell");
        assert_eq!(canonical_token("plyo box"), "step");
        assert_eq!(canonical_token("Body Weight"), BODYWEIGHT);
        assert_eq!(canonical_token("medicine ball"), BODYWEIGHT);
        assert_eq!(canonical_token("Rowing Sled"), "sled");
        assert_eq!(canonical_token("TRX"), "trx");
    }

    #[test]
    fn test_bodyweight_only() {
        assert!(is_bodyweight_only::<&str>(&[]));
        assert!(!is_bodyweight_only(&["bodyweight", "mat"]));
        assert!(is_bodyweight_only(&["Body Weight"]));
    }
}
