/// Ceiling applied to the validator's uncapped score before it is persisted.
pub const MAX_QUALITY_SCORE: u32 = 100;

/// Caps the validator score at 100. Status is NOT recomputed from the capped value.
pub fn cap_quality_score(score: u32) -> u32 {
    score.min(MAX_QUALITY_SCORE)
}

/// Confidence in [0.0, 1.0] derived from a capped score, rounded to 2 decimals.
pub fn ai_confidence(capped_score: u32) -> f64 {
    let ratio = f64::from(capped_score.min(MAX_QUALITY_SCORE)) / f64::from(MAX_QUALITY_SCORE);
    (ratio * 100.0).round() / 100.0
}
