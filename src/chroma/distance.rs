//! Distance function resolution

use super::models::DistanceFunction;
use crate::error::{BindingError, Result};

/// Resolve a distance function identifier (`l2`, `ip`, `cosine`).
///
/// Unknown identifiers are an error; `DistanceFunction::default()` (L2) is
/// never substituted for them.
pub fn resolve_distance_function(identifier: &str) -> Result<DistanceFunction> {
    identifier
        .parse::<DistanceFunction>()
        .map_err(|_| BindingError::Validation("invalid distance function".to_string()))
}
