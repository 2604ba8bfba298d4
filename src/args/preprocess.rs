//! Token preprocessor — layout adjustment before anything else looks at the tokens.

use crate::layout::LayoutAdjuster;

/// Rewrite every token through the adjuster.
///
/// Runs before flag extraction so an adjusted token can become a flag.
pub fn adjust_tokens(tokens: &[String], adjuster: &dyn LayoutAdjuster) -> Vec<String> {
    tokens
        .iter()
        .map(|token| {
            let adjusted = adjuster.adjust(token);
            if adjusted != *token {
                tracing::trace!(from = %token, to = %adjusted, adjuster = adjuster.name(), "adjusted token");
            }
            adjusted
        })
        .collect()
}
