//! Whitespace token estimate for the usage block.

use crate::types::EmbeddingInput;

/// Estimate prompt tokens by counting whitespace-separated words.
///
/// The backend reports no usage, so this crude count stands in for it and is
/// kept stable for callers that already depend on the numbers.
pub fn estimate_tokens(input: Option<&EmbeddingInput>) -> u32 {
    let Some(input) = input else {
        return 0;
    };

    let count: usize = input
        .texts()
        .iter()
        .map(|text| text.split_whitespace().count())
        .sum();

    u32::try_from(count).unwrap_or(u32::MAX)
}
