//! Endpoint path builders for the Gemini embeddings API.

/// Method suffix for single-text embedding.
pub const EMBED_CONTENT: &str = "embedContent";

/// Method suffix for batch embedding.
pub const BATCH_EMBED_CONTENTS: &str = "batchEmbedContents";

/// Constructs the path for the embedContent endpoint.
///
/// `model` is the full resource name, e.g. `models/text-embedding-004`.
///
/// ```
/// use integrations_embedding_adapter::transport::endpoints;
///
/// let path = endpoints::embed_content("models/text-embedding-004");
/// assert_eq!(path, "models/text-embedding-004:embedContent");
/// ```
pub fn embed_content(model: &str) -> String {
    format!("{}:{}", model, EMBED_CONTENT)
}

/// Constructs the path for the batchEmbedContents endpoint.
///
/// ```
/// use integrations_embedding_adapter::transport::endpoints;
///
/// let path = endpoints::batch_embed_contents("models/text-embedding-004");
/// assert_eq!(path, "models/text-embedding-004:batchEmbedContents");
/// ```
pub fn batch_embed_contents(model: &str) -> String {
    format!("{}:{}", model, BATCH_EMBED_CONTENTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_content_path() {
        assert_eq!(
            embed_content("models/text-embedding-004"),
            "models/text-embedding-004:embedContent"
        );
    }

    #[test]
    fn test_batch_embed_contents_path() {
        assert_eq!(
            batch_embed_contents("models/text-embedding-004"),
            "models/text-embedding-004:batchEmbedContents"
        );
    }
}
