//! Write-once document cache.
//!
//! An optional optimization keyed by (session, template, options).
//! Entries are computed fully, then published; a published entry is
//! never replaced, so a reader can never observe a partial document.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::document::{GenerationOptions, TemplateId};
use crate::domain::foundation::SessionId;

use super::GenerateDocumentResponse;

/// Cache key: one session's document under one template and option set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub session_id: SessionId,
    pub template: TemplateId,
    pub options: GenerationOptions,
}

/// In-memory write-once cache of generated documents.
#[derive(Debug, Default)]
pub struct DocumentCache {
    entries: RwLock<HashMap<CacheKey, Arc<GenerateDocumentResponse>>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the published document for a key, if any.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<GenerateDocumentResponse>> {
        let entries = match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.get(key).cloned()
    }

    /// Publishes a fully computed document.
    ///
    /// If another computation already published under this key, the
    /// existing entry wins and is returned unchanged.
    pub fn publish(
        &self,
        key: CacheKey,
        response: GenerateDocumentResponse,
    ) -> Arc<GenerateDocumentResponse> {
        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries
            .entry(key)
            .or_insert_with(|| Arc::new(response))
            .clone()
    }

    /// Number of published entries.
    pub fn len(&self) -> usize {
        let entries = match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::GenerationMetadata;
    use crate::domain::foundation::Timestamp;
    use uuid::Uuid;

    fn key(session: &str) -> CacheKey {
        CacheKey {
            session_id: SessionId::try_new(session).unwrap(),
            template: TemplateId::Standard,
            options: GenerationOptions::default(),
        }
    }

    fn response(markdown: &str) -> GenerateDocumentResponse {
        GenerateDocumentResponse {
            success: true,
            values_markdown: markdown.to_string(),
            metadata: GenerationMetadata {
                generation_id: Uuid::new_v4(),
                primary_motifs: vec![],
                response_count: 1,
                generated_at: Timestamp::from_unix_secs(0),
                template: TemplateId::Standard,
                options: GenerationOptions::default(),
            },
        }
    }

    #[test]
    fn get_on_empty_cache_misses() {
        let cache = DocumentCache::new();
        assert!(cache.get(&key("s1")).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn publish_then_get_round_trips() {
        let cache = DocumentCache::new();
        cache.publish(key("s1"), response("# doc"));
        let hit = cache.get(&key("s1")).unwrap();
        assert_eq!(hit.values_markdown, "# doc");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn entries_are_write_once() {
        let cache = DocumentCache::new();
        cache.publish(key("s1"), response("first"));
        let kept = cache.publish(key("s1"), response("second"));
        assert_eq!(kept.values_markdown, "first");
        assert_eq!(cache.get(&key("s1")).unwrap().values_markdown, "first");
    }

    #[test]
    fn distinct_templates_are_distinct_entries() {
        let cache = DocumentCache::new();
        cache.publish(key("s1"), response("standard"));
        let mut minimal_key = key("s1");
        minimal_key.template = TemplateId::Minimal;
        cache.publish(minimal_key.clone(), response("minimal"));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&minimal_key).unwrap().values_markdown, "minimal");
    }
}
