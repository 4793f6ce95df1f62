//! Persona Store
//!
//! Append-only in-memory storage for campaign personas with an id index.
//! Listing is newest-first; nothing is ever deleted or mutated, so the
//! store only grows for the lifetime of the process.

use std::collections::HashMap;
use tokio::sync::RwLock;

use super::model::CampaignPersona;

/// One page of personas plus the slice bookkeeping the API reports.
#[derive(Debug, Clone)]
pub struct PersonaPage {
    pub items: Vec<CampaignPersona>,
    pub total: usize,
    pub has_more: bool,
}

#[derive(Default)]
struct Inner {
    // Arrival order; listing iterates in reverse for newest-first.
    entries: Vec<CampaignPersona>,
    index: HashMap<String, usize>,
}

/// Shared, append-only persona storage.
#[derive(Default)]
pub struct PersonaStore {
    inner: RwLock<Inner>,
}

impl PersonaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a persona; it becomes the newest record.
    pub async fn insert(&self, persona: CampaignPersona) {
        let mut inner = self.inner.write().await;
        let position = inner.entries.len();
        inner.index.insert(persona.id.clone(), position);
        inner.entries.push(persona);
    }

    pub async fn get(&self, id: &str) -> Option<CampaignPersona> {
        let inner = self.inner.read().await;
        inner
            .index
            .get(id)
            .and_then(|&position| inner.entries.get(position))
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Newest-first page. `freeze` pins the window to the newest records
    /// regardless of the requested page, for a stable demo dataset.
    pub async fn page(&self, page: usize, limit: usize, freeze: bool) -> PersonaPage {
        let inner = self.inner.read().await;
        let total = inner.entries.len();
        let start = if freeze {
            0
        } else {
            page.saturating_sub(1).saturating_mul(limit)
        };
        let end = start.saturating_add(limit);

        let items: Vec<CampaignPersona> = inner
            .entries
            .iter()
            .rev()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();

        PersonaPage {
            items,
            total,
            has_more: end < total,
        }
    }

    /// Snapshot of every persona for aggregate computations.
    pub async fn snapshot(&self) -> Vec<CampaignPersona> {
        self.inner.read().await.entries.clone()
    }
}
