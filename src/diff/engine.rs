//! Structural comparator implementation.

use super::changes::{
    EndpointChangeComputer, ParameterChangeComputer, RequestBodyChangeComputer,
    ResponseChangeComputer,
};
pub use super::engine_config::EngineConfig;
use super::traits::ChangeComputer;
use crate::analysis::SeverityClassifier;
use crate::model::{ApiSpec, Change, Endpoint, EndpointKey};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rayon::prelude::*;

/// Structural diff engine for comparing two versions of an API.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    classifier: SeverityClassifier,
    config: EngineConfig,
    timestamp: Option<DateTime<Utc>>,
}

impl DiffEngine {
    /// Create a new diff engine with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure engine tuning.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Stamp every change with this instant instead of the current time.
    #[must_use]
    pub const fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at);
        self
    }

    /// Use a custom classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: SeverityClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Get the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compare two documents and return the classified change list.
    ///
    /// Output order: removed endpoints (old document order), added endpoints
    /// (new document order), then the sub-changes of every shared endpoint in
    /// old document order. Never fails; identical inputs yield an empty list.
    #[must_use]
    pub fn compare(&self, old: &ApiSpec, new: &ApiSpec) -> Vec<Change> {
        // Quick check: identical endpoint surfaces cannot differ
        if old.content_hash() == new.content_hash() {
            tracing::debug!("content hashes match, skipping comparison");
            return Vec::new();
        }

        let detected_at = self.timestamp.unwrap_or_else(Utc::now);
        let old_index = index_endpoints(&old.endpoints, "old");
        let new_index = index_endpoints(&new.endpoints, "new");

        let mut changes = Vec::new();

        for (key, endpoint) in &old_index {
            if !new_index.contains_key(key) {
                changes.push(EndpointChangeComputer::removed(endpoint));
            }
        }
        for (key, endpoint) in &new_index {
            if !old_index.contains_key(key) {
                changes.push(EndpointChangeComputer::added(endpoint));
            }
        }

        let shared: Vec<(&Endpoint, &Endpoint)> = old_index
            .iter()
            .filter_map(|(key, old_ep)| new_index.get(key).map(|new_ep| (*old_ep, *new_ep)))
            .collect();

        tracing::debug!(
            "comparing {} old / {} new endpoints ({} shared)",
            old_index.len(),
            new_index.len(),
            shared.len()
        );

        if self.config.should_parallelize(shared.len()) {
            let per_endpoint: Vec<Vec<Change>> = shared
                .par_iter()
                .map(|(old_ep, new_ep)| diff_endpoint(old_ep, new_ep))
                .collect();
            changes.extend(per_endpoint.into_iter().flatten());
        } else {
            for (old_ep, new_ep) in &shared {
                changes.extend(diff_endpoint(old_ep, new_ep));
            }
        }

        changes
            .into_iter()
            .map(|change| {
                let severity = self.classifier.classify(&change);
                change.with_severity(severity).with_detected_at(detected_at)
            })
            .collect()
    }
}

/// Index endpoints by identity key; later duplicates replace earlier ones in place.
fn index_endpoints<'a>(endpoints: &'a [Endpoint], side: &str) -> IndexMap<&'a EndpointKey, &'a Endpoint> {
    let mut index = IndexMap::with_capacity(endpoints.len());
    let mut collisions = 0usize;
    for endpoint in endpoints {
        if index.insert(&endpoint.key, endpoint).is_some() {
            collisions += 1;
        }
    }
    if collisions > 0 {
        tracing::debug!("{collisions} duplicate endpoint key(s) in {side} document, last definition wins");
    }
    index
}

/// Sub-changes of one endpoint present in both documents.
fn diff_endpoint(old: &Endpoint, new: &Endpoint) -> Vec<Change> {
    let key = &old.key;
    let mut changes = EndpointChangeComputer::new()
        .compute(key, old, new)
        .into_ordered();
    changes.extend(
        ParameterChangeComputer::new()
            .compute(key, &old.parameters, &new.parameters)
            .into_ordered(),
    );
    changes.extend(
        RequestBodyChangeComputer::new()
            .compute(key, &old.request_body, &new.request_body)
            .into_ordered(),
    );
    changes.extend(
        ResponseChangeComputer::new()
            .compute(key, &old.responses, &new.responses)
            .into_ordered(),
    );
    changes
}
