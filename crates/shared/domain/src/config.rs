use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level application configuration shared across the pipeline.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub generation: GenerationConfig,
    pub report: ReportConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Knobs for the contact and deal generators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of contacts to generate.
    pub contacts: u32,
    /// Number of deals to generate.
    pub deals: u32,
    /// Upper bound of the synthetic contact index range deals may reference.
    ///
    /// Deliberately independent of `contacts`: a span larger than the contact
    /// count produces dangling references, exercising the synchronizer's
    /// absence-handling path.
    pub reference_span: u32,
    /// Probability in [0, 1] that a deal references no contact at all.
    pub unlinked_ratio: f64,
    /// Fixed seed for reproducible runs. `None` draws a fresh entropy seed.
    pub seed: Option<u64>,
}

/// Report output knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// How many enriched deals the stdout report prints.
    pub sample: usize,
}

// --- Default ---

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { contacts: 100, deals: 100, reference_span: 120, unlinked_ratio: 0.1, seed: None }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { sample: 5 }
    }
}
