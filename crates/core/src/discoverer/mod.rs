//! Mod discovery orchestration.
//!
//! The discoverer drives the end-to-end pipeline:
//! 1. The synthetic bootstrap records (game, then runtime) are appended
//!    first, unconditionally.
//! 2. Every registered finder produces its candidates, in registration
//!    order, flattened into one sequence with no deduplication.
//! 3. Each candidate is extracted and parsed in sequence order, and the
//!    resulting record appended to the aggregate.
//!
//! Any failure aborts the run. Nothing is rolled back: records appended
//! before the failure stay visible to callers that inspect state afterwards.

pub mod builtin;
pub mod extract;
pub mod finders;

use crate::error::{DiscoveryError, Result};
use crate::metadata;
use loadstone_api::ModMetadata;
use loadstone_plugin::{ClasspathAugmenter, GameVersionProvider, ModFinder, RuntimeInfo};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Lifecycle of a discoverer instance. A run happens at most once; both
/// terminal states reject further runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryState {
    Idle,
    Completed,
    Failed,
}

/// Owns the finder set and the aggregate mod collection.
///
/// One instance per process start, owned by whoever bootstraps the loader
/// and handed by reference to consumers. The aggregate is append-only while
/// `discover` runs and read-only afterwards.
pub struct ModDiscoverer {
    finders: Vec<Box<dyn ModFinder>>,
    augmenter: Arc<dyn ClasspathAugmenter>,
    game: Arc<dyn GameVersionProvider>,
    runtime: Arc<dyn RuntimeInfo>,
    mods: Vec<ModMetadata>,
    state: DiscoveryState,
}

impl ModDiscoverer {
    pub fn new(
        augmenter: Arc<dyn ClasspathAugmenter>,
        game: Arc<dyn GameVersionProvider>,
        runtime: Arc<dyn RuntimeInfo>,
    ) -> Self {
        Self {
            finders: Vec::new(),
            augmenter,
            game,
            runtime,
            mods: Vec::new(),
            state: DiscoveryState::Idle,
        }
    }

    /// Register a finder. Consuming the receiver keeps registration strictly
    /// before the run.
    pub fn add_finder(mut self, finder: Box<dyn ModFinder>) -> Self {
        self.finders.push(finder);
        self
    }

    /// Register multiple finders
    pub fn with_finders(
        mut self,
        finders: impl IntoIterator<Item = Box<dyn ModFinder>>,
    ) -> Self {
        self.finders.extend(finders);
        self
    }

    /// Run discovery once.
    ///
    /// Re-invocation returns [`DiscoveryError::AlreadyDiscovered`] whether
    /// the first run completed or failed; bootstrap records are never
    /// inserted twice.
    pub fn discover(&mut self) -> Result<()> {
        if self.state != DiscoveryState::Idle {
            return Err(DiscoveryError::AlreadyDiscovered);
        }
        let start = Instant::now();

        // Bootstrap records go in before any physical discovery so they are
        // present even when every finder comes up empty or the run aborts.
        self.mods.push(builtin::game_metadata(self.game.as_ref()));
        self.mods
            .push(builtin::runtime_metadata(self.runtime.as_ref()));

        match self.run_pipeline() {
            Ok(()) => {
                self.state = DiscoveryState::Completed;
                info!(
                    "discovered {} mods in {:?}",
                    self.mods.len(),
                    start.elapsed()
                );
                Ok(())
            }
            Err(e) => {
                self.state = DiscoveryState::Failed;
                Err(e)
            }
        }
    }

    fn run_pipeline(&mut self) -> Result<()> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        for finder in &self.finders {
            let found = finder.find().map_err(DiscoveryError::from)?;
            debug!("finder {} produced {} candidates", finder.name(), found.len());
            candidates.extend(found);
        }

        for candidate in candidates {
            let Some(raw) = extract::extract_descriptor(&candidate, self.augmenter.as_ref())?
            else {
                debug!("skipping candidate {}", candidate.display());
                continue;
            };
            self.mods.push(metadata::parse(&raw)?);
        }
        Ok(())
    }

    /// The discovered aggregate: bootstrap records first, then candidates in
    /// discovery order.
    pub fn mods(&self) -> &[ModMetadata] {
        &self.mods
    }

    pub fn state(&self) -> DiscoveryState {
        self.state
    }
}
