//! Generation context
//!
//! Owns the static data, the tuning constants, the allocation tables built
//! from them and the per-run artifact state. Every selector borrows it;
//! only artifact creation and explicit rebuilds mutate it.

use tracing::debug;

use crate::alloc::AllocationTable;
use crate::object::{ArtifactId, ArtifactUpkeep, GameData, Season};
use crate::world::{ConfigError, GenConfig};

#[derive(Debug, Clone)]
pub struct GenerationContext {
    data: GameData,
    config: GenConfig,
    alloc: AllocationTable,
    upkeep: ArtifactUpkeep,
}

impl GenerationContext {
    /// Validate the configuration and build the allocation tables
    pub fn new(data: GameData, config: GenConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let alloc = AllocationTable::build(&data, &config);
        let upkeep = ArtifactUpkeep::new(data.artifacts().len());
        Ok(Self {
            data,
            config,
            alloc,
            upkeep,
        })
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    pub fn alloc(&self) -> &AllocationTable {
        &self.alloc
    }

    pub fn upkeep(&self) -> &ArtifactUpkeep {
        &self.upkeep
    }

    /// Rebuild the allocation tables for a new season
    pub fn rebuild(&mut self, season: Season) {
        self.config.season = season;
        self.alloc = AllocationTable::build(&self.data, &self.config);
    }

    /// Swap in regenerated static data
    ///
    /// The tables are rebuilt. Artifact flags survive for indices that still
    /// exist; new artifacts start uncreated.
    pub fn replace_data(&mut self, data: GameData) {
        self.data = data;
        self.upkeep.resize(self.data.artifacts().len());
        self.alloc = AllocationTable::build(&self.data, &self.config);
    }

    /// Forget every created artifact (new character)
    pub fn reset_artifacts(&mut self) {
        debug!("resetting artifact creation flags");
        self.upkeep.reset();
    }

    /// Allow an artifact to be generated again
    pub fn uncreate_artifact(&mut self, id: ArtifactId) {
        self.upkeep.uncreate(id);
    }

    pub fn is_created(&self, id: ArtifactId) -> bool {
        self.upkeep.is_created(id)
    }

    pub(crate) fn mark_created(&mut self, id: ArtifactId) {
        self.upkeep.mark_created(id);
    }
}
