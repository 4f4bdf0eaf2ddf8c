//! Named session entities and their lifecycle

use crate::components::{Chains, Falling, Grid, Score};
use crate::ecs::{Coordinator, Entity, Result};

/// Handles of the singleton entities a play session is built around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub grid: Entity,
    pub falling: Entity,
    pub chains: Entity,
    pub score: Entity,
    /// Active pair entity, `None` between lock and the next spawn
    pub pair: Option<Entity>,
}

impl Session {
    /// Create every session entity with empty components
    pub fn create(ecs: &mut Coordinator) -> Result<Self> {
        let score = ecs.create_entity()?;
        ecs.add_component(score, Score::default())?;
        let (grid, falling, chains) = Self::create_board(ecs)?;
        Ok(Self {
            grid,
            falling,
            chains,
            score,
            pair: None,
        })
    }

    /// Grid, falling-set and chain-index entities
    pub(crate) fn create_board(ecs: &mut Coordinator) -> Result<(Entity, Entity, Entity)> {
        let grid = ecs.create_entity()?;
        ecs.add_component(grid, Grid::new())?;
        let falling = ecs.create_entity()?;
        ecs.add_component(falling, Falling::default())?;
        let chains = ecs.create_entity()?;
        ecs.add_component(chains, Chains::default())?;
        Ok((grid, falling, chains))
    }
}
