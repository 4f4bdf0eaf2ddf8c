//! Session reset

use tracing::info;

use crate::components::{Falling, Grid, Pair, Score};
use crate::ecs::{Coordinator, Entity, Result};
use crate::session::Session;

fn destroy_if_alive(ecs: &mut Coordinator, entity: Entity) -> Result<()> {
    if ecs.is_alive(entity) {
        ecs.destroy_entity(entity)?;
    }
    Ok(())
}

/// Destroy every blob, the active pair and the board entities, zero the score
/// and recreate an empty board
pub fn reset(ecs: &mut Coordinator, session: &mut Session) -> Result<()> {
    // Collected first; destroying while walking the grid would alias it.
    let mut doomed: Vec<Entity> = ecs
        .get::<Grid>(session.grid)?
        .occupied()
        .map(|(_, e)| e)
        .collect();
    doomed.extend_from_slice(&ecs.get::<Falling>(session.falling)?.members);
    if let Some(pair) = session.pair.take() {
        let Pair { center, other } = *ecs.get::<Pair>(pair)?;
        doomed.extend([center, other, pair]);
    }
    let blobs = doomed.len();

    for entity in doomed {
        destroy_if_alive(ecs, entity)?;
    }
    ecs.destroy_entity(session.grid)?;
    ecs.destroy_entity(session.falling)?;
    ecs.destroy_entity(session.chains)?;

    let (grid, falling, chains) = Session::create_board(ecs)?;
    session.grid = grid;
    session.falling = falling;
    session.chains = chains;
    ecs.get_mut::<Score>(session.score)?.0 = 0;

    info!(destroyed = blobs, live = ecs.live_count(), "session reset");
    Ok(())
}
