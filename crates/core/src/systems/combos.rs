//! Chain detection, filtering and clearing

use arrayvec::ArrayVec;
use tracing::debug;

use crate::components::{
    BelongingChain, BlobState, ChainId, Chains, Color, Falling, Grid, Score, State, Transform,
};
use crate::ecs::{Coordinator, Entity, Result};
use crate::types::{IPoint, CHAIN_SCORE_STEP, GRID_HEIGHT, GRID_WIDTH, MIN_CHAIN_LEN};

fn neighbours(p: IPoint) -> ArrayVec<IPoint, 4> {
    let mut out = ArrayVec::new();
    if p.x > 0 {
        out.push(IPoint::new(p.x - 1, p.y));
    }
    if p.x < GRID_WIDTH as i32 - 1 {
        out.push(IPoint::new(p.x + 1, p.y));
    }
    if p.y > 0 {
        out.push(IPoint::new(p.x, p.y - 1));
    }
    if p.y < GRID_HEIGHT as i32 - 1 {
        out.push(IPoint::new(p.x, p.y + 1));
    }
    out
}

fn chain_of(ecs: &Coordinator, blob: Entity) -> Result<Option<ChainId>> {
    Ok(ecs.get::<BelongingChain>(blob)?.chain)
}

fn set_chain(ecs: &mut Coordinator, blob: Entity, chain: Option<ChainId>) -> Result<()> {
    ecs.get_mut::<BelongingChain>(blob)?.chain = chain;
    Ok(())
}

/// Put two same-colored neighbours into one chain
fn merge(ecs: &mut Coordinator, chains: Entity, a: Entity, b: Entity) -> Result<()> {
    match (chain_of(ecs, a)?, chain_of(ecs, b)?) {
        (None, None) => {
            let id = ecs.get_mut::<Chains>(chains)?.create(vec![a, b]);
            set_chain(ecs, a, Some(id))?;
            set_chain(ecs, b, Some(id))?;
        }
        (Some(id), None) => {
            ecs.get_mut::<Chains>(chains)?.push(id, b)?;
            set_chain(ecs, b, Some(id))?;
        }
        (None, Some(id)) => {
            ecs.get_mut::<Chains>(chains)?.push(id, a)?;
            set_chain(ecs, a, Some(id))?;
        }
        (Some(x), Some(y)) if x == y => {}
        (Some(x), Some(y)) => {
            let moved = ecs.get_mut::<Chains>(chains)?.absorb(x, y)?;
            for blob in moved {
                set_chain(ecs, blob, Some(x))?;
            }
        }
    }
    Ok(())
}

/// Group every connected same-color region of the grid into chains
pub fn find_combos(ecs: &mut Coordinator, grid: Entity, chains: Entity) -> Result<()> {
    let cells = ecs.get::<Grid>(grid)?.clone();

    for (p, blob) in cells.occupied() {
        let color = ecs.get::<Color>(blob)?.0;
        for n in neighbours(p) {
            let Some(adj) = cells.occupant(n) else {
                continue;
            };
            if ecs.get::<Color>(adj)?.0 == color {
                merge(ecs, chains, blob, adj)?;
            }
        }
    }
    Ok(())
}

/// Drop chains shorter than the minimum length; returns whether any chain is left
pub fn filter_chains(ecs: &mut Coordinator, chains: Entity) -> Result<bool> {
    let index = ecs.get_mut::<Chains>(chains)?;
    let short: Vec<ChainId> = index
        .iter()
        .filter(|(_, members)| members.len() < MIN_CHAIN_LEN)
        .map(|(id, _)| id)
        .collect();

    let mut released = Vec::new();
    for id in short {
        released.extend(index.remove(id)?);
    }
    let remaining = !index.is_empty();

    for blob in released {
        set_chain(ecs, blob, None)?;
    }
    Ok(remaining)
}

/// Clear every chain, award its score and hand the blobs above to the falling set.
///
/// Chains are scored in creation order: `members × multiplier`, the multiplier
/// starting at 10 and growing by 10 per chain. Returns the points awarded.
pub fn clear_chains(
    ecs: &mut Coordinator,
    grid: Entity,
    falling: Entity,
    chains: Entity,
    score: Entity,
) -> Result<u32> {
    let cleared = ecs.get_mut::<Chains>(chains)?.take_all();
    let mut multiplier = CHAIN_SCORE_STEP;
    let mut points = 0;

    for (id, members) in cleared {
        let gained = members.len() as u32 * multiplier;
        debug!(chain = id.get(), size = members.len(), gained, "clearing chain");
        points += gained;
        multiplier += CHAIN_SCORE_STEP;

        for blob in members {
            let cell = ecs.get::<Transform>(blob)?.grid;
            release_column_above(ecs, grid, falling, cell)?;
            ecs.get_mut::<Grid>(grid)?.clear(cell);
            ecs.destroy_entity(blob)?;
        }
    }

    ecs.get_mut::<Score>(score)?.0 += points;
    Ok(points)
}

/// Mark the contiguous unchained stack above `cell` as dropping
fn release_column_above(
    ecs: &mut Coordinator,
    grid: Entity,
    falling: Entity,
    cell: IPoint,
) -> Result<()> {
    let mut p = IPoint::new(cell.x, cell.y - 1);
    loop {
        let Some(above) = ecs.get::<Grid>(grid)?.occupant(p) else {
            break;
        };
        if chain_of(ecs, above)?.is_some() {
            break;
        }
        ecs.get_mut::<State>(above)?.0 = BlobState::Dropping;
        ecs.get_mut::<Falling>(falling)?.insert(above);
        p.y -= 1;
    }
    Ok(())
}

/// Empty the falling set once every member has settled
pub fn clear_falling(ecs: &mut Coordinator, falling: Entity) -> Result<()> {
    ecs.get_mut::<Falling>(falling)?.members.clear();
    Ok(())
}
