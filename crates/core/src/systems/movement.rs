//! Gravity for the active pair and for the falling set

use super::row_of;
use crate::components::{BlobState, Falling, Grid, Pair, State, Transform, Velocity};
use crate::ecs::{Coordinator, Entity, Result};
use crate::types::{IPoint, Shape, Y_INTERVAL};

fn below(p: IPoint) -> IPoint {
    IPoint::new(p.x, p.y + 1)
}

/// Advance the active pair by `dt` seconds.
///
/// Returns true while the pair is still falling and false once it is locked.
/// A locked pair keeps its grid cells and its last pixel position.
pub fn try_move_pair(ecs: &mut Coordinator, grid: Entity, pair: Entity, dt: f32) -> Result<bool> {
    let Pair { center, other } = *ecs.get::<Pair>(pair)?;
    let mut tc = *ecs.get::<Transform>(center)?;
    let mut to = *ecs.get::<Transform>(other)?;
    let yc = tc.position.y + dt * ecs.get::<Velocity>(center)?.speed;
    let yo = to.position.y + dt * ecs.get::<Velocity>(other)?.speed;

    // Both pieces share a speed, so they cross together; rounding can make one
    // land a hair early.
    let crossing = row_of(yc) > tc.grid.y || row_of(yo) > to.grid.y;
    if !crossing {
        ecs.get_mut::<Transform>(center)?.position.y = yc;
        ecs.get_mut::<Transform>(other)?.position.y = yo;
        return Ok(true);
    }

    let (dc, d_o) = (below(tc.grid), below(to.grid));
    let cells = ecs.get_mut::<Grid>(grid)?;
    let legal = match Shape::from_positions((tc.grid.x, tc.grid.y), (to.grid.x, to.grid.y)) {
        // `other` steps into the cell `center` vacates.
        Shape::Up => cells.is_free(dc),
        Shape::Down => cells.is_free(d_o),
        Shape::Left | Shape::Right => cells.is_free(dc) && cells.is_free(d_o),
    };
    if !legal {
        return Ok(false);
    }

    cells.clear(tc.grid);
    cells.clear(to.grid);
    cells.set(dc, center);
    cells.set(d_o, other);

    tc.grid = dc;
    tc.position.y = yc;
    to.grid = d_o;
    to.position.y = yo;
    *ecs.get_mut::<Transform>(center)? = tc;
    *ecs.get_mut::<Transform>(other)? = to;
    Ok(true)
}

/// Advance every dropping member of the falling set by `dt` seconds.
///
/// A piece comes to rest on the floor or on a placed blob; a piece above a
/// still-dropping blob waits. Returns whether any piece is still dropping.
pub fn fall_pieces(ecs: &mut Coordinator, grid: Entity, falling: Entity, dt: f32) -> Result<bool> {
    let members = ecs.get::<Falling>(falling)?.members.clone();
    let mut active = false;

    for blob in members {
        if ecs.get::<State>(blob)?.0 == BlobState::Placed {
            continue;
        }
        let mut t = *ecs.get::<Transform>(blob)?;
        let y = t.position.y + dt * ecs.get::<Velocity>(blob)?.speed;

        if row_of(y) <= t.grid.y {
            ecs.get_mut::<Transform>(blob)?.position.y = y;
            active = true;
            continue;
        }

        let dest = below(t.grid);
        let occupant = ecs.get::<Grid>(grid)?.occupant(dest);
        let rests = if !Grid::in_bounds(dest) {
            true
        } else if let Some(under) = occupant {
            ecs.get::<State>(under)?.0 == BlobState::Placed
        } else {
            false
        };

        if rests {
            ecs.get_mut::<State>(blob)?.0 = BlobState::Placed;
            ecs.get_mut::<Transform>(blob)?.position.y = (t.grid.y * Y_INTERVAL) as f32;
        } else if occupant.is_some() {
            // Waiting on a dropping blob below.
            active = true;
        } else {
            let cells = ecs.get_mut::<Grid>(grid)?;
            cells.clear(t.grid);
            cells.set(dest, blob);
            t.grid = dest;
            t.position.y = y;
            *ecs.get_mut::<Transform>(blob)? = t;
            active = true;
        }
    }
    Ok(active)
}
