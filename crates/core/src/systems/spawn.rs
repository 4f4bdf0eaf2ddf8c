//! Blob and pair creation, lose check and pair hand-off

use tracing::debug;

use crate::components::{
    BelongingChain, BlobState, Color, Drawable, Falling, Grid, Pair, State, Transform, Velocity,
};
use crate::ecs::{Coordinator, Entity, Result};
use crate::rng::ColorSource;
use crate::types::{BlobColor, IPoint, SPAWN_CENTER, SPAWN_OTHER};

/// Create a dropping blob aligned to `cell`. The grid is not touched.
pub fn spawn_blob(ecs: &mut Coordinator, color: BlobColor, cell: IPoint) -> Result<Entity> {
    let blob = ecs.create_entity()?;
    ecs.add_component(blob, Color(color))?;
    ecs.add_component(blob, State(BlobState::Dropping))?;
    ecs.add_component(blob, Transform::at_cell(cell))?;
    ecs.add_component(blob, Velocity::default())?;
    ecs.add_component(blob, Drawable::for_color(color))?;
    ecs.add_component(blob, BelongingChain::default())?;
    Ok(blob)
}

/// Create a placed blob and write it into the grid.
///
/// Returns `None` without creating anything when `cell` is out of bounds or
/// already occupied.
pub fn place_blob(
    ecs: &mut Coordinator,
    grid: Entity,
    color: BlobColor,
    cell: IPoint,
) -> Result<Option<Entity>> {
    if !ecs.get::<Grid>(grid)?.is_free(cell) {
        return Ok(None);
    }
    let blob = spawn_blob(ecs, color, cell)?;
    ecs.get_mut::<State>(blob)?.0 = BlobState::Placed;
    ecs.get_mut::<Grid>(grid)?.set(cell, blob);
    Ok(Some(blob))
}

/// Create a new pair entity with two randomly colored blobs at the spawn cells
pub fn spawn_pair(ecs: &mut Coordinator, colors: &mut ColorSource) -> Result<Entity> {
    let center_color = colors.next_color();
    let other_color = colors.next_color();
    let center = spawn_blob(ecs, center_color, SPAWN_CENTER.into())?;
    let other = spawn_blob(ecs, other_color, SPAWN_OTHER.into())?;

    let pair = ecs.create_entity()?;
    ecs.add_component(pair, Pair { center, other })?;
    debug!(
        center = center_color.as_str(),
        other = other_color.as_str(),
        "spawned pair"
    );
    Ok(pair)
}

/// Returns true when a spawn cell is already taken.
/// Otherwise writes both pair blobs into the grid.
pub fn check_lose(ecs: &mut Coordinator, grid: Entity, pair: Entity) -> Result<bool> {
    let Pair { center, other } = *ecs.get::<Pair>(pair)?;
    let center_cell = ecs.get::<Transform>(center)?.grid;
    let other_cell = ecs.get::<Transform>(other)?.grid;

    let grid = ecs.get_mut::<Grid>(grid)?;
    if !grid.is_free(center_cell) || !grid.is_free(other_cell) {
        return Ok(true);
    }
    grid.set(center_cell, center);
    grid.set(other_cell, other);
    Ok(false)
}

/// Hand both pair blobs to the falling set
pub fn add_falling_pair(ecs: &mut Coordinator, falling: Entity, pair: Entity) -> Result<()> {
    let Pair { center, other } = *ecs.get::<Pair>(pair)?;
    let falling = ecs.get_mut::<Falling>(falling)?;
    falling.insert(center);
    falling.insert(other);
    Ok(())
}

/// Destroy the pair entity; its blobs stay alive
pub fn destroy_pair(ecs: &mut Coordinator, pair: Entity) -> Result<()> {
    ecs.destroy_entity(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::register_all;
    use crate::session::Session;

    fn world() -> (Coordinator, Session) {
        let mut ecs = Coordinator::new();
        register_all(&mut ecs).unwrap();
        let session = Session::create(&mut ecs).unwrap();
        (ecs, session)
    }

    #[test]
    fn pair_spawns_vertical_at_the_top_left() {
        let (mut ecs, session) = world();
        let mut colors = ColorSource::new(3);
        let pair = spawn_pair(&mut ecs, &mut colors).unwrap();
        let Pair { center, other } = *ecs.get::<Pair>(pair).unwrap();

        assert_eq!(ecs.get::<Transform>(center).unwrap().grid, IPoint::new(0, 0));
        assert_eq!(ecs.get::<Transform>(other).unwrap().grid, IPoint::new(0, 1));
        assert_eq!(ecs.get::<State>(center).unwrap().0, BlobState::Dropping);
        assert!(ecs.get::<BelongingChain>(other).unwrap().chain.is_none());

        assert!(!check_lose(&mut ecs, session.grid, pair).unwrap());
        let grid = ecs.get::<Grid>(session.grid).unwrap();
        assert_eq!(grid.occupant(IPoint::new(0, 0)), Some(center));
        assert_eq!(grid.occupant(IPoint::new(0, 1)), Some(other));
    }

    #[test]
    fn blocked_spawn_cell_loses_without_writing() {
        let (mut ecs, session) = world();
        let blocker = place_blob(&mut ecs, session.grid, BlobColor::Red, IPoint::new(0, 1))
            .unwrap()
            .unwrap();

        let pair = spawn_pair(&mut ecs, &mut ColorSource::new(1)).unwrap();
        assert!(check_lose(&mut ecs, session.grid, pair).unwrap());

        let grid = ecs.get::<Grid>(session.grid).unwrap();
        assert!(grid.is_free(IPoint::new(0, 0)));
        assert_eq!(grid.occupant(IPoint::new(0, 1)), Some(blocker));
    }

    #[test]
    fn place_blob_rejects_taken_cells() {
        let (mut ecs, session) = world();
        let cell = IPoint::new(4, 15);
        assert!(place_blob(&mut ecs, session.grid, BlobColor::Blue, cell)
            .unwrap()
            .is_some());
        assert!(place_blob(&mut ecs, session.grid, BlobColor::Blue, cell)
            .unwrap()
            .is_none());
        assert!(place_blob(&mut ecs, session.grid, BlobColor::Blue, IPoint::new(9, 0))
            .unwrap()
            .is_none());
    }

    #[test]
    fn locked_pair_moves_to_falling_set() {
        let (mut ecs, session) = world();
        let pair = spawn_pair(&mut ecs, &mut ColorSource::new(5)).unwrap();
        let Pair { center, other } = *ecs.get::<Pair>(pair).unwrap();

        add_falling_pair(&mut ecs, session.falling, pair).unwrap();
        destroy_pair(&mut ecs, pair).unwrap();

        assert!(!ecs.is_alive(pair));
        assert!(ecs.is_alive(center) && ecs.is_alive(other));
        assert_eq!(
            ecs.get::<Falling>(session.falling).unwrap().members,
            vec![center, other]
        );
    }
}
