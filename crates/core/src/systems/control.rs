//! Player control of the active pair: horizontal moves, rotation, soft drop

use crate::components::{Grid, Pair, Transform, Velocity};
use crate::ecs::{Coordinator, Entity, Result};
use crate::types::{
    Direction, FPoint, IPoint, InputSnapshot, Key, Shape, FALL_SPEED, SOFT_DROP_MULTIPLIER,
    X_INTERVAL, Y_INTERVAL,
};

/// The single direction pressed this frame among `left`/`right`.
/// Both at once cancel out.
fn pressed_direction(input: &InputSnapshot, left: Key, right: Key) -> Option<Direction> {
    match (input.just_pressed(left), input.just_pressed(right)) {
        (true, false) => Some(Direction::Left),
        (false, true) => Some(Direction::Right),
        _ => None,
    }
}

/// Apply one frame of pair input.
///
/// At most one action per frame: a move, else a rotation, else a soft-drop
/// speed change.
pub fn handle_pair_input(
    ecs: &mut Coordinator,
    grid: Entity,
    pair: Entity,
    input: &InputSnapshot,
) -> Result<()> {
    if let Some(dir) = pressed_direction(input, Key::Left, Key::Right) {
        move_pair(ecs, grid, pair, dir)?;
    } else if let Some(dir) = pressed_direction(input, Key::RotateLeft, Key::RotateRight) {
        rotate_pair(ecs, grid, pair, dir)?;
    } else if input.is_held(Key::Down) {
        change_velocity(ecs, pair, FALL_SPEED * SOFT_DROP_MULTIPLIER)?;
    } else if input.just_released(Key::Down) {
        change_velocity(ecs, pair, FALL_SPEED)?;
    }
    Ok(())
}

fn pair_cells(ecs: &Coordinator, pair: Entity) -> Result<(Pair, IPoint, IPoint)> {
    let p = *ecs.get::<Pair>(pair)?;
    let center = ecs.get::<Transform>(p.center)?.grid;
    let other = ecs.get::<Transform>(p.other)?.grid;
    Ok((p, center, other))
}

fn shifted(p: IPoint, dx: i32) -> IPoint {
    IPoint::new(p.x + dx, p.y)
}

/// Whether both pieces fit one column over in `dir`.
///
/// A target cell must be in bounds and either empty or held by the pair itself.
pub fn can_move(ecs: &Coordinator, grid: Entity, pair: Entity, dir: Direction) -> Result<bool> {
    let (p, center, other) = pair_cells(ecs, pair)?;
    let grid = ecs.get::<Grid>(grid)?;
    let fits = |cell: IPoint| {
        Grid::in_bounds(cell)
            && match grid.occupant(cell) {
                None => true,
                Some(e) => e == p.center || e == p.other,
            }
    };
    Ok(fits(shifted(center, dir.dx())) && fits(shifted(other, dir.dx())))
}

/// Shift the pair one column; returns false when the move is blocked
pub fn move_pair(
    ecs: &mut Coordinator,
    grid: Entity,
    pair: Entity,
    dir: Direction,
) -> Result<bool> {
    if !can_move(ecs, grid, pair, dir)? {
        return Ok(false);
    }
    let (p, center, other) = pair_cells(ecs, pair)?;
    let (new_center, new_other) = (shifted(center, dir.dx()), shifted(other, dir.dx()));

    let cells = ecs.get_mut::<Grid>(grid)?;
    cells.clear(center);
    cells.clear(other);
    cells.set(new_center, p.center);
    cells.set(new_other, p.other);

    for (blob, cell) in [(p.center, new_center), (p.other, new_other)] {
        let t = ecs.get_mut::<Transform>(blob)?;
        t.grid = cell;
        t.position.x = (cell.x * X_INTERVAL) as f32;
    }
    Ok(true)
}

/// Whether `other` can swing to its rotated cell around `center`
pub fn can_rotate(ecs: &Coordinator, grid: Entity, pair: Entity, dir: Direction) -> Result<bool> {
    let (_, center, other) = pair_cells(ecs, pair)?;
    let (dx, dy) = Shape::from_positions((center.x, center.y), (other.x, other.y))
        .rotated(dir)
        .offset();
    let target = IPoint::new(center.x + dx, center.y + dy);
    Ok(ecs.get::<Grid>(grid)?.is_free(target))
}

/// Rotate `other` around `center`; returns false when the rotation is blocked
pub fn rotate_pair(
    ecs: &mut Coordinator,
    grid: Entity,
    pair: Entity,
    dir: Direction,
) -> Result<bool> {
    if !can_rotate(ecs, grid, pair, dir)? {
        return Ok(false);
    }
    let (p, center, other) = pair_cells(ecs, pair)?;
    let (dx, dy) = Shape::from_positions((center.x, center.y), (other.x, other.y))
        .rotated(dir)
        .offset();
    let target = IPoint::new(center.x + dx, center.y + dy);

    let cells = ecs.get_mut::<Grid>(grid)?;
    cells.clear(other);
    cells.set(target, p.other);

    // `other` keeps the same sub-cell progress as the pivot.
    let pivot = ecs.get::<Transform>(p.center)?.position;
    let t = ecs.get_mut::<Transform>(p.other)?;
    t.grid = target;
    t.position = FPoint::new(
        pivot.x + (dx * X_INTERVAL) as f32,
        pivot.y + (dy * Y_INTERVAL) as f32,
    );
    Ok(true)
}

/// Set both pieces' fall speed
pub fn change_velocity(ecs: &mut Coordinator, pair: Entity, speed: f32) -> Result<()> {
    let Pair { center, other } = *ecs.get::<Pair>(pair)?;
    ecs.get_mut::<Velocity>(center)?.speed = speed;
    ecs.get_mut::<Velocity>(other)?.speed = speed;
    Ok(())
}
