//! Draw contract and the grid render pass

use crate::components::{Drawable, Grid, Transform};
use crate::ecs::{Coordinator, Entity, Result};
use crate::types::{FRect, IRect, X_INTERVAL, Y_INTERVAL};

/// Draw target on the 640×1280 logical display
pub trait Surface {
    /// Draw `src` of texture `texture` into `dst` (logical pixels)
    fn draw(&mut self, texture: u8, src: IRect, dst: FRect);
}

/// Refresh each grid blob's destination from its grid cell and draw it
pub fn render_grid<S: Surface + ?Sized>(
    ecs: &mut Coordinator,
    grid: Entity,
    surface: &mut S,
) -> Result<()> {
    let occupied: Vec<Entity> = ecs.get::<Grid>(grid)?.occupied().map(|(_, e)| e).collect();
    for blob in occupied {
        let cell = ecs.get::<Transform>(blob)?.grid;
        let drawable = ecs.get_mut::<Drawable>(blob)?;
        drawable.dst = FRect::new(
            (cell.x * X_INTERVAL) as f32,
            (cell.y * Y_INTERVAL) as f32,
            X_INTERVAL as f32,
            Y_INTERVAL as f32,
        );
        surface.draw(drawable.texture, drawable.src, drawable.dst);
    }
    Ok(())
}
