//! World components - the plain data attached to blobs and session entities
//!
//! | ID | Component | Attached to |
//! |----|-----------|-------------|
//! | 0 | [`Grid`] | grid entity |
//! | 1 | [`Pair`] | active pair entity |
//! | 2 | [`Falling`] | falling-set entity |
//! | 3 | [`Chains`] | chain-index entity |
//! | 4 | [`Score`] | score entity |
//! | 5 | [`Color`] | blob |
//! | 6 | [`State`] | blob |
//! | 7 | [`Transform`] | blob |
//! | 8 | [`Velocity`] | blob |
//! | 9 | [`Drawable`] | blob |
//! | 10 | [`BelongingChain`] | blob |

use std::collections::BTreeMap;

use crate::ecs::{Component, Coordinator, EcsError, Entity, Result};
use crate::types::{
    BlobColor, FPoint, FRect, IPoint, IRect, FALL_SPEED, GRID_HEIGHT, GRID_SIZE, GRID_WIDTH,
    SPRITE_SIZE, X_INTERVAL, Y_INTERVAL,
};

/// Texture index of the blob atlas
pub const BLOB_TEXTURE: u8 = 0;

/// Cell occupancy, one entity handle per cell (`Entity::NULL` when empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Entity; GRID_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [Entity::NULL; GRID_SIZE],
        }
    }

    #[inline]
    pub fn in_bounds(p: IPoint) -> bool {
        p.x >= 0 && p.x < GRID_WIDTH as i32 && p.y >= 0 && p.y < GRID_HEIGHT as i32
    }

    #[inline]
    fn index(p: IPoint) -> Option<usize> {
        Self::in_bounds(p).then(|| p.y as usize * GRID_WIDTH + p.x as usize)
    }

    /// Entity in the cell, `None` when empty or out of bounds
    pub fn occupant(&self, p: IPoint) -> Option<Entity> {
        let e = self.cells[Self::index(p)?];
        (!e.is_null()).then_some(e)
    }

    /// In bounds and empty
    pub fn is_free(&self, p: IPoint) -> bool {
        Self::index(p).is_some_and(|i| self.cells[i].is_null())
    }

    /// Write `entity` into the cell; returns false when out of bounds
    pub fn set(&mut self, p: IPoint, entity: Entity) -> bool {
        match Self::index(p) {
            Some(i) => {
                self.cells[i] = entity;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self, p: IPoint) {
        self.set(p, Entity::NULL);
    }

    /// Occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (IPoint, Entity)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, &e)| {
            (!e.is_null()).then(|| {
                let p = IPoint::new((i % GRID_WIDTH) as i32, (i / GRID_WIDTH) as i32);
                (p, e)
            })
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|e| !e.is_null()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// The two player-controlled blobs; `center` is the rotation pivot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub center: Entity,
    pub other: Entity,
}

/// Blobs animating a drop after a lock or a clear
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Falling {
    pub members: Vec<Entity>,
}

impl Falling {
    /// Add `entity` unless it is already tracked
    pub fn insert(&mut self, entity: Entity) {
        if !self.members.contains(&entity) {
            self.members.push(entity);
        }
    }
}

/// Identifier of a chain grouping, allocated by [`Chains`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId(u32);

impl ChainId {
    pub fn get(self) -> u32 {
        self.0
    }
}

fn unknown_chain(id: ChainId) -> EcsError {
    EcsError::UnknownId {
        kind: "chain",
        id: id.0,
    }
}

/// Chain index: member lists keyed by ascending (creation-ordered) chain id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chains {
    chains: BTreeMap<ChainId, Vec<Entity>>,
    next_id: u32,
}

impl Chains {
    /// Start a new chain with `members`
    pub fn create(&mut self, members: Vec<Entity>) -> ChainId {
        let id = ChainId(self.next_id);
        self.next_id += 1;
        self.chains.insert(id, members);
        id
    }

    pub fn push(&mut self, id: ChainId, entity: Entity) -> Result<()> {
        self.chains
            .get_mut(&id)
            .ok_or(unknown_chain(id))?
            .push(entity);
        Ok(())
    }

    /// Move every member of `from` into `into` and drop `from`.
    /// Returns the moved members so their markers can be repointed.
    pub fn absorb(&mut self, into: ChainId, from: ChainId) -> Result<Vec<Entity>> {
        if !self.chains.contains_key(&into) {
            return Err(unknown_chain(into));
        }
        let moved = self.remove(from)?;
        self.push_all(into, &moved)?;
        Ok(moved)
    }

    fn push_all(&mut self, id: ChainId, entities: &[Entity]) -> Result<()> {
        self.chains
            .get_mut(&id)
            .ok_or(unknown_chain(id))?
            .extend_from_slice(entities);
        Ok(())
    }

    pub fn remove(&mut self, id: ChainId) -> Result<Vec<Entity>> {
        self.chains.remove(&id).ok_or(unknown_chain(id))
    }

    pub fn members(&self, id: ChainId) -> Option<&[Entity]> {
        self.chains.get(&id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChainId, &[Entity])> {
        self.chains.iter().map(|(&id, m)| (id, m.as_slice()))
    }

    /// Remove and return every chain, leaving the index empty
    pub fn take_all(&mut self) -> BTreeMap<ChainId, Vec<Entity>> {
        std::mem::take(&mut self.chains)
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub BlobColor);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobState {
    Dropping,
    Placed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State(pub BlobState);

/// Pixel position plus the grid cell the blob occupies
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: FPoint,
    pub grid: IPoint,
}

impl Transform {
    /// Transform aligned to the top-left corner of `cell`
    pub fn at_cell(cell: IPoint) -> Self {
        Self {
            position: FPoint::new((cell.x * X_INTERVAL) as f32, (cell.y * Y_INTERVAL) as f32),
            grid: cell,
        }
    }
}

/// Fall speed in logical pixels per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub speed: f32,
}

impl Default for Velocity {
    fn default() -> Self {
        Self { speed: FALL_SPEED }
    }
}

/// Sprite reference and the last destination it was drawn to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    pub texture: u8,
    pub src: IRect,
    pub dst: FRect,
}

impl Drawable {
    pub fn for_color(color: BlobColor) -> Self {
        Self {
            texture: BLOB_TEXTURE,
            src: IRect::new(color.atlas_column() * SPRITE_SIZE, 0, SPRITE_SIZE, SPRITE_SIZE),
            dst: FRect::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BelongingChain {
    pub chain: Option<ChainId>,
}

macro_rules! component_ids {
    ($($ty:ty = $id:expr),* $(,)?) => {
        $(impl Component for $ty {
            const ID: u8 = $id;
        })*
    };
}

component_ids! {
    Grid = 0,
    Pair = 1,
    Falling = 2,
    Chains = 3,
    Score = 4,
    Color = 5,
    State = 6,
    Transform = 7,
    Velocity = 8,
    Drawable = 9,
    BelongingChain = 10,
}

/// Register every world component with `ecs`
pub fn register_all(ecs: &mut Coordinator) -> Result<()> {
    ecs.register_component::<Grid>()?;
    ecs.register_component::<Pair>()?;
    ecs.register_component::<Falling>()?;
    ecs.register_component::<Chains>()?;
    ecs.register_component::<Score>()?;
    ecs.register_component::<Color>()?;
    ecs.register_component::<State>()?;
    ecs.register_component::<Transform>()?;
    ecs.register_component::<Velocity>()?;
    ecs.register_component::<Drawable>()?;
    ecs.register_component::<BelongingChain>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_bounds_and_occupancy() {
        let mut ecs = Coordinator::with_slots(4);
        let e = ecs.create_entity().unwrap();
        let mut grid = Grid::new();

        assert!(grid.is_free(IPoint::new(7, 15)));
        assert!(!grid.is_free(IPoint::new(8, 0)));
        assert!(!grid.is_free(IPoint::new(0, -1)));
        assert!(!grid.set(IPoint::new(0, 16), e));

        assert!(grid.set(IPoint::new(3, 2), e));
        assert_eq!(grid.occupant(IPoint::new(3, 2)), Some(e));
        assert!(!grid.is_free(IPoint::new(3, 2)));
        assert_eq!(grid.occupied().collect::<Vec<_>>(), vec![(IPoint::new(3, 2), e)]);

        grid.clear(IPoint::new(3, 2));
        assert!(grid.is_empty());
    }

    #[test]
    fn chain_ids_follow_creation_order() {
        let mut ecs = Coordinator::with_slots(8);
        let es: Vec<_> = (0..4).map(|_| ecs.create_entity().unwrap()).collect();
        let mut chains = Chains::default();

        let a = chains.create(vec![es[0], es[1]]);
        let b = chains.create(vec![es[2]]);
        assert!(a < b);

        let moved = chains.absorb(a, b).unwrap();
        assert_eq!(moved, vec![es[2]]);
        assert_eq!(chains.members(a), Some(&[es[0], es[1], es[2]][..]));
        assert_eq!(chains.members(b), None);

        let c = chains.create(vec![es[3]]);
        assert!(c > b);
        assert_eq!(chains.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![a, c]);

        assert_eq!(chains.take_all().len(), 2);
        assert!(chains.is_empty());
    }

    #[test]
    fn unknown_chain_ids_are_errors() {
        let mut ecs = Coordinator::with_slots(4);
        let e = ecs.create_entity().unwrap();
        let mut chains = Chains::default();
        let a = chains.create(vec![e]);
        chains.remove(a).unwrap();

        let unknown = EcsError::UnknownId {
            kind: "chain",
            id: a.get(),
        };
        assert_eq!(chains.push(a, e), Err(unknown.clone()));
        assert_eq!(chains.remove(a), Err(unknown.clone()));

        let b = chains.create(vec![e]);
        assert_eq!(chains.absorb(b, a), Err(unknown.clone()));
        assert_eq!(chains.absorb(a, b), Err(unknown));
        // A failed absorb leaves the surviving chain intact.
        assert_eq!(chains.members(b), Some(&[e][..]));
    }

    #[test]
    fn drawable_source_follows_atlas_column() {
        let d = Drawable::for_color(BlobColor::Green);
        assert_eq!(d.src, IRect::new(100, 0, 50, 50));
        assert_eq!(d.texture, BLOB_TEXTURE);
    }

    #[test]
    fn transform_aligns_to_cell() {
        let t = Transform::at_cell(IPoint::new(2, 3));
        assert_eq!(t.position, FPoint::new(160.0, 240.0));
    }
}
