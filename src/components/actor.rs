//! Actor data and the slot arena that owns it.
//!
//! An actor is one simulated entity: a kind (index into the manager table),
//! a stable id (its arena slot), an active flag, and the fields the built-in
//! engines read — position, z-index, image, hitboxes, and this frame's
//! contact list. Managers that need extra per-actor state keep it in their
//! own side tables keyed by [`ActorId`].

use glam::Vec2;
use smallvec::SmallVec;

use crate::components::hitbox::Hitbox;
use crate::resources::imagestore::ImageHandle;

/// Stable actor identifier, doubling as the actor's arena slot index.
pub type ActorId = usize;

/// Actor type index into the manager table.
pub type ActorKind = usize;

#[derive(Debug, Clone)]
pub struct ActorData {
    pub id: ActorId,
    pub kind: ActorKind,
    pub active: bool,
    /// World-space position (pivot) of the actor.
    pub pos: Vec2,
    /// Draw-order key. The draw pass paints descending, so the lowest value
    /// ends up visually on top.
    pub z_index: i32,
    pub image: Option<ImageHandle>,
    /// Offset added to `pos` when the default draw hook paints `image`.
    pub image_offset: Vec2,
    /// Local-space collision geometry. Empty means the actor does not
    /// participate in collision detection.
    pub hitboxes: SmallVec<[Hitbox; 2]>,
    /// Indices into the collision pool, rebuilt by the detector each frame.
    pub contacts: SmallVec<[usize; 4]>,
}

impl ActorData {
    /// Create an inactive actor. `create_actor` flips it active.
    pub fn new(id: ActorId, kind: ActorKind) -> Self {
        Self {
            id,
            kind,
            active: false,
            pos: Vec2::ZERO,
            z_index: 0,
            image: None,
            image_offset: Vec2::ZERO,
            hitboxes: SmallVec::new(),
            contacts: SmallVec::new(),
        }
    }

    pub fn with_pos(mut self, x: f32, y: f32) -> Self {
        self.pos = Vec2::new(x, y);
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn with_hitbox(mut self, hitbox: Hitbox) -> Self {
        self.hitboxes.push(hitbox);
        self
    }
}

/// Dense, index-addressed actor storage.
///
/// Slots are never compacted: destroying an actor leaves a logically-dead
/// entry (`active == false`) that every iterator must skip. Creating an actor
/// at an existing id overwrites that slot.
#[derive(Default)]
pub struct ActorArena {
    slots: Vec<Option<ActorData>>,
}

impl ActorArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots, live or dead. Ids are always `< slot_count()`.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, id: ActorId) -> Option<&ActorData> {
        self.slots.get(id)?.as_ref()
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut ActorData> {
        self.slots.get_mut(id)?.as_mut()
    }

    /// Place `actor` at its own id, growing the arena as needed.
    pub fn insert(&mut self, actor: ActorData) {
        let id = actor.id;
        if id >= self.slots.len() {
            self.slots.resize_with(id + 1, || None);
        }
        self.slots[id] = Some(actor);
    }

    /// First id whose slot is empty or holds a destroyed actor, or the next
    /// fresh slot. Create the actor right after allocating; two allocations
    /// with no insert in between return the same id.
    pub fn allocate_id(&mut self) -> ActorId {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_none_or(|actor| !actor.active))
            .unwrap_or(self.slots.len())
    }

    /// Occupied slots in ascending id order, dead entries included.
    pub fn iter(&self) -> impl Iterator<Item = &ActorData> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    pub fn active_count(&self) -> usize {
        self.iter().filter(|actor| actor.active).count()
    }

    /// Raw slot access for passes that need to mutate several actors at once.
    pub fn slots_mut(&mut self) -> &mut [Option<ActorData>] {
        &mut self.slots
    }
}
