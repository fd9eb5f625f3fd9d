use crate::error::*;
use crate::sprite::*;

use smallvec::*;
use tracing::{debug};

use std::collections::{HashSet};

///
/// The draw order for a render pass (most scenes are small enough not to need a heap allocation)
///
pub type SceneOrder = SmallVec<[SpriteHandle; 16]>;

///
/// The scene is the set of sprites that are drawn by a render pass
///
/// Membership is a pure set: adding a sprite twice or removing a sprite that isn't present does nothing. The
/// drawing order isn't stored, but is worked out from the sprites' z-indexes whenever it's needed.
///
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// The sprites that are currently visible
    members: HashSet<SpriteHandle>,
}

impl Scene {
    ///
    /// Creates an empty scene
    ///
    pub fn new() -> Scene {
        Scene::default()
    }

    ///
    /// Adds a sprite to the scene
    ///
    /// Fails with `InvalidHandle` if the sprite doesn't exist in the store
    ///
    pub fn add(&mut self, store: &SpriteStore, handle: SpriteHandle) -> Result<()> {
        store.get(handle)?;

        if self.members.insert(handle) {
            debug!(?handle, "Added sprite to scene");
        }

        Ok(())
    }

    ///
    /// Removes a sprite from the scene, returning true if it was a member
    ///
    pub fn remove(&mut self, handle: SpriteHandle) -> bool {
        let removed = self.members.remove(&handle);

        if removed {
            debug!(?handle, "Removed sprite from scene");
        }

        removed
    }

    #[inline]
    pub fn contains(&self, handle: SpriteHandle) -> bool {
        self.members.contains(&handle)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    ///
    /// Removes every sprite from the scene
    ///
    pub fn clear(&mut self) {
        self.members.clear();
    }

    ///
    /// Returns the live sprites in this scene in drawing order
    ///
    /// Sprites are sorted by ascending z-index, with ties broken by ascending handle, so the first sprite in the list is
    /// drawn first (and so appears behind everything else).
    ///
    pub fn ordered_visible(&self, store: &SpriteStore) -> SceneOrder {
        let mut ordered = self.members.iter()
            .filter_map(|handle| store.get(*handle).ok().map(|sprite| (sprite.z_index(), *handle)))
            .collect::<SmallVec<[(i32, SpriteHandle); 16]>>();

        ordered.sort_unstable();
        ordered.into_iter().map(|(_, handle)| handle).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pixel::*;

    fn store_with_sprites(count: usize) -> (SpriteStore, Vec<SpriteHandle>) {
        let mut store   = SpriteStore::new();
        let handles     = (0..count)
            .map(|_| store.create_rect(2, 2, U8RgbaPixel::rgba(0, 0, 0, 255)).unwrap())
            .collect();

        (store, handles)
    }

    #[test]
    fn add_is_idempotent() {
        let (store, handles)    = store_with_sprites(2);
        let mut scene           = Scene::new();

        scene.add(&store, handles[0]).unwrap();
        scene.add(&store, handles[1]).unwrap();
        let once = scene.ordered_visible(&store);

        scene.add(&store, handles[0]).unwrap();
        let twice = scene.ordered_visible(&store);

        assert!(scene.len() == 2);
        assert!(once == twice, "{:?} != {:?}", once, twice);
    }

    #[test]
    fn remove_absent_is_a_no_op() {
        let (store, handles)    = store_with_sprites(1);
        let mut scene           = Scene::new();

        assert!(!scene.remove(handles[0]));
        scene.add(&store, handles[0]).unwrap();
        assert!(scene.remove(handles[0]));
        assert!(!scene.remove(handles[0]));
        assert!(scene.is_empty());
    }

    #[test]
    fn add_removed_sprite_fails() {
        let (mut store, handles)    = store_with_sprites(1);
        let mut scene               = Scene::new();

        store.remove(handles[0]).unwrap();

        assert!(matches!(scene.add(&store, handles[0]), Err(CompositorError::InvalidHandle(_))));
        assert!(scene.is_empty());
    }

    #[test]
    fn orders_by_z_index_then_handle() {
        let (mut store, handles)    = store_with_sprites(4);
        let mut scene               = Scene::new();

        store.get_mut(handles[0]).unwrap().set_z_index(5);
        store.get_mut(handles[1]).unwrap().set_z_index(-1);
        store.get_mut(handles[2]).unwrap().set_z_index(5);
        store.get_mut(handles[3]).unwrap().set_z_index(0);

        for handle in handles.iter().rev() {
            scene.add(&store, *handle).unwrap();
        }

        let order = scene.ordered_visible(&store);
        assert!(order.as_slice() == [handles[1], handles[3], handles[0], handles[2]], "{:?}", order);
    }

    #[test]
    fn removed_sprites_are_not_visible() {
        let (mut store, handles)    = store_with_sprites(2);
        let mut scene               = Scene::new();

        scene.add(&store, handles[0]).unwrap();
        scene.add(&store, handles[1]).unwrap();
        store.remove(handles[0]).unwrap();

        assert!(scene.ordered_visible(&store).as_slice() == [handles[1]]);
    }
}
