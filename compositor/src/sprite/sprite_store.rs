use super::sprite::*;
use super::sprite_handle::*;

use crate::error::*;
use crate::pixel::*;

use tracing::{debug};

///
/// A slot in the sprite store
///
#[derive(Clone, Debug)]
struct SpriteSlot {
    /// Incremented every time the slot is reused, so old handles stop matching
    generation: u32,

    /// The sprite in this slot, or None if the slot is free
    sprite: Option<Sprite>,
}

///
/// Owns the pixel data and placement of every sprite, addressed by `SpriteHandle`
///
/// Removed sprites free their pixel storage immediately, and their slot is recycled by a later `create()`. The
/// generation counter on each slot means that a handle to a removed sprite never refers to the sprite that
/// replaces it.
///
#[derive(Clone, Debug, Default)]
pub struct SpriteStore {
    /// The slots for the sprites
    slots: Vec<SpriteSlot>,

    /// Slots that are available to re-use
    free_slots: Vec<u32>,

    /// Number of live sprites
    len: usize,
}

impl SpriteStore {
    ///
    /// Creates an empty sprite store
    ///
    pub fn new() -> SpriteStore {
        SpriteStore::default()
    }

    ///
    /// Creates a sprite from a set of RGBA pixels
    ///
    /// Fails with `InvalidDimensions` if the sprite would be empty, or `BufferSizeMismatch` if the pixels are not
    /// `width * height * 4` bytes long. Nothing is allocated if this fails.
    ///
    pub fn create(&mut self, pixels: Vec<u8>, width: u32, height: u32) -> Result<SpriteHandle> {
        let texture = RgbaTexture::from_pixels(width, height, pixels)?;

        Ok(self.insert(Sprite::new(texture)))
    }

    ///
    /// Creates a sprite filled with a single colour
    ///
    pub fn create_rect(&mut self, width: u32, height: u32, color: U8RgbaPixel) -> Result<SpriteHandle> {
        let texture = RgbaTexture::solid_color(width, height, color)?;

        Ok(self.insert(Sprite::new(texture)))
    }

    ///
    /// Stores a sprite, returning its handle
    ///
    pub fn insert(&mut self, sprite: Sprite) -> SpriteHandle {
        let (width, height) = (sprite.width(), sprite.height());

        let handle = if let Some(index) = self.free_slots.pop() {
            // Reuse a freed slot
            let slot        = &mut self.slots[index as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.sprite     = Some(sprite);

            SpriteHandle { index, generation: slot.generation }
        } else {
            // Allocate a new slot
            let index = self.slots.len() as u32;
            self.slots.push(SpriteSlot { generation: 0, sprite: Some(sprite) });

            SpriteHandle { index, generation: 0 }
        };

        self.len += 1;
        debug!(?handle, width, height, "Created sprite");

        handle
    }

    ///
    /// Removes a sprite, returning it
    ///
    /// Removing a sprite that has already been removed fails with `InvalidHandle`
    ///
    pub fn remove(&mut self, handle: SpriteHandle) -> Result<Sprite> {
        let slot = self.slots.get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation && slot.sprite.is_some())
            .ok_or(CompositorError::InvalidHandle(handle))?;

        let sprite = slot.sprite.take().ok_or(CompositorError::InvalidHandle(handle))?;

        self.free_slots.push(handle.index);
        self.len -= 1;
        debug!(?handle, "Removed sprite");

        Ok(sprite)
    }

    ///
    /// True if the handle refers to a live sprite
    ///
    #[inline]
    pub fn contains(&self, handle: SpriteHandle) -> bool {
        self.get(handle).is_ok()
    }

    ///
    /// Retrieves the sprite with the specified handle
    ///
    #[inline]
    pub fn get(&self, handle: SpriteHandle) -> Result<&Sprite> {
        self.slots.get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.sprite.as_ref())
            .ok_or(CompositorError::InvalidHandle(handle))
    }

    ///
    /// Retrieves the sprite with the specified handle for editing
    ///
    #[inline]
    pub fn get_mut(&mut self, handle: SpriteHandle) -> Result<&mut Sprite> {
        self.slots.get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.sprite.as_mut())
            .ok_or(CompositorError::InvalidHandle(handle))
    }

    ///
    /// The number of live sprites in this store
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    ///
    /// Iterates over the live sprites in this store, in slot order
    ///
    pub fn iter(&self) -> impl '_ + Iterator<Item=(SpriteHandle, &Sprite)> {
        self.slots.iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.sprite.as_ref().map(|sprite| (SpriteHandle { index: index as u32, generation: slot.generation }, sprite))
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn red() -> U8RgbaPixel {
        U8RgbaPixel::rgba(255, 0, 0, 255)
    }

    #[test]
    fn create_assigns_distinct_handles() {
        let mut store   = SpriteStore::new();
        let first       = store.create_rect(10, 10, red()).unwrap();
        let second      = store.create_rect(10, 10, red()).unwrap();

        assert!(first != second);
        assert!(store.len() == 2);
    }

    #[test]
    fn create_rejects_bad_buffers_without_allocating() {
        let mut store = SpriteStore::new();

        assert!(matches!(store.create(vec![0; 12], 2, 2), Err(CompositorError::BufferSizeMismatch { .. })));
        assert!(matches!(store.create(vec![], 0, 2), Err(CompositorError::InvalidDimensions { .. })));
        assert!(matches!(store.create_rect(4, 0, red()), Err(CompositorError::InvalidDimensions { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_twice_fails() {
        let mut store   = SpriteStore::new();
        let handle      = store.create_rect(2, 2, red()).unwrap();

        assert!(store.remove(handle).is_ok());
        assert!(matches!(store.remove(handle), Err(CompositorError::InvalidHandle(h)) if h == handle));
    }

    #[test]
    fn reused_slot_does_not_alias_old_handle() {
        let mut store   = SpriteStore::new();
        let old         = store.create_rect(2, 2, red()).unwrap();

        store.remove(old).unwrap();
        let new         = store.create_rect(3, 3, red()).unwrap();

        assert!(new.index() == old.index());
        assert!(new != old);
        assert!(store.get(old).is_err());
        assert!(store.get(new).unwrap().width() == 3);
    }

    #[test]
    fn get_mut_on_unknown_handle_fails() {
        let mut store = SpriteStore::new();

        assert!(store.get_mut(SpriteHandle::from_bits(5)).is_err());
    }

    #[test]
    fn iter_skips_removed_sprites() {
        let mut store   = SpriteStore::new();
        let a           = store.create_rect(1, 1, red()).unwrap();
        let b           = store.create_rect(1, 1, red()).unwrap();
        let c           = store.create_rect(1, 1, red()).unwrap();

        store.remove(b).unwrap();

        let handles = store.iter().map(|(handle, _)| handle).collect::<Vec<_>>();
        assert!(handles == vec![a, c], "{:?}", handles);
    }
}
