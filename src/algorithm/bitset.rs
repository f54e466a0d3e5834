use bitvec::prelude::*;

/// Fixed-size bitset tracking which pool entities the partial assignment uses
///
/// Indexed by position in the entity pool. Provides O(1) membership testing, which
/// is the hot check of the injectivity constraint during search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityBitset {
    bits: BitVec,
}

impl EntityBitset {
    /// Create a bitset with no entities present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Mark an entity as used
    ///
    /// Returns `false` if the entity was already present or lies outside the pool.
    pub fn insert(&mut self, entity: usize) -> bool {
        if entity >= self.bits.len() || self.contains(entity) {
            return false;
        }
        self.bits.set(entity, true);
        true
    }

    /// Release an entity
    pub fn remove(&mut self, entity: usize) {
        if entity < self.bits.len() {
            self.bits.set(entity, false);
        }
    }

    /// Test entity membership
    pub fn contains(&self, entity: usize) -> bool {
        self.bits.get(entity).as_deref() == Some(&true)
    }
}
