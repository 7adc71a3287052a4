use core::fmt;
use core::num::NonZeroU32;

/// Dense solver index assigned to a node that appears in the edge list.
///
/// - `u32` keeps the relaxation table small
/// - `NonZero` enables `Option<Idx>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Idx(NonZeroU32);

impl Idx {
    /// Largest 0-based position an `Idx` can hold.
    pub const MAX_INDEX: usize = (u32::MAX - 1) as usize;

    /// Create an Idx from a 0-based position by storing position+1.
    ///
    /// Returns `None` past [`Idx::MAX_INDEX`].
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|raw| raw.checked_add(1))
            .and_then(NonZeroU32::new)
            .map(Self)
    }

    /// Recover the 0-based position, ready for slice indexing.
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Idx({})", self.index())
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_round_trip_index() {
        for i in [0_usize, 1, 2, 42, 10_000, Idx::MAX_INDEX] {
            let idx = Idx::from_index(i).unwrap();
            assert_eq!(idx.index(), i);
        }
    }

    #[test]
    fn idx_past_bound_is_rejected() {
        assert_eq!(Idx::from_index(Idx::MAX_INDEX + 1), None);
        assert_eq!(Idx::from_index(usize::MAX), None);
    }

    #[test]
    fn option_idx_is_small() {
        assert_eq!(
            core::mem::size_of::<Idx>(),
            core::mem::size_of::<Option<Idx>>()
        );
    }

    #[test]
    fn idx_orders_by_position() {
        assert!(Idx::from_index(3) < Idx::from_index(7));
        assert_eq!(format!("{:?}", Idx::from_index(5).unwrap()), "Idx(5)");
    }
}
