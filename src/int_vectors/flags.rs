//! Mode flags gating mutation and capacity changes.
use std::fmt;

/// Three independent mode bits carried by every [`IntVector`](super::IntVector).
///
/// The bits are not a hierarchy: any combination is valid. `FROZEN` only pins
/// the capacity, while `READONLY` and `IMMUTABLE` each block every content or
/// structural edit. `IMMUTABLE` additionally blocks destruction.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags(u8);

impl Flags {
    /// Capacity is fixed; growing writes are truncated.
    pub const FROZEN: Self = Self(1 << 0);
    /// Content and structure cannot change.
    pub const READONLY: Self = Self(1 << 1);
    /// Like [`Self::READONLY`], and destruction is refused.
    pub const IMMUTABLE: Self = Self(1 << 2);

    /// No flag set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns `true` if every bit in `other` is set.
    #[inline(always)]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no bit is set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Sets or clears the bits in `other`.
    #[inline(always)]
    pub fn set(&mut self, other: Self, on: bool) {
        if on {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }

    /// Returns the restriction that blocks content edits, checking readonly
    /// before immutable.
    pub const fn edit_restriction(self) -> Option<Restriction> {
        if self.contains(Self::READONLY) {
            Some(Restriction::Readonly)
        } else if self.contains(Self::IMMUTABLE) {
            Some(Restriction::Immutable)
        } else {
            None
        }
    }
}

impl std::ops::BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_set();
        for (flag, name) in [
            (Self::FROZEN, "FROZEN"),
            (Self::READONLY, "READONLY"),
            (Self::IMMUTABLE, "IMMUTABLE"),
        ] {
            if self.contains(flag) {
                list.entry(&format_args!("{name}"));
            }
        }
        list.finish()
    }
}

/// The mode that rejected an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Restriction {
    /// Blocked by [`Flags::FROZEN`].
    Frozen,
    /// Blocked by [`Flags::READONLY`].
    Readonly,
    /// Blocked by [`Flags::IMMUTABLE`].
    Immutable,
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Restriction::Frozen => write!(f, "frozen"),
            Restriction::Readonly => write!(f, "readonly"),
            Restriction::Immutable => write!(f, "immutable"),
        }
    }
}
