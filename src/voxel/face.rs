use glam::IVec3;

/// Face direction for span visibility and quad emission.
///
/// The discriminant doubles as the index into the span's visibility field:
/// bit 5 is up, descending to bit 0 for east.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    /// +Y
    Up = 0,
    /// -Y
    Down = 1,
    /// +Z
    North = 2,
    /// -Z
    South = 3,
    /// -X
    West = 4,
    /// +X
    East = 5,
}

pub const FACE_COUNT: usize = 6;

impl Face {
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Up,
        Face::Down,
        Face::North,
        Face::South,
        Face::West,
        Face::East,
    ];

    /// Mask selecting this face's bit in the span visibility field.
    #[inline]
    pub const fn visibility_bit(self) -> u32 {
        1 << (5 - self as u32)
    }

    /// Axis perpendicular to this face: 0 = X, 1 = Y, 2 = Z.
    #[inline]
    pub const fn axis(self) -> usize {
        match self {
            Face::West | Face::East => 0,
            Face::Up | Face::Down => 1,
            Face::North | Face::South => 2,
        }
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        matches!(self, Face::Up | Face::North | Face::East)
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::North => Face::South,
            Face::South => Face::North,
            Face::West => Face::East,
            Face::East => Face::West,
        }
    }

    /// Outward unit normal on the integer lattice.
    #[inline]
    pub const fn normal(self) -> IVec3 {
        match self {
            Face::Up => IVec3::Y,
            Face::Down => IVec3::NEG_Y,
            Face::North => IVec3::Z,
            Face::South => IVec3::NEG_Z,
            Face::West => IVec3::NEG_X,
            Face::East => IVec3::X,
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Face::Up,
            1 => Face::Down,
            2 => Face::North,
            3 => Face::South,
            4 => Face::West,
            5 => Face::East,
            _ => panic!("Invalid face index"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn visibility_bits_are_distinct() {
        let mut seen = 0u32;
        for face in Face::ALL {
            let bit = face.visibility_bit();
            assert_eq!(seen & bit, 0);
            seen |= bit;
        }
        assert_eq!(seen, 0x3F);
    }

    #[test]
    fn opposites_share_an_axis() {
        for face in Face::ALL {
            let other = face.opposite();
            assert_eq!(face.axis(), other.axis());
            assert_ne!(face.is_positive(), other.is_positive());
            assert_eq!(face.normal() + other.normal(), IVec3::ZERO);
        }
    }
}
