// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::str::FromStr;

use crate::error::SolidsError;

/// The coordinate plane a [`crate::Flat`] lies in.
///
/// The tag names the two free (u, v) axes; the remaining axis is held
/// fixed across the whole patch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Free axes x and y; z fixed. Floors and ceilings.
    Xy,
    /// Free axes x and z; y fixed. Near and far walls.
    Xz,
    /// Free axes y and z; x fixed. Left and right walls.
    Yz,
}

impl Orientation {
    /// Returns the `(u, v, fixed)` axis indices for this plane.
    #[must_use]
    pub fn axes(self) -> (usize, usize, usize) {
        match self {
            Self::Xy => (0, 1, 2),
            Self::Xz => (0, 2, 1),
            Self::Yz => (1, 2, 0),
        }
    }

    /// Returns the tag text for this plane.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Xy => "xy",
            Self::Xz => "xz",
            Self::Yz => "yz",
        }
    }
}

impl FromStr for Orientation {
    type Err = SolidsError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "xy" => Ok(Self::Xy),
            "xz" => Ok(Self::Xz),
            "yz" => Ok(Self::Yz),
            other => Err(SolidsError::InvalidTag(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Orientation;
    use crate::error::SolidsError;

    #[test]
    fn known_tags_parse() {
        assert_eq!("xy".parse::<Orientation>().unwrap(), Orientation::Xy);
        assert_eq!("xz".parse::<Orientation>().unwrap(), Orientation::Xz);
        assert_eq!("yz".parse::<Orientation>().unwrap(), Orientation::Yz);
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let err = "zx".parse::<Orientation>().unwrap_err();
        assert_eq!(err, SolidsError::InvalidTag("zx".to_string()));
    }

    #[test]
    fn axes_cover_all_three_indices() {
        for o in [Orientation::Xy, Orientation::Xz, Orientation::Yz] {
            let (u, v, f) = o.axes();
            let mut seen = [false; 3];
            seen[u] = true;
            seen[v] = true;
            seen[f] = true;
            assert_eq!(seen, [true; 3], "axes must be a permutation of 0..3");
        }
    }
}
