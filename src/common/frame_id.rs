//! Frame identifier type.

use std::fmt;

/// Identifies a slot in the frame bank.
///
/// Using `usize` because:
/// 1. Frames are stored in a `Vec`
/// 2. Direct indexing without casting: `slots[frame_id.0]`
/// 3. Matches Rust idioms for array/vector indexing
///
/// Display prints the raw index because step messages embed it directly
/// ("... loaded into Frame 2 ...").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_id_new() {
        let fid = FrameId::new(10);
        assert_eq!(fid.0, 10);
    }

    #[test]
    fn test_frame_id_equality() {
        assert_eq!(FrameId::new(5), FrameId::new(5));
        assert_ne!(FrameId::new(5), FrameId::new(6));
    }

    #[test]
    fn test_frame_id_display() {
        assert_eq!(format!("{}", FrameId::new(42)), "42");
    }
}
