//! Page identifier type.

use std::fmt;

/// Identifies a page in the reference string.
///
/// Pages are what the simulated process asks for; the simulator only cares
/// about their identity, so a bare `u32` is enough. Display prints the raw
/// number because step messages embed it directly ("Page 7 found in ...").
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page = PageId::new(42);
/// assert_eq!(page.0, 42);
/// assert_eq!(format!("{}", page), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
    }

    #[test]
    fn test_page_id_equality() {
        assert_eq!(PageId::new(5), PageId::new(5));
        assert_ne!(PageId::new(5), PageId::new(6));
    }

    #[test]
    fn test_page_id_ordering() {
        assert!(PageId::new(1) < PageId::new(2));
        assert!(PageId::new(5) > PageId::new(3));
    }

    #[test]
    fn test_page_id_from_u32() {
        let pid: PageId = 7u32.into();
        assert_eq!(pid, PageId::new(7));
    }
}
