//! Cyclic Rotation
//!
//! Index into a fixed-size sequence, advanced by a scheduler tick. Used by
//! the hero headlines and the testimonial carousel.

use crate::error::{Result, SiteError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation<T: 'static> {
    items: &'static [T],
    index: usize,
}

impl<T: 'static> Rotation<T> {
    pub fn new(items: &'static [T]) -> Result<Self> {
        if items.is_empty() {
            return Err(SiteError::EmptySequence);
        }
        Ok(Self { items, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> &'static T {
        &self.items[self.index]
    }

    pub fn items(&self) -> &'static [T] {
        self.items
    }

    /// One scheduler tick; wraps back to the first item
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }

    /// Jump straight to an item (carousel indicators)
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(SiteError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.index = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HEADLINES;

    static EMPTY: [u8; 0] = [];

    #[test]
    fn test_advance_wraps() {
        let mut rotation = Rotation::new(&HEADLINES).unwrap();
        assert_eq!(*rotation.current(), "Seamless Transactions");

        for _ in 0..HEADLINES.len() - 1 {
            rotation.advance();
        }
        assert_eq!(*rotation.current(), "Instant Transfers");

        rotation.advance();
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn test_jump_to() {
        let mut rotation = Rotation::new(&HEADLINES).unwrap();
        rotation.jump_to(3).unwrap();
        assert_eq!(*rotation.current(), "Digital Assets");

        assert_eq!(
            rotation.jump_to(5).unwrap_err(),
            SiteError::IndexOutOfRange { index: 5, len: 5 }
        );
        assert_eq!(rotation.index(), 3);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(Rotation::new(&EMPTY).unwrap_err(), SiteError::EmptySequence);
    }
}
