//! Mapping between button positions and part indices

use super::random_permutation;
use crate::core::Part;
use rand::Rng;

/// The order in which significant parts are offered as buttons
///
/// Holds part indices; filler parts never appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLayout {
    order: Vec<usize>,
}

impl ButtonLayout {
    /// Shuffle all part indices and keep the significant ones
    pub fn shuffled<R: Rng + ?Sized>(parts: &[Part], rng: &mut R) -> Self {
        let order = random_permutation(parts.len(), rng)
            .into_iter()
            .filter(|&index| parts[index].is_significant())
            .collect();
        Self { order }
    }

    /// Buttons in reading order
    #[must_use]
    pub fn in_order(parts: &[Part]) -> Self {
        let order = parts
            .iter()
            .enumerate()
            .filter(|(_, part)| part.is_significant())
            .map(|(index, _)| index)
            .collect();
        Self { order }
    }

    /// Part index shown on button `button`
    #[inline]
    #[must_use]
    pub fn part_at(&self, button: usize) -> Option<usize> {
        self.order.get(button).copied()
    }

    /// Button position showing part `part`
    #[must_use]
    pub fn button_of(&self, part: usize) -> Option<usize> {
        self.order.iter().position(|&index| index == part)
    }

    /// Number of buttons
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Part indices in button order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }
}
