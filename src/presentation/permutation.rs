//! Uniform random permutations

use rand::Rng;
use rand::seq::SliceRandom;

/// A uniformly random ordering of `0..len`
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use reveal_puzzle::presentation::random_permutation;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut order = random_permutation(5, &mut rng);
/// order.sort_unstable();
/// assert_eq!(order, [0, 1, 2, 3, 4]);
/// ```
pub fn random_permutation<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}
