use rand::Rng;

/// In-place Fisher-Yates shuffle driven by the caller's `rng`.
///
/// With a seeded `StdRng` the resulting order is reproducible.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Pair every item with its original position, then shuffle the pairs.
pub fn enumerate_shuffled<T, R>(items: impl IntoIterator<Item = T>, rng: &mut R) -> Vec<(usize, T)>
where
    R: Rng + ?Sized,
{
    let mut pairs: Vec<(usize, T)> = items.into_iter().enumerate().collect();
    shuffle(&mut pairs, rng);
    pairs
}
