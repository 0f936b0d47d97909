use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn derive(&self, index: u64) -> Self {
        Self::new(self.seed.wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_produces_same_sequence() {
        let mut first = SessionRng::new(17);
        let mut second = SessionRng::new(17);

        let items: Vec<u32> = (0..1000).collect();

        let a: Vec<u32> = (0..20).map(|_| *first.choose(&items).unwrap()).collect();
        let b: Vec<u32> = (0..20).map(|_| *second.choose(&items).unwrap()).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_choose_from_empty_slice_is_none() {
        let mut rng = SessionRng::new(1);
        let items: [u8; 0] = [];

        assert!(rng.choose(&items).is_none());
    }

    #[test]
    fn test_derive_changes_seed_per_index() {
        let rng = SessionRng::new(42);

        assert_eq!(rng.derive(0).seed(), 42);
        assert_ne!(rng.derive(1).seed(), rng.derive(2).seed());
    }
}
