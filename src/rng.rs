use rand::CryptoRng;

pub trait Rng {
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

impl<R: CryptoRng + ?Sized> Rng for R {
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand::RngCore::fill_bytes(self, dest)
    }
}

/// The thread-local generator, seeded from the operating system.
#[cfg(feature = "std")]
pub fn os_rng() -> rand::rngs::ThreadRng {
    rand::rng()
}

#[cfg(test)]
mod tests_rng {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_seeded_fill_is_deterministic() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        Rng::fill_bytes(&mut StdRng::seed_from_u64(42), &mut a);
        Rng::fill_bytes(&mut StdRng::seed_from_u64(42), &mut b);
        assert_eq!(a, b);
        assert_ne!(a, [0u8; 32]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_os_rng_fills() {
        let mut buffer = [0u8; 32];
        Rng::fill_bytes(&mut os_rng(), &mut buffer);
        assert_ne!(buffer, [0u8; 32]);
    }
}
