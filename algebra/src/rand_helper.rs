use core::num::NonZeroU32;
use rand_chacha::{
    rand_core::{CryptoRng, Error, RngCore, SeedableRng},
    ChaChaRng,
};

fn test_rng_helper() -> ChaChaRng {
    // arbitrary seed
    let seed = [
        7, 0, 0, 0, 19, 0, 0, 0, 101, 2, 0, 0, 44, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0,
    ];
    ChaChaRng::from_seed(seed)
}

/// Should be used only for tests, not for any real world usage.
#[cfg(not(feature = "std"))]
pub fn test_rng() -> impl RngCore + CryptoRng {
    test_rng_helper()
}

/// Should be used only for tests, not for any real world usage.
///
/// Set `DETERMINISTIC_TEST_RNG=1` to replay the same stream across runs.
#[cfg(feature = "std")]
pub fn test_rng() -> impl RngCore + CryptoRng {
    let is_deterministic =
        std::env::vars().any(|(key, val)| key == "DETERMINISTIC_TEST_RNG" && val == "1");
    if is_deterministic {
        test_rng_helper()
    } else {
        ChaChaRng::from_entropy()
    }
}

/// A random source whose fallible interface always fails, while the
/// infallible one yields zeros. Should be used only for tests.
pub struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.iter_mut().for_each(|b| *b = 0);
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Error> {
        Err(Error::from(NonZeroU32::MIN))
    }
}

impl CryptoRng for FailingRng {}

#[cfg(test)]
mod test {
    use super::FailingRng;
    use rand_chacha::rand_core::RngCore;

    #[test]
    fn test_failing_rng_fails() {
        let mut buf = [1u8; 8];
        assert!(FailingRng.try_fill_bytes(&mut buf).is_err());
        FailingRng.fill_bytes(&mut buf);
        assert_eq!(buf, [0u8; 8]);
    }

    #[test]
    fn test_fixed_seed_replays() {
        let a = super::test_rng_helper().next_u64();
        let b = super::test_rng_helper().next_u64();
        assert_eq!(a, b);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_entropy_rng_differs() {
        if std::env::var("DETERMINISTIC_TEST_RNG").as_deref() == Ok("1") {
            return;
        }
        let a = super::test_rng().next_u64();
        let b = super::test_rng().next_u64();
        assert_ne!(a, b); // should be unequal with high probability.
    }
}
