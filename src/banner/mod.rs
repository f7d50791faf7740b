//! Banner pity mechanics.
//!
//! A banner is an immutable [`BannerConfig`] plus per-run mutable state,
//! composed with a [`RareOutcomeResolver`] that encodes the variant-specific
//! rate-up rule (character 50/50 + radiance, weapon double coin).

mod config;
mod logic;
mod resolvers;

pub use config::BannerConfig;
pub use logic::{rate_at, Banner, CharacterBanner, WeaponBanner};
pub use resolvers::{CharacterResolver, RareOutcomeResolver, WeaponResolver};

#[cfg(test)]
pub(crate) mod test_rng {
    use rand::{Error, RngCore};

    /// Raw value that `gen::<f64>()` maps to 0.0 (wins any coin).
    pub const WIN: u64 = 0;
    /// Raw value that `gen::<f64>()` maps to just under 1.0 (loses any coin
    /// with bias below 1).
    pub const LOSE: u64 = u64::MAX;

    /// Raw value that `gen::<f64>()` maps back to approximately `f`.
    pub fn coin(f: f64) -> u64 {
        ((f * (1u64 << 53) as f64) as u64) << 11
    }

    /// Scripted RNG: yields a fixed list of raw u64 values in order.
    /// Panics if a test consumes more values than it scripted.
    pub struct SeqRng {
        values: Vec<u64>,
        next: usize,
    }

    impl SeqRng {
        pub fn new(values: Vec<u64>) -> Self {
            Self { values, next: 0 }
        }
    }

    impl RngCore for SeqRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            let value = self.values[self.next];
            self.next += 1;
            value
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }
}
