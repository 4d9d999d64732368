//! Seeded random sources for reproducible replications.
//!
//! Every replication owns its random streams exclusively. Streams are
//! `ChaCha8Rng` instances sharing one replication seed but selecting
//! different ChaCha stream ids, so the arrival process and the service process
//! never consume each other's draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source used by all generators in the engine.
pub type SimRng = ChaCha8Rng;

/// Independent stream selectors within one replication seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Arrivals,
    Service,
}

impl Stream {
    const fn id(self) -> u64 {
        match self {
            Stream::Arrivals => 1,
            Stream::Service => 2,
        }
    }
}

/// Build the random source for one stream of one replication.
pub fn stream_rng(seed: u64, stream: Stream) -> SimRng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream.id());
    rng
}

/// Derive the seed of replication `index` from a base seed (SplitMix64).
pub fn derive_seed(base: u64, index: u64) -> u64 {
    let mut x = base.wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Uniform draw on `(0, 1]`, so `ln(u)` is always finite.
pub fn uniform_open_closed<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    1.0 - rng.gen::<f64>()
}
