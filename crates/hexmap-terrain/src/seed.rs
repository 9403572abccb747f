//! Deterministic seed derivation.
//!
//! One master seed reproduces a whole map: the noise seed, the river stream
//! and the elevation stream are each derived from it with a SplitMix64 chain
//! so the subsystems stay decorrelated. The mix is fixed, so a printed seed
//! rebuilds the same map on any toolchain or platform.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Derive a u64 sub-seed from the master seed and a subsystem label: the
/// master is mixed once, then each label byte is folded in and re-mixed.
pub fn derive_seed(master: u64, label: &str) -> u64 {
    label
        .bytes()
        .fold(splitmix64(master), |h, b| splitmix64(h ^ u64::from(b)))
}

/// Seeded stream for random draws. The same seed yields the same sequence on
/// every platform.
pub fn stream_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Seeds for every random consumer of a map session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapSeeds {
    /// Master seed (shown to the user so a map can be reproduced).
    pub master: u64,
    /// OpenSimplex seed.
    pub noise: u32,
    /// Stream for the frequency draw and river step scores.
    pub rivers: u64,
    /// Stream for per-tile elevation draws in the view.
    pub elevation: u64,
}

impl MapSeeds {
    /// Derive all sub-seeds from `master`.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            noise: derive_seed(master, "noise") as u32,
            rivers: derive_seed(master, "rivers"),
            elevation: derive_seed(master, "elevation"),
        }
    }

    /// River/frequency stream.
    pub fn river_rng(&self) -> ChaCha8Rng {
        stream_rng(self.rivers)
    }

    /// Elevation stream.
    pub fn elevation_rng(&self) -> ChaCha8Rng {
        stream_rng(self.elevation)
    }
}
