//! Helpers shared by the integration suites.
#![allow(dead_code, reason = "each suite uses a different subset")]

use proptest::test_runner::Config as ProptestConfig;
use rand::{SeedableRng, rngs::SmallRng};
use smallworld_core::{Graph, ring_lattice};
use smallworld_test_support::ci::property_test_profile::ProptestRunProfile;

/// Builds a proptest configuration from the shared run profile.
#[must_use]
pub fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

#[must_use]
pub fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[must_use]
pub fn lattice(vertices: usize, degree: usize) -> Graph {
    ring_lattice(vertices, degree).expect("lattice parameters must be valid")
}
