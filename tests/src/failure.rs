// src/failure.rs

use kcl_api::{Kem, SerializeSecret};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

/// Outcome of a decryption-failure measurement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    pub algorithm: &'static str,
    pub trials: usize,
    pub mismatches: usize,
}

impl FailureReport {
    /// Observed fraction of trials whose shared secrets differed
    pub fn rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.mismatches as f64 / self.trials as f64
    }
}

/// Run `trials` independent keypair / encapsulate / decapsulate cycles.
///
/// Every trial uses a fresh keypair. The rng is seeded from `seed`, so a
/// report can be reproduced exactly. Mismatching shared secrets are counted,
/// never reported as errors: the KEM has no way to detect them.
pub fn measure_failures<K: Kem>(trials: usize, seed: u64) -> kcl_api::Result<FailureReport> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut mismatches = 0;

    for _ in 0..trials {
        let keypair = K::keypair(&mut rng)?;
        let pk = K::public_key(&keypair);
        let sk = K::secret_key(&keypair);
        let (ct, ss_enc) = K::encapsulate(&mut rng, &pk)?;
        let ss_dec = K::decapsulate(&sk, &ct)?;
        if *ss_enc.to_bytes_zeroizing() != *ss_dec.to_bytes_zeroizing() {
            mismatches += 1;
        }
    }

    Ok(FailureReport {
        algorithm: K::name(),
        trials,
        mismatches,
    })
}
