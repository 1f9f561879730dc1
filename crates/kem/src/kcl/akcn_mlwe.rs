//! AKCN-MLWE KEM: rank-3 Module-LWE over Z_7681[x]/(x^256 + 1), AKCN reconciliation.

use super::kem::KclKem;
use super::params::AkcnMlweParams;

/// AKCN-MLWE KEM, implementing `kcl_api::Kem`.
pub type AkcnMlwe = KclKem<AkcnMlweParams, 256>;
