//! OKCN-MLWE KEM: rank-3 Module-LWE over Z_7681[x]/(x^256 + 1), OKCN reconciliation.

use super::kem::KclKem;
use super::params::OkcnMlweParams;

/// OKCN-MLWE KEM, implementing `kcl_api::Kem`.
pub type OkcnMlwe = KclKem<OkcnMlweParams, 256>;
