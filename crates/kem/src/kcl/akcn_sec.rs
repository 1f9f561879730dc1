//! AKCN-SEC KEM: Ring-LWE over Z_12289[x]/(x^1024 + 1), AKCN reconciliation.

use super::kem::KclKem;
use super::params::AkcnSecParams;

/// AKCN-SEC KEM, implementing `kcl_api::Kem`.
pub type AkcnSec = KclKem<AkcnSecParams, 1024>;
