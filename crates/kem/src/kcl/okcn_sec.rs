//! OKCN-SEC KEM: Ring-LWE over Z_12289[x]/(x^1024 + 1), OKCN reconciliation.

use super::kem::KclKem;
use super::params::OkcnSecParams;

/// OKCN-SEC KEM, implementing `kcl_api::Kem`.
pub type OkcnSec = KclKem<OkcnSecParams, 1024>;
