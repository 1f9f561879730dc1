//! KCL KEM types and the `kcl_api::Kem` implementation.

use core::fmt;
use core::marker::PhantomData;

use kcl_api::error::validate;
use kcl_api::{Kem as KemTrait, Result as ApiResult, SecretBytes, Serialize, SerializeSecret};
use kcl_internal::constant_time::ct_eq;
use kcl_params::pqc::kcl::{KCL_ENCAPS_SEED_BYTES, KCL_KEYPAIR_SEED_BYTES};
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::engine;
use super::params::{KclParams, KclVariant};
use crate::error::{Error, Result};

/// KCL public key: matrix seed followed by the truncated public vector.
pub struct KclPublicKey<V: KclVariant> {
    bytes: Vec<u8>,
    _variant: PhantomData<fn() -> V>,
}

/// KCL secret key: the packed secret vector. Zeroized on drop.
pub struct KclSecretKey<V: KclVariant> {
    bytes: Vec<u8>,
    _variant: PhantomData<fn() -> V>,
}

/// KCL ciphertext: truncated vector followed by the packed signal.
pub struct KclCiphertext<V: KclVariant> {
    bytes: Vec<u8>,
    _variant: PhantomData<fn() -> V>,
}

/// KCL shared secret: one agreed bit per ring coefficient. Zeroized on drop.
pub struct KclSharedSecret<V: KclVariant> {
    bytes: Vec<u8>,
    _variant: PhantomData<fn() -> V>,
}

macro_rules! byte_newtype_common {
    ($name:ident, $size:ident) => {
        impl<V: KclVariant> $name<V> {
            /// Exact encoded size for this parameter set
            pub const SIZE: usize = V::SET.$size;

            fn from_vec(bytes: Vec<u8>) -> Self {
                debug_assert_eq!(bytes.len(), Self::SIZE);
                Self {
                    bytes,
                    _variant: PhantomData,
                }
            }

            fn checked(bytes: &[u8]) -> ApiResult<Self> {
                validate::length(stringify!($name), bytes.len(), Self::SIZE)?;
                Ok(Self::from_vec(bytes.to_vec()))
            }
        }

        impl<V: KclVariant> AsRef<[u8]> for $name<V> {
            fn as_ref(&self) -> &[u8] {
                &self.bytes
            }
        }

        impl<V: KclVariant> Clone for $name<V> {
            fn clone(&self) -> Self {
                Self::from_vec(self.bytes.clone())
            }
        }
    };
}

byte_newtype_common!(KclPublicKey, public_key_size);
byte_newtype_common!(KclSecretKey, secret_key_size);
byte_newtype_common!(KclCiphertext, ciphertext_size);
byte_newtype_common!(KclSharedSecret, shared_secret_size);

macro_rules! public_bytes {
    ($name:ident) => {
        impl<V: KclVariant> Serialize for $name<V> {
            fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
                Self::checked(bytes)
            }

            fn to_bytes(&self) -> Vec<u8> {
                self.bytes.clone()
            }
        }

        impl<V: KclVariant> AsMut<[u8]> for $name<V> {
            fn as_mut(&mut self) -> &mut [u8] {
                &mut self.bytes
            }
        }

        impl<V: KclVariant> PartialEq for $name<V> {
            fn eq(&self, other: &Self) -> bool {
                self.bytes == other.bytes
            }
        }

        impl<V: KclVariant> Eq for $name<V> {}

        impl<V: KclVariant> fmt::Debug for $name<V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>(", stringify!($name), V::SET.name)?;
                for b in self.bytes.iter().take(8) {
                    write!(f, "{:02x}", b)?;
                }
                write!(f, "..; {} bytes)", self.bytes.len())
            }
        }

        impl<V: KclVariant> TryFrom<Vec<u8>> for $name<V> {
            type Error = kcl_api::Error;

            fn try_from(bytes: Vec<u8>) -> ApiResult<Self> {
                validate::length(stringify!($name), bytes.len(), Self::SIZE)?;
                Ok(Self::from_vec(bytes))
            }
        }

        impl<V: KclVariant> From<$name<V>> for Vec<u8> {
            fn from(value: $name<V>) -> Vec<u8> {
                value.bytes
            }
        }

        #[cfg(feature = "serde")]
        impl<V: KclVariant> serde::Serialize for $name<V> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
                serializer.serialize_bytes(&self.bytes)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de, V: KclVariant> serde::Deserialize<'de> for $name<V> {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
                let bytes = <Vec<u8> as serde::Deserialize>::deserialize(deserializer)?;
                Self::try_from(bytes).map_err(serde::de::Error::custom)
            }
        }
    };
}

public_bytes!(KclPublicKey);
public_bytes!(KclCiphertext);

macro_rules! secret_bytes {
    ($name:ident) => {
        impl<V: KclVariant> SerializeSecret for $name<V> {
            fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
                Self::checked(bytes)
            }

            fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
                Zeroizing::new(self.bytes.clone())
            }
        }

        impl<V: KclVariant> Zeroize for $name<V> {
            fn zeroize(&mut self) {
                self.bytes.zeroize();
            }
        }

        impl<V: KclVariant> Drop for $name<V> {
            fn drop(&mut self) {
                self.zeroize();
            }
        }

        impl<V: KclVariant> ZeroizeOnDrop for $name<V> {}

        impl<V: KclVariant> fmt::Debug for $name<V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>[REDACTED]", stringify!($name), V::SET.name)
            }
        }
    };
}

secret_bytes!(KclSecretKey);
secret_bytes!(KclSharedSecret);

impl<V: KclVariant> KclSecretKey<V> {
    fn from_zeroizing(bytes: Zeroizing<Vec<u8>>) -> Self {
        Self::from_vec(bytes.to_vec())
    }
}

impl<V: KclVariant> KclSharedSecret<V> {
    fn from_zeroizing(bytes: Zeroizing<Vec<u8>>) -> Self {
        Self::from_vec(bytes.to_vec())
    }
}

impl<V: KclVariant> PartialEq for KclSecretKey<V> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.bytes, &other.bytes)
    }
}

impl<V: KclVariant> Eq for KclSecretKey<V> {}

impl<V: KclVariant> ConstantTimeEq for KclSharedSecret<V> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.as_slice().ct_eq(other.bytes.as_slice())
    }
}

impl<V: KclVariant> PartialEq for KclSharedSecret<V> {
    fn eq(&self, other: &Self) -> bool {
        ConstantTimeEq::ct_eq(self, other).into()
    }
}

impl<V: KclVariant> Eq for KclSharedSecret<V> {}

/// The KCL key encapsulation mechanism for parameter set `P` over degree `N`
pub struct KclKem<P: KclParams<N>, const N: usize> {
    _params: PhantomData<P>,
}

impl<P: KclParams<N>, const N: usize> KclKem<P, N> {
    /// Deterministic keypair from a 63-byte seed (matrix seed ‖ noise seed).
    pub fn keypair_derand(
        seed: &[u8; KCL_KEYPAIR_SEED_BYTES],
    ) -> Result<(KclPublicKey<P>, KclSecretKey<P>)> {
        let (pk, sk) = engine::keypair::<P, N>(seed)?;
        Ok((KclPublicKey::from_vec(pk), KclSecretKey::from_zeroizing(sk)))
    }

    /// Deterministic encapsulation from a 31-byte noise seed.
    pub fn encapsulate_derand(
        public_key: &KclPublicKey<P>,
        seed: &[u8; KCL_ENCAPS_SEED_BYTES],
    ) -> Result<(KclCiphertext<P>, KclSharedSecret<P>)> {
        let (ct, ss) = engine::encapsulate::<P, N>(&public_key.bytes, seed)?;
        Ok((KclCiphertext::from_vec(ct), KclSharedSecret::from_zeroizing(ss)))
    }
}

impl<P: KclParams<N>, const N: usize> KemTrait for KclKem<P, N> {
    type PublicKey = KclPublicKey<P>;
    type SecretKey = KclSecretKey<P>;
    type SharedSecret = KclSharedSecret<P>;
    type Ciphertext = KclCiphertext<P>;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let seed = SecretBytes::<KCL_KEYPAIR_SEED_BYTES>::random(rng).map_err(|_| {
            Error::KeyGeneration {
                algorithm: P::NAME,
                details: "rng failed to produce a keypair seed",
            }
        })?;
        Ok(Self::keypair_derand(&seed)?)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let seed = SecretBytes::<KCL_ENCAPS_SEED_BYTES>::random(rng).map_err(|_| {
            Error::Encapsulation {
                algorithm: P::NAME,
                details: "rng failed to produce an encapsulation seed",
            }
        })?;
        Ok(Self::encapsulate_derand(public_key, &seed)?)
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let ss = engine::decapsulate::<P, N>(&secret_key.bytes, &ciphertext.bytes)?;
        Ok(KclSharedSecret::from_zeroizing(ss))
    }
}
