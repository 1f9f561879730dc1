// tests/kat_tests.rs
// All-zero-seed regression vectors for the four parameter sets

use kcl_api::{Kem, Serialize, SerializeSecret};
use kcl_kem::kcl::{AkcnMlweParams, AkcnSecParams, KclKem, KclParams, OkcnMlweParams, OkcnSecParams};
use kcl_params::pqc::kcl::{KCL_ENCAPS_SEED_BYTES, KCL_KEYPAIR_SEED_BYTES, KCL_MATRIX_SEED_BYTES};

/// Leading bytes of the all-zero-seed outputs of one parameter set
struct ZeroSeedVector {
    /// `pk[32..64]`, the start of the packed Y1
    public_vector: &'static str,
    /// `ct[..32]`, the start of the packed Y2
    ciphertext: &'static str,
    /// `ss[..32]`
    shared_secret: &'static str,
}

/// keypair(0^63), encapsulate(0^31), decapsulate, twice over
fn zero_seed_vector<P: KclParams<N>, const N: usize>(expected: &ZeroSeedVector) {
    let keypair_seed = [0u8; KCL_KEYPAIR_SEED_BYTES];
    let encaps_seed = [0u8; KCL_ENCAPS_SEED_BYTES];

    let (pk, sk) = KclKem::<P, N>::keypair_derand(&keypair_seed).unwrap();
    let (ct, ss_enc) = KclKem::<P, N>::encapsulate_derand(&pk, &encaps_seed).unwrap();
    let ss_dec = <KclKem<P, N> as Kem>::decapsulate(&sk, &ct).unwrap();

    assert_eq!(pk.as_ref().len(), P::PUBLIC_KEY_BYTES);
    assert_eq!(sk.as_ref().len(), P::SECRET_KEY_BYTES);
    assert_eq!(ct.as_ref().len(), P::CIPHERTEXT_BYTES);
    assert_eq!(ss_enc.as_ref().len(), P::SHARED_SECRET_BYTES);
    assert_eq!(
        ss_enc,
        ss_dec,
        "{}: shared secrets differ for the all-zero seeds (ct {}..)",
        P::NAME,
        hex::encode(&ct.as_ref()[..16])
    );

    // the matrix seed travels verbatim at the front of the public key
    assert!(pk.as_ref()[..KCL_MATRIX_SEED_BYTES].iter().all(|&b| b == 0));
    assert_eq!(
        hex::encode(&pk.as_ref()[KCL_MATRIX_SEED_BYTES..KCL_MATRIX_SEED_BYTES + 32]),
        expected.public_vector,
        "{} public vector",
        P::NAME
    );
    assert_eq!(hex::encode(&ct.as_ref()[..32]), expected.ciphertext, "{} ciphertext", P::NAME);
    assert_eq!(
        hex::encode(&ss_enc.to_bytes_zeroizing()[..32]),
        expected.shared_secret,
        "{} shared secret",
        P::NAME
    );

    let (pk2, sk2) = KclKem::<P, N>::keypair_derand(&keypair_seed).unwrap();
    let (ct2, ss2) = KclKem::<P, N>::encapsulate_derand(&pk2, &encaps_seed).unwrap();
    assert_eq!(pk.to_bytes(), pk2.to_bytes());
    assert!(sk == sk2);
    assert_eq!(ct.to_bytes(), ct2.to_bytes());
    assert_eq!(ss_enc, ss2);
}

#[test]
fn test_akcn_mlwe_zero_seed() {
    zero_seed_vector::<AkcnMlweParams, 256>(&ZeroSeedVector {
        public_vector: "215fea9a9068504373156417a7b1002a2c152b071a8bada03415963a56f54db1",
        ciphertext: "b81137c089512c29874fd745c254284b88a1a8c95bc0c472fa67b6ebe4480bb0",
        shared_secret: "83be37797310e0a84c9a24f41e516db1f4e44dedb2d2dacc4814c13a29c4dcb0",
    });
}

#[test]
fn test_okcn_mlwe_zero_seed() {
    zero_seed_vector::<OkcnMlweParams, 256>(&ZeroSeedVector {
        public_vector: "215fea9a9068504373156417a7b1002a2c152b071a8bada03415963a56f54db1",
        ciphertext: "b81137c089512c29874fd745c254284b88a1a8c95bc0c472fa67b6ebe4480bb0",
        shared_secret: "83be37597330e0a84c9a64e41e516db1f4e44dedb3d2dacc4814c13a29c4dcb0",
    });
}

#[test]
fn test_akcn_sec_zero_seed() {
    zero_seed_vector::<AkcnSecParams, 1024>(&ZeroSeedVector {
        public_vector: "02a7f5c5924e9fb7aada8207fa323d4e9314f8e97d851bc2b21da7a83550bea8",
        ciphertext: "02a7f5c5924e9fb7aada8207fa323d4e9314f8e97d851bc2b21da7a83550bea8",
        shared_secret: "86573146161e86f39e356b4faf3cb79ea63ceb6d80217c4f283817b9cc7b7b2e",
    });
}

#[test]
fn test_okcn_sec_zero_seed() {
    zero_seed_vector::<OkcnSecParams, 1024>(&ZeroSeedVector {
        public_vector: "02d0170c94ebf9eb6d821028d1e4ea653e757d8a6f1591dcf60ea8bed016d3b7",
        ciphertext: "02d0170c94ebf9eb6d821028d1e4ea653e757d8a6f1591dcf60ea8bed016d3b7",
        shared_secret: "86173146161e86fbd2b56b0fbf3cb79ea63ceb7da2211c5f283015b9cc7b7b2e",
    });
}

#[test]
fn test_variants_share_matrix_but_not_keys() {
    // same seed, same ring: the AKCN and OKCN module sets differ only in
    // their consensus, so their key generation is identical
    let seed = [0u8; KCL_KEYPAIR_SEED_BYTES];
    let (pk_a, _) = KclKem::<AkcnMlweParams, 256>::keypair_derand(&seed).unwrap();
    let (pk_o, _) = KclKem::<OkcnMlweParams, 256>::keypair_derand(&seed).unwrap();
    assert_eq!(pk_a.as_ref(), pk_o.as_ref());

    let (ct_a, _) = KclKem::<AkcnMlweParams, 256>::encapsulate_derand(&pk_a, &[0u8; 31]).unwrap();
    let (ct_o, _) = KclKem::<OkcnMlweParams, 256>::encapsulate_derand(&pk_o, &[0u8; 31]).unwrap();
    assert_ne!(ct_a.as_ref().len(), ct_o.as_ref().len());
    // the y2 halves agree byte for byte
    let split = kcl_params::pqc::kcl::AKCN_MLWE.truncated_vec_bytes();
    assert_eq!(&ct_a.as_ref()[..split], &ct_o.as_ref()[..split]);
}
