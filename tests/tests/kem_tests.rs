// tests/kem_tests.rs
// Round trips, decoding failures and tamper behaviour across all four KEMs

use kcl_api::{Kem, Serialize, SerializeSecret};
use kcl_kem::kcl::{
    AkcnMlwe, AkcnMlweParams, AkcnSec, AkcnSecParams, KclCiphertext, KclKem, KclParams,
    KclPublicKey, KclSecretKey, KclSharedSecret, OkcnMlwe, OkcnMlweParams, OkcnSec,
    OkcnSecParams,
};
use kcl_params::pqc::kcl::{KclParamSet, AKCN_MLWE, AKCN_SEC, OKCN_MLWE, OKCN_SEC};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn round_trip_through_bytes<P: KclParams<N>, const N: usize>(seed: u64) {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let (pk, sk) = KclKem::<P, N>::keypair(&mut rng).unwrap();

    // every object survives a trip through its byte encoding
    let pk = <KclPublicKey<P> as Serialize>::from_bytes(&pk.to_bytes()).unwrap();
    let sk = <KclSecretKey<P> as SerializeSecret>::from_bytes(&sk.to_bytes_zeroizing()).unwrap();

    let (ct, ss_enc) = KclKem::<P, N>::encapsulate(&mut rng, &pk).unwrap();
    let ct = <KclCiphertext<P> as Serialize>::from_bytes(&ct.to_bytes()).unwrap();
    let ss_dec = KclKem::<P, N>::decapsulate(&sk, &ct).unwrap();

    assert_eq!(ss_enc, ss_dec, "{} round trip", P::NAME);
    let ss_copy =
        <KclSharedSecret<P> as SerializeSecret>::from_bytes(&ss_dec.to_bytes_zeroizing()).unwrap();
    assert_eq!(ss_copy, ss_enc);
}

#[test]
fn test_round_trip_all_variants() {
    for seed in 0..4 {
        round_trip_through_bytes::<AkcnMlweParams, 256>(seed);
        round_trip_through_bytes::<OkcnMlweParams, 256>(seed);
    }
    round_trip_through_bytes::<AkcnSecParams, 1024>(100);
    round_trip_through_bytes::<OkcnSecParams, 1024>(100);
}

#[test]
fn test_sizes_match_parameter_table() {
    fn check<P: KclParams<N>, const N: usize>(set: &KclParamSet) {
        assert!(set.sizes_consistent(), "{}", set.name);
        assert_eq!(KclPublicKey::<P>::SIZE, set.public_key_size);
        assert_eq!(KclSecretKey::<P>::SIZE, set.secret_key_size);
        assert_eq!(KclCiphertext::<P>::SIZE, set.ciphertext_size);
        assert_eq!(KclSharedSecret::<P>::SIZE, set.shared_secret_size);
        assert_eq!(KclKem::<P, N>::name(), set.name);
    }
    check::<AkcnMlweParams, 256>(&AKCN_MLWE);
    check::<OkcnMlweParams, 256>(&OKCN_MLWE);
    check::<AkcnSecParams, 1024>(&AKCN_SEC);
    check::<OkcnSecParams, 1024>(&OKCN_SEC);
}

#[test]
fn test_fresh_randomness_per_call() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let (pk1, _) = AkcnMlwe::keypair(&mut rng).unwrap();
    let (pk2, _) = AkcnMlwe::keypair(&mut rng).unwrap();
    assert_ne!(pk1, pk2);

    let (ct1, ss1) = AkcnMlwe::encapsulate(&mut rng, &pk1).unwrap();
    let (ct2, ss2) = AkcnMlwe::encapsulate(&mut rng, &pk1).unwrap();
    assert_ne!(ct1, ct2);
    assert_ne!(ss1, ss2);
}

#[test]
fn test_wrong_secret_key_disagrees() {
    let mut rng = ChaChaRng::seed_from_u64(8);
    let (pk, _) = OkcnMlwe::keypair(&mut rng).unwrap();
    let (_, other_sk) = OkcnMlwe::keypair(&mut rng).unwrap();
    let (ct, ss) = OkcnMlwe::encapsulate(&mut rng, &pk).unwrap();
    let wrong = OkcnMlwe::decapsulate(&other_sk, &ct).unwrap();
    assert_ne!(ss, wrong);
}

#[test]
fn test_wrong_lengths_rejected() {
    assert!(<KclPublicKey<AkcnMlweParams> as Serialize>::from_bytes(&[]).is_err());
    assert!(<KclPublicKey<OkcnSecParams> as Serialize>::from_bytes(&[0u8; 1185]).is_err());
    assert!(<KclCiphertext<AkcnSecParams> as Serialize>::from_bytes(&[0u8; 1791]).is_err());
    assert!(<KclCiphertext<OkcnMlweParams> as Serialize>::from_bytes(&[0u8; 992]).is_err());
    assert!(<KclSecretKey<OkcnMlweParams> as SerializeSecret>::from_bytes(&[0u8; 289]).is_err());
    assert!(<KclSharedSecret<AkcnSecParams> as SerializeSecret>::from_bytes(&[0u8; 32]).is_err());

    let short: Result<KclPublicKey<AkcnMlweParams>, _> = vec![0u8; 10].try_into();
    assert!(short.is_err());
}

#[test]
fn test_inverted_signal_changes_secret() {
    // AKCN signals use the full 4-bit range, so any bit pattern decodes
    fn check<P: KclParams<N>, const N: usize>(set: &KclParamSet) {
        let (pk, sk) = KclKem::<P, N>::keypair_derand(&[0x42; 63]).unwrap();
        let (mut ct, ss) = KclKem::<P, N>::encapsulate_derand(&pk, &[0x24; 31]).unwrap();
        for b in ct.as_mut()[set.truncated_vec_bytes()..].iter_mut() {
            *b ^= 0xFF;
        }
        let tampered = KclKem::<P, N>::decapsulate(&sk, &ct).unwrap();
        assert_ne!(ss, tampered, "{}", set.name);
    }
    check::<AkcnMlweParams, 256>(&AKCN_MLWE);
    check::<AkcnSecParams, 1024>(&AKCN_SEC);
}

#[test]
fn test_tampered_okcn_ciphertext_never_panics() {
    // inverted 3- or 4-bit OKCN signals may leave [0, g); those must be
    // rejected, the rest decapsulate to a different secret
    fn check<P: KclParams<N>, const N: usize>(set: &KclParamSet) {
        let (pk, sk) = KclKem::<P, N>::keypair_derand(&[0x11; 63]).unwrap();
        let (mut ct, ss) = KclKem::<P, N>::encapsulate_derand(&pk, &[0x22; 31]).unwrap();
        for b in ct.as_mut()[set.truncated_vec_bytes()..].iter_mut() {
            *b ^= 0xFF;
        }
        if let Ok(tampered) = KclKem::<P, N>::decapsulate(&sk, &ct) {
            assert_ne!(ss, tampered, "{}", set.name);
        }
    }
    check::<OkcnMlweParams, 256>(&OKCN_MLWE);
    check::<OkcnSecParams, 1024>(&OKCN_SEC);
}

#[test]
fn test_out_of_range_encodings_are_errors() {
    // a public vector of all-ones truncated values detruncates past q
    let (pk, sk) = AkcnSec::keypair_derand(&[3u8; 63]).unwrap();
    let mut bad_pk = pk.to_bytes();
    for b in bad_pk[32..].iter_mut() {
        *b = 0xFF;
    }
    let bad_pk = <KclPublicKey<AkcnSecParams> as Serialize>::from_bytes(&bad_pk).unwrap();
    assert!(AkcnSec::encapsulate_derand(&bad_pk, &[0u8; 31]).is_err());

    // the same for the y2 half of a ciphertext
    let (ct, _) = AkcnSec::encapsulate_derand(&pk, &[0u8; 31]).unwrap();
    let mut bad_ct = ct.to_bytes();
    for b in bad_ct[..AKCN_SEC.truncated_vec_bytes()].iter_mut() {
        *b = 0xFF;
    }
    let bad_ct = <KclCiphertext<AkcnSecParams> as Serialize>::from_bytes(&bad_ct).unwrap();
    assert!(AkcnSec::decapsulate(&sk, &bad_ct).is_err());

    // secret coefficients above 2η
    let bad_sk = <KclSecretKey<OkcnSecParams> as SerializeSecret>::from_bytes(&[0xFF; 384]).unwrap();
    let (pk, _) = OkcnSec::keypair_derand(&[3u8; 63]).unwrap();
    let (ct, _) = OkcnSec::encapsulate_derand(&pk, &[0u8; 31]).unwrap();
    assert!(OkcnSec::decapsulate(&bad_sk, &ct).is_err());
}

#[test]
fn test_errors_convert_to_api_errors() {
    let bad = <KclPublicKey<OkcnMlweParams> as Serialize>::from_bytes(&[0xFF; 896]).unwrap();
    let mut rng = ChaChaRng::seed_from_u64(0);
    let err = OkcnMlwe::encapsulate(&mut rng, &bad).unwrap_err();
    assert!(matches!(err, kcl_api::Error::InvalidKey { .. }), "{:?}", err);
}
