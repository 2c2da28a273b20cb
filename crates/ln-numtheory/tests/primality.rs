use ln_bigint::BigInt;
use ln_numtheory::{
    gcd, lehmann_test, pow, pow_mod, rabin_miller_test, solovay_strassen_test, PrimalityTest,
};
use ln_random::GeneratorKind;
use proptest::prelude::*;
use rstest::rstest;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[rstest]
fn test_primes_are_reported_prime(
    #[values(PrimalityTest::SolovayStrassen, PrimalityTest::Lehmann, PrimalityTest::RabinMiller)]
    test: PrimalityTest,
    #[values(GeneratorKind::General, GeneratorKind::Evenly, GeneratorKind::QuadCon)] kind: GeneratorKind,
    #[values("2", "3", "97", "7919", "1000000007", "170141183460469231731687303715884105727")] n: &str,
) {
    let mut rng = kind.build(1034);
    let confidence = test.run(&big(n), 20, rng.as_mut()).unwrap();
    assert!(confidence > 0.999, "{} gave {} for prime {}", test, confidence, n);
}

#[rstest]
fn test_composites_are_rejected(
    #[values(PrimalityTest::SolovayStrassen, PrimalityTest::Lehmann, PrimalityTest::RabinMiller)]
    test: PrimalityTest,
    #[values(GeneratorKind::General, GeneratorKind::Evenly, GeneratorKind::QuadCon)] kind: GeneratorKind,
    #[values("4", "25", "100", "561", "1105", "999999999999999999999")] n: &str,
) {
    let mut rng = kind.build(1034);
    assert_eq!(test.run(&big(n), 40, rng.as_mut()).unwrap(), 0.0, "{} accepted {}", test, n);
}

#[test]
fn test_rabin_miller_flags_carmichael_numbers() {
    let mut rng = GeneratorKind::General.build(561);
    for n in ["561", "41041", "825265", "321197185"] {
        assert_eq!(rabin_miller_test(&big(n), 20, rng.as_mut()).unwrap(), 0.0);
    }
}

#[test]
fn test_confidence_grows_with_iterations() {
    let mut rng = GeneratorKind::General.build(0);
    let p = big("7919");
    let few = solovay_strassen_test(&p, 2, rng.as_mut()).unwrap();
    let many = solovay_strassen_test(&p, 30, rng.as_mut()).unwrap();
    assert!(few < many);
    approx::assert_relative_eq!(few, 0.75);
    approx::assert_relative_eq!(lehmann_test(&p, 3, rng.as_mut()).unwrap(), 0.875);
    approx::assert_relative_eq!(rabin_miller_test(&p, 2, rng.as_mut()).unwrap(), 0.9375);
}

#[test]
fn test_gcd_of_48_and_18() {
    assert_eq!(gcd(&big("48"), &big("18")), big("6"));
}

#[test]
fn test_pow_mod_large_exponent() {
    // Fermat: 2^(p-1) = 1 mod p for the Mersenne prime 2^127 - 1.
    let p = big("170141183460469231731687303715884105727");
    let e = &p - BigInt::one();
    assert_eq!(pow_mod(&big("2"), &e, &p).unwrap(), BigInt::one());
}

proptest! {
    #[test]
    fn test_pow_mod_matches_pow(b in -50i64..50, e in 0u32..40, m in 1i64..1000) {
        let (b, e, m) = (BigInt::from(b), BigInt::from(e), BigInt::from(m));
        let expected = pow(&b, &e).unwrap().rem_euclid(&m).unwrap();
        prop_assert_eq!(pow_mod(&b, &e, &m).unwrap(), expected);
    }

    #[test]
    fn test_gcd_recurrence(a in -100_000i64..100_000, b in 1i64..100_000) {
        let (a, b) = (BigInt::from(a), BigInt::from(b));
        let r = a.rem_euclid(&b).unwrap();
        prop_assert_eq!(gcd(&a, &b), gcd(&b, &r));
        prop_assert_eq!(gcd(&a, &BigInt::zero()), a.abs());
    }
}
