mod common;

#[cfg(test)]
mod tests {
    use crate::common::{f17, F17};
    use ark_bls12_381::Fr;
    use ark_ff::{Field, UniformRand};
    use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};
    use rust_kzg_bls12_381_primitives::{
        consts::PRIMITIVE_ROOT_OF_UNITY, domain::Domain, errors::KzgError, fft::fft,
    };

    #[test]
    fn test_domain_small_field() {
        let domain = Domain::<F17>::new(4).unwrap();
        assert_eq!(domain.width(), 4);
        assert_eq!(domain.roots_of_unity(), f17(&[1, 13, 16, 4]).as_slice());
        assert_eq!(
            domain.inverse_roots_of_unity(),
            f17(&[1, 4, 16, 13]).as_slice()
        );
        // 4 * 13 = 52 = 1 mod 17
        assert_eq!(*domain.width_inverse(), F17::from(13u64));
        assert_eq!(domain.index_of(&F17::from(16u64)), Some(2));
        assert_eq!(domain.index_of(&F17::from(2u64)), None);
        assert_eq!(domain.get_nth_root_of_unity(1), Some(&F17::from(13u64)));
        assert_eq!(domain.get_nth_root_of_unity(4), None);
    }

    #[test]
    fn test_domain_errors() {
        assert!(matches!(
            Domain::<F17>::new(0),
            Err(KzgError::InvalidInput(_))
        ));
        assert!(matches!(
            Domain::<F17>::new(3),
            Err(KzgError::InvalidInput(_))
        ));
        // 32 does not divide 16, the order of the multiplicative group.
        assert!(matches!(Domain::<F17>::new(32), Err(KzgError::FFTError(_))));
    }

    #[test]
    fn test_bls_root_of_unity_is_power_of_generator() {
        let domain = Domain::<Fr>::new(4).unwrap();

        // (p - 1) / 4, from (p - 1) / 2 shifted right by one bit.
        let mut exponent = <Fr as ark_ff::PrimeField>::MODULUS_MINUS_ONE_DIV_TWO.0;
        for i in 0..exponent.len() {
            let carry = if i + 1 < exponent.len() {
                exponent[i + 1] << 63
            } else {
                0
            };
            exponent[i] = (exponent[i] >> 1) | carry;
        }

        let expected = Fr::from(PRIMITIVE_ROOT_OF_UNITY).pow(exponent);
        assert_eq!(domain.roots_of_unity()[1], expected);
        assert_eq!(expected.square(), -Fr::from(1u64));
    }

    #[test]
    fn test_fft_small_field() {
        let domain = Domain::<F17>::new(4).unwrap();
        let evals = fft(&f17(&[1, 2, 3, 4]), domain.roots_of_unity()).unwrap();
        assert_eq!(evals, f17(&[10, 6, 15, 7]));
        assert_eq!(domain.fft(&f17(&[1, 2, 3, 4])).unwrap(), evals);
        assert_eq!(domain.ifft(&evals).unwrap(), f17(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_fft_single_element() {
        let value = vec![F17::from(9u64)];
        assert_eq!(fft(&value, &[F17::from(1u64)]).unwrap(), value);
    }

    #[test]
    fn test_fft_round_trip() {
        let mut rng = rand::thread_rng();
        for width in [2usize, 8, 64] {
            let domain = Domain::<Fr>::new(width).unwrap();
            let coeffs: Vec<Fr> = (0..width).map(|_| Fr::rand(&mut rng)).collect();
            let evals = domain.fft(&coeffs).unwrap();
            assert_eq!(domain.ifft(&evals).unwrap(), coeffs);
        }
    }

    #[test]
    fn test_fft_matches_ark_poly() {
        // Large enough to take the parallel path.
        let width = 2048;
        let mut rng = rand::thread_rng();
        let coeffs: Vec<Fr> = (0..width).map(|_| Fr::rand(&mut rng)).collect();

        let domain = Domain::<Fr>::new(width).unwrap();
        let reference = GeneralEvaluationDomain::<Fr>::new(width).unwrap();
        assert_eq!(domain.fft(&coeffs).unwrap(), reference.fft(&coeffs));
        assert_eq!(domain.ifft(&coeffs).unwrap(), reference.ifft(&coeffs));
    }

    #[test]
    fn test_fft_errors() {
        let domain = Domain::<F17>::new(4).unwrap();
        assert!(matches!(
            fft(&f17(&[1, 2, 3]), domain.roots_of_unity()),
            Err(KzgError::InvalidInput(_))
        ));
        assert!(matches!(
            fft(&f17(&[1, 2, 3]), &f17(&[1, 2, 3])),
            Err(KzgError::InvalidInput(_))
        ));
        assert!(matches!(
            fft::<F17>(&[], &[]),
            Err(KzgError::InvalidInput(_))
        ));
        assert!(domain.ifft(&f17(&[1, 2, 3, 4, 5])).is_err());
    }
}
