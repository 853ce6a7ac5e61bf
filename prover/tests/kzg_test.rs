#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ark_bls12_381::{Fr, G1Affine, G1Projective};
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::{Field, UniformRand, Zero};
    use lazy_static::lazy_static;
    use rust_kzg_bls12_381_primitives::{
        blob::Blob,
        errors::KzgError,
        helpers::{compute_challenge, g1_lincomb},
        polynomial::{PolynomialCoeffForm, PolynomialEvalForm},
        setup::TrustedSetup,
    };
    use rust_kzg_bls12_381_prover::kzg::KZG;

    lazy_static! {
        static ref TAU: Fr = Fr::from(987_654_321u64);
        static ref KZG_4: KZG = KZG::new(Arc::new(
            TrustedSetup::insecure_from_secret(&TAU, 4).unwrap()
        ));
        static ref KZG_8: KZG = KZG::new(Arc::new(
            TrustedSetup::insecure_from_secret(&TAU, 8).unwrap()
        ));
    }

    fn frs(values: &[u64]) -> Vec<Fr> {
        values.iter().map(|&v| Fr::from(v)).collect()
    }

    fn random_poly(width: usize) -> PolynomialEvalForm {
        let mut rng = rand::thread_rng();
        PolynomialEvalForm::new((0..width).map(|_| Fr::rand(&mut rng)).collect()).unwrap()
    }

    /// `[v]G1`
    fn g1_times(v: &Fr) -> G1Affine {
        (G1Affine::generator() * v).into_affine()
    }

    #[test]
    fn test_commit_blob_toy_setup() {
        let blob = Blob::from_field_elements(&frs(&[1, 2, 3, 4]));
        let commitment = KZG_4.commit_blob(&blob).unwrap();

        let lagrange = KZG_4.setup().g1_lagrange();
        let hand_computed = (lagrange[0].into_group()
            + lagrange[1] * Fr::from(2u64)
            + lagrange[2] * Fr::from(3u64)
            + lagrange[3] * Fr::from(4u64))
        .into_affine();
        assert_eq!(commitment, hand_computed);

        // [p(τ)]G1 for the interpolant p of [1, 2, 3, 4]
        let poly = blob.to_polynomial_eval_form().unwrap();
        let p_tau = poly.evaluate(&TAU, KZG_4.setup().domain()).unwrap();
        assert_eq!(commitment, g1_times(&p_tau));
    }

    #[test]
    fn test_commit_wrong_length_blobs() {
        for len in [3u64, 5] {
            let blob = Blob::from_field_elements(&frs(&(1..=len).collect::<Vec<_>>()));
            assert!(matches!(
                KZG_4.commit_blob(&blob),
                Err(KzgError::InvalidInput(_))
            ));
        }

        let too_wide = Blob::from_field_elements(&frs(&[1, 2, 3, 4, 5, 6, 7, 8]));
        assert!(matches!(
            KZG_4.commit_blob(&too_wide),
            Err(KzgError::InvalidInput(_))
        ));
        let too_narrow = PolynomialEvalForm::new(frs(&[1, 2])).unwrap();
        assert!(matches!(
            KZG_4.commit_eval_form(&too_narrow),
            Err(KzgError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_commit_split_halves() {
        let poly = random_poly(8);
        let lagrange = KZG_8.setup().g1_lagrange();
        let evals = poly.evaluations();

        let left = g1_lincomb(&lagrange[..4], &evals[..4]).unwrap();
        let right = g1_lincomb(&lagrange[4..], &evals[4..]).unwrap();
        assert_eq!(
            KZG_8.commit_eval_form(&poly).unwrap(),
            (left + right).into_affine()
        );
    }

    #[test]
    fn test_commit_coeff_and_eval_form_agree() {
        let poly = random_poly(8);
        let coeffs = poly.to_coeff_form(KZG_8.setup().domain()).unwrap();
        assert_eq!(
            KZG_8.commit_coeff_form(&coeffs).unwrap(),
            KZG_8.commit_eval_form(&poly).unwrap()
        );

        // fewer coefficients than the width
        let short = PolynomialCoeffForm::new(frs(&[5, 1]));
        assert_eq!(
            KZG_8.commit_coeff_form(&short).unwrap(),
            g1_times(&(Fr::from(5u64) + *TAU))
        );

        let too_long = PolynomialCoeffForm::new(vec![Fr::from(1u64); 9]);
        assert!(matches!(
            KZG_8.commit_coeff_form(&too_long),
            Err(KzgError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_commit_zero_polynomial() {
        let zero = PolynomialEvalForm::new(vec![Fr::zero(); 4]).unwrap();
        assert!(KZG_4.commit_eval_form(&zero).unwrap().is_zero());
    }

    #[test]
    fn test_commit_linear_combination() {
        let mut rng = rand::thread_rng();
        let blobs: Vec<Blob> = (0..3)
            .map(|_| Blob::from_field_elements(random_poly(8).evaluations()))
            .collect();
        let scalars: Vec<Fr> = (0..3).map(|_| Fr::rand(&mut rng)).collect();

        let expected = blobs
            .iter()
            .zip(&scalars)
            .fold(G1Projective::zero(), |acc, (blob, scalar)| {
                acc + KZG_8.commit_blob(blob).unwrap() * scalar
            })
            .into_affine();
        assert_eq!(
            KZG_8.commit_linear_combination(&blobs, &scalars).unwrap(),
            expected
        );

        assert!(KZG_8.commit_linear_combination(&[], &[]).unwrap().is_zero());
        assert!(matches!(
            KZG_8.commit_linear_combination(&blobs, &scalars[..2]),
            Err(KzgError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_proof_is_commitment_to_quotient() {
        let poly = random_poly(4);
        let domain = KZG_4.setup().domain();
        let z = Fr::from(11u64);
        let (proof, y) = KZG_4.compute_proof(&poly, &z).unwrap();
        assert_eq!(y, poly.evaluate(&z, domain).unwrap());

        // q(τ) = (p(τ) - y) / (τ - z)
        let p_tau = poly.evaluate(&TAU, domain).unwrap();
        let q_tau = (p_tau - y) * (*TAU - z).inverse().unwrap();
        assert_eq!(proof, g1_times(&q_tau));
    }

    #[test]
    fn test_proof_at_roots_of_unity() {
        let poly = random_poly(8);
        let domain = KZG_8.setup().domain();
        let p_tau = poly.evaluate(&TAU, domain).unwrap();

        for (i, root) in domain.roots_of_unity().iter().enumerate() {
            let (proof, y) = KZG_8.compute_proof_with_known_z_fr_index(&poly, i).unwrap();
            assert_eq!(y, poly.evaluations()[i]);

            let q_tau = (p_tau - y) * (*TAU - root).inverse().unwrap();
            assert_eq!(proof, g1_times(&q_tau));
        }

        assert!(matches!(
            KZG_8.compute_proof_with_known_z_fr_index(&poly, 8),
            Err(KzgError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_proof_coeff_form_matches_eval_form() {
        let mut rng = rand::thread_rng();
        let poly = random_poly(8);
        let coeffs = poly.to_coeff_form(KZG_8.setup().domain()).unwrap();

        for z in [Fr::rand(&mut rng), KZG_8.setup().domain().roots_of_unity()[3]] {
            let (eval_proof, eval_y) = KZG_8.compute_proof(&poly, &z).unwrap();
            let (coeff_proof, coeff_y) = KZG_8.compute_proof_coeff_form(&coeffs, &z).unwrap();
            assert_eq!(eval_y, coeff_y);
            assert_eq!(eval_proof, coeff_proof);
        }

        let constant = PolynomialCoeffForm::new(frs(&[7]));
        let (proof, y) = KZG_8
            .compute_proof_coeff_form(&constant, &Fr::from(2u64))
            .unwrap();
        assert!(proof.is_zero());
        assert_eq!(y, Fr::from(7u64));
    }

    #[test]
    fn test_proof_wrong_length() {
        let poly = random_poly(8);
        assert!(matches!(
            KZG_4.compute_proof(&poly, &Fr::from(3u64)),
            Err(KzgError::InvalidInput(_))
        ));
        let coeffs = PolynomialCoeffForm::new(vec![Fr::from(1u64); 5]);
        assert!(matches!(
            KZG_4.compute_proof_coeff_form(&coeffs, &Fr::from(3u64)),
            Err(KzgError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_blob_proof_opens_at_challenge() {
        let blob = Blob::from_field_elements(&frs(&[1, 2, 3, 4]));
        let commitment = KZG_4.commit_blob(&blob).unwrap();
        let proof = KZG_4.compute_blob_proof(&blob, &commitment).unwrap();

        let challenge = compute_challenge(&blob, &commitment).unwrap();
        let poly = blob.to_polynomial_eval_form().unwrap();
        let (expected, _) = KZG_4.compute_proof(&poly, &challenge).unwrap();
        assert_eq!(proof, expected);
    }

    #[test]
    fn test_shared_setup_across_threads() {
        let kzg = KZG_8.clone();
        let poly = random_poly(8);
        let expected = kzg.commit_eval_form(&poly).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let kzg = kzg.clone();
                let poly = poly.clone();
                std::thread::spawn(move || kzg.commit_eval_form(&poly).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
