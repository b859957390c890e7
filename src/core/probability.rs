/// Probability extraction from a state vector.
///
/// The distribution is recomputed from the amplitudes on every call. It is
/// not renormalized and the normalization invariant is not checked here.
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use super::state::StateVector;
use crate::error::{EngineError, Result};

/// `|αᵢ|²` for every basis state.
pub fn probabilities(state: &StateVector) -> Vec<f64> {
    state.amplitudes().iter().map(|a| a.norm_sqr()).collect()
}

/// Σ|αᵢ|², ≈ 1.0 for any state reached through unitary gates.
pub fn total_probability(state: &StateVector) -> f64 {
    state.amplitudes().iter().map(|a| a.norm_sqr()).sum()
}

/// Number of qubits for a state of `len` amplitudes, if `len` is 2^n, n ≥ 1.
pub fn qubit_count(len: usize) -> Option<usize> {
    if len < 2 || !len.is_power_of_two() {
        return None;
    }
    Some(len.trailing_zeros() as usize)
}

/// Draw `shots` basis-state outcomes from `probs` and count them.
///
/// Sampling reads the distribution only; there is no state to collapse.
pub fn sample_counts<R: Rng + ?Sized>(probs: &[f64], shots: u64, rng: &mut R) -> Result<Vec<u64>> {
    let dist = WeightedIndex::new(probs).map_err(|e| EngineError::Sampling(e.to_string()))?;
    let mut counts = vec![0u64; probs.len()];
    for _ in 0..shots {
        counts[dist.sample(rng)] += 1;
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gates::{hadamard, pauli_x};
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_basis_state_probabilities() {
        let sv = StateVector::new(2, 24).unwrap();
        assert_eq!(probabilities(&sv), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_superposition_probabilities() {
        let sv = hadamard(&StateVector::new(1, 24).unwrap(), 0).unwrap();
        let p = probabilities(&sv);
        assert_abs_diff_eq!(p[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p[1], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(total_probability(&sv), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_renormalization() {
        use num_complex::Complex64;
        let sv = StateVector::from_amplitudes(vec![
            Complex64::new(2.0, 0.0),
            Complex64::new(0.0, 1.0),
        ])
        .unwrap();
        assert_eq!(probabilities(&sv), vec![4.0, 1.0]);
        assert_abs_diff_eq!(total_probability(&sv), 5.0);
    }

    #[test]
    fn test_qubit_count() {
        assert_eq!(qubit_count(2), Some(1));
        assert_eq!(qubit_count(8), Some(3));
        assert_eq!(qubit_count(1 << 20), Some(20));
        assert_eq!(qubit_count(0), None);
        assert_eq!(qubit_count(1), None);
        assert_eq!(qubit_count(6), None);
    }

    #[test]
    fn test_sample_deterministic_state() {
        let sv = pauli_x(&StateVector::new(2, 24).unwrap(), 1).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let counts = sample_counts(&probabilities(&sv), 100, &mut rng).unwrap();
        assert_eq!(counts, vec![0, 0, 100, 0]);
    }

    #[test]
    fn test_sample_superposition_is_balanced() {
        let sv = hadamard(&StateVector::new(1, 24).unwrap(), 0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let counts = sample_counts(&probabilities(&sv), 2000, &mut rng).unwrap();
        assert_eq!(counts.iter().sum::<u64>(), 2000);
        assert!(counts[0] > 800 && counts[1] > 800, "counts = {counts:?}");
    }

    #[test]
    fn test_sample_all_zero_distribution_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = sample_counts(&[0.0, 0.0], 10, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::Sampling(_)));
    }
}
