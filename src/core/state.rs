/// Quantum state vector representation.
///
/// An n-qubit register has 2^n basis states and the state vector holds one
/// complex amplitude per basis state. Basis index `j` encodes qubit `i` in
/// bit `i` of `j` (qubit 0 is the least-significant bit).
///
/// Starting from a basis state and applying only unitary gates keeps
/// Σ|αᵢ|² = 1 within floating-point tolerance.
use num_complex::Complex64;

use crate::config::HARD_MAX_QUBITS;
use crate::error::{EngineError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a state vector initialized to |0...0⟩.
    ///
    /// The register size is checked against `max_qubits` before anything is
    /// allocated. `max_qubits` is clamped to [`HARD_MAX_QUBITS`].
    pub fn new(num_qubits: usize, max_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(EngineError::InvalidRegisterSize { requested: 0 });
        }
        let max = max_qubits.min(HARD_MAX_QUBITS);
        if num_qubits > max {
            return Err(EngineError::RegisterTooLarge {
                requested: num_qubits,
                max,
            });
        }

        let dim = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dim];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Wrap an existing amplitude buffer. The length must be 2^n with n ≥ 1.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> Result<Self> {
        let len = amplitudes.len();
        let num_qubits = super::probability::qubit_count(len)
            .ok_or(EngineError::InvalidStateLength { len })?;
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// All-zero buffer of the same shape, used as the accumulation target of
    /// a gate application.
    pub(crate) fn zeroed_like(&self) -> Self {
        Self {
            num_qubits: self.num_qubits,
            amplitudes: vec![Complex64::new(0.0, 0.0); self.dim()],
        }
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the state space: 2^n
    #[inline]
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    #[inline]
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Amplitude of basis state `index`, or `None` past the end.
    pub fn amplitude(&self, index: usize) -> Option<Complex64> {
        self.amplitudes.get(index).copied()
    }

    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// Check if this qubit's bit is set in basis state index `basis_idx`.
    #[inline(always)]
    pub fn qubit_bit(basis_idx: usize, qubit: usize) -> bool {
        (basis_idx >> qubit) & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_initial_state() {
        let sv = StateVector::new(2, 24).unwrap();
        assert_eq!(sv.num_qubits(), 2);
        assert_eq!(sv.dim(), 4);
        assert_eq!(sv.amplitude(0), Some(Complex64::new(1.0, 0.0)));
        for i in 1..4 {
            assert_eq!(sv.amplitude(i), Some(Complex64::new(0.0, 0.0)));
        }
        assert_eq!(sv.amplitude(4), None);
    }

    #[test]
    fn test_initial_state_is_normalized() {
        let sv = StateVector::new(5, 24).unwrap();
        let total: f64 = sv.amplitudes().iter().map(|a| a.norm_sqr()).sum();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_qubits_rejected() {
        assert_eq!(
            StateVector::new(0, 24),
            Err(EngineError::InvalidRegisterSize { requested: 0 })
        );
    }

    #[test]
    fn test_register_bound_checked() {
        assert_eq!(
            StateVector::new(9, 8),
            Err(EngineError::RegisterTooLarge { requested: 9, max: 8 })
        );
        assert!(StateVector::new(8, 8).is_ok());
    }

    #[test]
    fn test_bound_clamped_to_hard_max() {
        assert_eq!(
            StateVector::new(64, usize::MAX),
            Err(EngineError::RegisterTooLarge { requested: 64, max: HARD_MAX_QUBITS })
        );
        assert_eq!(
            StateVector::new(HARD_MAX_QUBITS + 1, usize::MAX),
            Err(EngineError::RegisterTooLarge {
                requested: HARD_MAX_QUBITS + 1,
                max: HARD_MAX_QUBITS,
            })
        );
        assert!(StateVector::new(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_from_amplitudes() {
        let amps = vec![Complex64::new(0.0, 0.0); 8];
        let sv = StateVector::from_amplitudes(amps).unwrap();
        assert_eq!(sv.num_qubits(), 3);

        let bad = vec![Complex64::new(1.0, 0.0); 3];
        assert_eq!(
            StateVector::from_amplitudes(bad),
            Err(EngineError::InvalidStateLength { len: 3 })
        );
        assert!(StateVector::from_amplitudes(vec![Complex64::new(1.0, 0.0)]).is_err());
    }

    #[test]
    fn test_zeroed_like() {
        let sv = StateVector::new(3, 24).unwrap();
        let z = sv.zeroed_like();
        assert_eq!(z.num_qubits(), 3);
        assert!(z.amplitudes().iter().all(|a| a.norm_sqr() == 0.0));
    }

    #[test]
    fn test_qubit_bit() {
        // basis index 5 = 0b101: qubit 0 = 1, qubit 1 = 0, qubit 2 = 1
        assert!(StateVector::qubit_bit(5, 0));
        assert!(!StateVector::qubit_bit(5, 1));
        assert!(StateVector::qubit_bit(5, 2));
    }
}
