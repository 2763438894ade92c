//! Statevector simulation of compiled grid operations.

use num_complex::Complex64;

use alsvid_grid::{GateKind, Operation};

use crate::error::{SimError, SimResult};

/// A dense 2^n statevector.
///
/// Basis-state indices use bit i for qubit i. Every gate from the grid's
/// closed gate set is supported with an arbitrary control set: the target
/// transform is applied only to components where all control bits are 1.
pub struct Statevector {
    amplitudes: Vec<Complex64>,
    num_qubits: u32,
}

impl Statevector {
    /// Create a statevector initialized to |0...0⟩.
    pub fn new(num_qubits: u32) -> Self {
        let size = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The raw amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    fn check_qubit(&self, qubit: u32) -> SimResult<()> {
        if qubit >= self.num_qubits {
            return Err(SimError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    /// Apply one compiled grid operation.
    pub fn apply(&mut self, operation: &Operation) -> SimResult<()> {
        self.check_qubit(operation.target)?;
        for &control in &operation.controls {
            self.check_qubit(control)?;
        }
        let target = operation.target as usize;
        let ctrl_mask: usize = operation
            .controls
            .iter()
            .fold(0, |mask, &control| mask | (1usize << control));

        match operation.gate {
            GateKind::Empty | GateKind::Identity => {}
            GateKind::X => self.apply_x(target, ctrl_mask),
            GateKind::Y => self.apply_y(target, ctrl_mask),
            GateKind::Z => self.apply_z(target, ctrl_mask),
            GateKind::H => self.apply_h(target, ctrl_mask),
            GateKind::Rx(theta) => self.apply_rx(target, ctrl_mask, theta),
            GateKind::Ry(theta) => self.apply_ry(target, ctrl_mask, theta),
            GateKind::Rz(theta) => self.apply_rz(target, ctrl_mask, theta),
        }
        Ok(())
    }

    /// Apply a whole operation sequence in order.
    pub fn apply_all(&mut self, operations: &[Operation]) -> SimResult<()> {
        for operation in operations {
            self.apply(operation)?;
        }
        Ok(())
    }

    fn apply_x(&mut self, target: usize, ctrl_mask: usize) {
        let tgt_mask = 1usize << target;
        for i in 0..self.amplitudes.len() {
            if i & ctrl_mask == ctrl_mask && i & tgt_mask == 0 {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_y(&mut self, target: usize, ctrl_mask: usize) {
        let tgt_mask = 1usize << target;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..self.amplitudes.len() {
            if i & ctrl_mask == ctrl_mask && i & tgt_mask == 0 {
                let j = i | tgt_mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, target: usize, ctrl_mask: usize) {
        let tgt_mask = 1usize << target;
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & ctrl_mask == ctrl_mask && i & tgt_mask != 0 {
                *amp = -*amp;
            }
        }
    }

    fn apply_h(&mut self, target: usize, ctrl_mask: usize) {
        let tgt_mask = 1usize << target;
        let sqrt2_inv = std::f64::consts::FRAC_1_SQRT_2;
        for i in 0..self.amplitudes.len() {
            if i & ctrl_mask == ctrl_mask && i & tgt_mask == 0 {
                let j = i | tgt_mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_rx(&mut self, target: usize, ctrl_mask: usize, theta: f64) {
        let tgt_mask = 1usize << target;
        let c = (theta / 2.0).cos();
        let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
        for i in 0..self.amplitudes.len() {
            if i & ctrl_mask == ctrl_mask && i & tgt_mask == 0 {
                let j = i | tgt_mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_ry(&mut self, target: usize, ctrl_mask: usize, theta: f64) {
        let tgt_mask = 1usize << target;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..self.amplitudes.len() {
            if i & ctrl_mask == ctrl_mask && i & tgt_mask == 0 {
                let j = i | tgt_mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }

    fn apply_rz(&mut self, target: usize, ctrl_mask: usize, theta: f64) {
        let tgt_mask = 1usize << target;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & ctrl_mask == ctrl_mask {
                if i & tgt_mask == 0 {
                    *amp *= phase_0;
                } else {
                    *amp *= phase_1;
                }
            }
        }
    }

    /// Measurement probabilities per basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// The basis state with the highest probability; ties resolve to the
    /// lowest index so the result is deterministic.
    pub fn dominant_index(&self) -> usize {
        let mut best = 0;
        let mut best_prob = self.amplitudes[0].norm_sqr();
        for (i, amp) in self.amplitudes.iter().enumerate().skip(1) {
            let prob = amp.norm_sqr();
            if prob > best_prob {
                best = i;
                best_prob = prob;
            }
        }
        best
    }

    /// Sample one measurement outcome.
    pub fn sample(&self) -> usize {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }
        self.amplitudes.len() - 1
    }

    /// Render a basis-state index as a bit-string with qubit 0 first.
    pub fn bitstring(&self, state: usize) -> String {
        format!("{:0width$b}", state, width = self.num_qubits as usize)
            .chars()
            .rev()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    fn op(gate: GateKind, target: u32, controls: &[u32]) -> Operation {
        Operation {
            gate,
            target,
            controls: controls.to_vec(),
        }
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply(&op(GateKind::H, 0, &[])).unwrap();
        sv.apply(&op(GateKind::X, 1, &[0])).unwrap();

        let sqrt2_inv = std::f64::consts::FRAC_1_SQRT_2;
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[3], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_rx_pi_flips() {
        let mut sv = Statevector::new(1);
        sv.apply(&op(GateKind::rx(PI), 0, &[])).unwrap();

        // Rx(π)|0⟩ = −i|1⟩.
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(0.0, -1.0)));
        assert_eq!(sv.dominant_index(), 1);
    }

    #[test]
    fn test_control_gates_are_conditional() {
        // Control off: nothing happens to the target.
        let mut sv = Statevector::new(2);
        sv.apply(&op(GateKind::X, 1, &[0])).unwrap();
        assert_eq!(sv.dominant_index(), 0);

        // Control on: the target flips.
        let mut sv = Statevector::new(2);
        sv.apply(&op(GateKind::X, 0, &[])).unwrap();
        sv.apply(&op(GateKind::X, 1, &[0])).unwrap();
        assert_eq!(sv.dominant_index(), 0b11);
    }

    #[test]
    fn test_multi_control() {
        // Toffoli behavior out of the same X kernel.
        let mut sv = Statevector::new(3);
        sv.apply(&op(GateKind::X, 0, &[])).unwrap();
        sv.apply(&op(GateKind::X, 2, &[0, 1])).unwrap();
        assert_eq!(sv.dominant_index(), 0b001);

        sv.apply(&op(GateKind::X, 1, &[])).unwrap();
        sv.apply(&op(GateKind::X, 2, &[0, 1])).unwrap();
        assert_eq!(sv.dominant_index(), 0b111);
    }

    #[test]
    fn test_placeholders_are_noops() {
        let mut sv = Statevector::new(1);
        sv.apply(&op(GateKind::Identity, 0, &[])).unwrap();
        sv.apply(&op(GateKind::Empty, 0, &[])).unwrap();
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_state_stays_normalized() {
        let mut sv = Statevector::new(3);
        sv.apply_all(&[
            op(GateKind::H, 0, &[]),
            op(GateKind::ry(1.234), 1, &[0]),
            op(GateKind::rz(0.5), 2, &[]),
            op(GateKind::Y, 2, &[1]),
            op(GateKind::rx(2.5), 0, &[2]),
        ])
        .unwrap();

        let total: f64 = sv.probabilities().iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_qubit_out_of_range() {
        let mut sv = Statevector::new(2);
        let err = sv.apply(&op(GateKind::X, 2, &[])).unwrap_err();
        assert!(matches!(err, SimError::QubitOutOfRange { qubit: 2, .. }));

        let err = sv.apply(&op(GateKind::X, 0, &[5])).unwrap_err();
        assert!(matches!(err, SimError::QubitOutOfRange { qubit: 5, .. }));
    }

    #[test]
    fn test_bitstring_qubit_zero_first() {
        let sv = Statevector::new(3);
        assert_eq!(sv.bitstring(0b001), "100");
        assert_eq!(sv.bitstring(0b110), "011");
    }

    #[test]
    fn test_sample_deterministic_state() {
        let mut sv = Statevector::new(1);
        sv.apply(&op(GateKind::X, 0, &[])).unwrap();
        for _ in 0..50 {
            assert_eq!(sv.sample(), 1);
        }
    }
}
