// ============================================================
// Layer 5: Masked GRU Cell
// ============================================================
// A gated recurrent unit built from two Burn Linear layers,
// plus a length-aware unroll over a padded sequence.
//
// Per step (x = input, h = previous state):
//   r  = σ(W_r x + U_r h)            reset gate
//   z  = σ(W_z x + U_z h)            update gate
//   n  = tanh(W_n x + r ⊙ (U_n h))   candidate state
//   h' = (1 − z) ⊙ n + z ⊙ h
//
// The three W (and three U) matrices are stored side by side in
// one Linear of width 3·hidden and sliced apart after the matmul.
//
// Length masking: with m_t = 1 for real tokens and 0 for padding,
//   h ← m_t · h' + (1 − m_t) · h
// so padded positions leave the state untouched. Running the
// reverse direction from T-1 down to 0 therefore starts doing
// real work at position len-1, exactly like reversing only the
// meaningful prefix.
//
// Reference: Cho et al. (2014) GRU

use burn::{
    nn::{Linear, LinearConfig},
    prelude::*,
    tensor::activation::sigmoid,
};

#[derive(Config, Debug)]
pub struct GruCellConfig {
    pub input_size:  usize,
    pub hidden_size: usize,
}

impl GruCellConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> GruCell<B> {
        GruCell {
            input_gates:  LinearConfig::new(self.input_size, 3 * self.hidden_size).init(device),
            hidden_gates: LinearConfig::new(self.hidden_size, 3 * self.hidden_size).init(device),
            hidden_size:  self.hidden_size,
        }
    }
}

#[derive(Module, Debug)]
pub struct GruCell<B: Backend> {
    /// x → [r | z | n] pre-activations
    pub input_gates:  Linear<B>,
    /// h → [r | z | n] pre-activations
    pub hidden_gates: Linear<B>,
    pub hidden_size:  usize,
}

/// Which way a sequence is walked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl<B: Backend> GruCell<B> {
    /// One recurrence step. x: [batch, input], h: [batch, hidden] → [batch, hidden]
    pub fn step(&self, x: Tensor<B, 2>, h: Tensor<B, 2>) -> Tensor<B, 2> {
        let gx = self.input_gates.forward(x);
        let gh = self.hidden_gates.forward(h.clone());
        let [batch, _] = gx.dims();
        let hs = self.hidden_size;

        let gate = |t: &Tensor<B, 2>, k: usize| t.clone().slice([0..batch, k * hs..(k + 1) * hs]);

        let r = sigmoid(gate(&gx, 0) + gate(&gh, 0));
        let z = sigmoid(gate(&gx, 1) + gate(&gh, 1));
        let n = (gate(&gx, 2) + r * gate(&gh, 2)).tanh();

        (z.clone().neg() + 1.0) * n + z * h
    }

    /// Unroll over a padded sequence and return the final state.
    ///
    /// inputs: [batch, time, input], mask: [batch, time] → [batch, hidden]
    pub fn encode(
        &self,
        inputs:    Tensor<B, 3>,
        mask:      Tensor<B, 2>,
        direction: Direction,
    ) -> Tensor<B, 2> {
        let [batch, steps, dim] = inputs.dims();
        let device = inputs.device();
        let mut h = Tensor::<B, 2>::zeros([batch, self.hidden_size], &device);

        let order: Vec<usize> = match direction {
            Direction::Forward  => (0..steps).collect(),
            Direction::Backward => (0..steps).rev().collect(),
        };

        for t in order {
            let x_t = inputs.clone().slice([0..batch, t..t + 1, 0..dim]).reshape([batch, dim]);
            let m_t = mask
                .clone()
                .slice([0..batch, t..t + 1])
                .expand([batch, self.hidden_size]);

            let candidate = self.step(x_t, h.clone());
            h = candidate * m_t.clone() + h * (m_t.neg() + 1.0);
        }

        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    fn cell() -> GruCell<TestBackend> {
        GruCellConfig::new(4, 3).init(&Default::default())
    }

    #[test]
    fn test_step_shape() {
        let device = Default::default();
        let x = Tensor::<TestBackend, 2>::ones([2, 4], &device);
        let h = Tensor::<TestBackend, 2>::zeros([2, 3], &device);
        assert_eq!(cell().step(x, h).dims(), [2, 3]);
    }

    #[test]
    fn test_fully_masked_sequence_keeps_zero_state() {
        let device = Default::default();
        let inputs = Tensor::<TestBackend, 3>::ones([2, 5, 4], &device);
        let mask   = Tensor::<TestBackend, 2>::zeros([2, 5], &device);

        for dir in [Direction::Forward, Direction::Backward] {
            let h: Vec<f32> = cell()
                .encode(inputs.clone(), mask.clone(), dir)
                .into_data()
                .to_vec::<f32>()
                .unwrap();
            assert!(h.iter().all(|&x| x == 0.0));
        }
    }

    #[test]
    fn test_state_stays_bounded() {
        // h' is a convex mix of tanh output and the previous state,
        // so starting from zero it can never leave (-1, 1)
        let device = Default::default();
        let inputs = Tensor::<TestBackend, 3>::ones([3, 6, 4], &device) * 10.0;
        let mask   = Tensor::<TestBackend, 2>::ones([3, 6], &device);

        let h: Vec<f32> = cell()
            .encode(inputs, mask, Direction::Forward)
            .into_data()
            .to_vec::<f32>()
            .unwrap();
        assert!(h.iter().all(|x| x.abs() <= 1.0));
    }
}
