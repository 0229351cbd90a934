use burn::{
    module::Param,
    nn::{
        Dropout, DropoutConfig,
        Embedding, EmbeddingConfig,
        Initializer,
        Linear, LinearConfig,
    },
    prelude::*,
    tensor::{activation::log_softmax, ElementConversion},
};

use crate::ml::embedding::EmbeddingMatrix;
use crate::ml::gru::{Direction, GruCell, GruCellConfig};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally: do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct BiGruClassifierConfig {
    pub hidden_size: usize,
    pub num_classes: usize,
    #[config(default = 0.0)]
    pub dropout:     f64,
}

impl BiGruClassifierConfig {
    /// Build the model with its embedding table initialised from `embeddings`.
    /// Vocabulary size and embedding width are taken from the matrix.
    pub fn init<B: Backend>(
        &self,
        embeddings: &EmbeddingMatrix,
        device:     &B::Device,
    ) -> BiGruClassifier<B> {
        let mut embedding = EmbeddingConfig::new(embeddings.rows(), embeddings.dim()).init(device);
        embedding.weight = Param::from_tensor(embeddings.to_tensor(device));

        let cell_cfg = GruCellConfig::new(embeddings.dim(), self.hidden_size);
        let output   = LinearConfig::new(2 * self.hidden_size, self.num_classes)
            .with_initializer(Initializer::Normal { mean: 0.0, std: 0.01 })
            .init(device);

        BiGruClassifier {
            embedding,
            forward_cell:  cell_cfg.init(device),
            backward_cell: cell_cfg.init(device),
            dropout:       DropoutConfig::new(self.dropout).init(),
            output,
        }
    }
}

#[derive(Module, Debug)]
pub struct BiGruClassifier<B: Backend> {
    pub embedding:     Embedding<B>,
    pub forward_cell:  GruCell<B>,
    pub backward_cell: GruCell<B>,
    pub dropout:       Dropout,
    pub output:        Linear<B>,
}

impl<B: Backend> BiGruClassifier<B> {
    /// inputs: [batch, time] token ids, mask: [batch, time] → logits [batch, classes]
    pub fn forward(&self, inputs: Tensor<B, 2, Int>, mask: Tensor<B, 2>) -> Tensor<B, 2> {
        let embedded = self.embedding.forward(inputs); // [batch, time, dim]

        let fw = self.forward_cell.encode(embedded.clone(), mask.clone(), Direction::Forward);
        let bw = self.backward_cell.encode(embedded, mask, Direction::Backward);

        // [batch, 2 * hidden]
        let states = Tensor::cat(vec![fw, bw], 1);
        self.output.forward(self.dropout.forward(states))
    }

    /// Mean softmax cross-entropy against one-hot `labels`.
    pub fn forward_loss(
        &self,
        inputs: Tensor<B, 2, Int>,
        mask:   Tensor<B, 2>,
        labels: Tensor<B, 2>,
    ) -> Tensor<B, 1> {
        softmax_cross_entropy(self.forward(inputs, mask), labels)
    }
}

pub fn softmax_cross_entropy<B: Backend>(logits: Tensor<B, 2>, labels: Tensor<B, 2>) -> Tensor<B, 1> {
    (log_softmax(logits, 1) * labels).sum_dim(1).mean().neg()
}

/// Fraction of rows whose arg-max prediction equals the arg-max label.
pub fn accuracy<B: Backend>(logits: Tensor<B, 2>, labels: Tensor<B, 2>) -> f64 {
    let [batch, _] = logits.dims();
    if batch == 0 {
        return 0.0;
    }

    // argmax(1) keeps the reduced dim: [batch, 1] on both sides
    let correct: i64 = logits
        .argmax(1)
        .equal(labels.argmax(1))
        .int()
        .sum()
        .into_scalar()
        .elem::<i64>();

    correct as f64 / batch as f64
}
