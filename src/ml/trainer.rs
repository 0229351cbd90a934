// ============================================================
// Layer 5: Training Loop
// ============================================================
// Fixed-step training with RMSProp, then a fixed number of
// held-out evaluation batches.
//
//   for step in 0..train_steps:
//       sample a fresh training batch
//       forward → softmax cross-entropy → backward → RMSProp
//       every log_every steps: accuracy on that same batch
//   for i in 0..eval_batches:
//       sample a test batch, report its accuracy
//
// Backend notes:
//   - Training runs on Autodiff<Wgpu> for gradients
//   - model.valid() returns the model on the inner backend
//     (no autodiff graph), used for every accuracy measurement
//   - argmax(1) returns [batch,1] on both sides of the comparison
//
// Reference: Burn Book §5, Tieleman & Hinton (2012) RMSProp

use anyhow::Result;
use burn::{
    module::AutodiffModule,
    optim::{GradientsParams, Optimizer, RmsPropConfig},
    tensor::{backend::AutodiffBackend, ElementConversion},
};
use rand::Rng;

use crate::application::train_use_case::TrainConfig;
use crate::data::{
    batcher::ClassifierBatcher,
    dataset::SequenceDataset,
    sampler::BatchSampler,
};
use crate::domain::vocabulary::Vocabulary;
use crate::infra::metrics::TrainingReport;
use crate::ml::embedding::EmbeddingMatrix;
use crate::ml::model::{accuracy, BiGruClassifier, BiGruClassifierConfig};

type MyBackend = burn::backend::Autodiff<burn::backend::Wgpu>;

pub fn run_training<R: Rng + ?Sized>(
    cfg:        &TrainConfig,
    vocab:      &Vocabulary,
    embeddings: &EmbeddingMatrix,
    train_data: &SequenceDataset,
    test_data:  &SequenceDataset,
    rng:        &mut R,
) -> Result<TrainingReport> {
    let device = burn::backend::wgpu::WgpuDevice::default();
    tracing::info!("Using WGPU device: {:?}", device);
    train_loop::<MyBackend, R>(cfg, vocab, embeddings, train_data, test_data, rng, device)
}

pub fn train_loop<B: AutodiffBackend, R: Rng + ?Sized>(
    cfg:        &TrainConfig,
    vocab:      &Vocabulary,
    embeddings: &EmbeddingMatrix,
    train_data: &SequenceDataset,
    test_data:  &SequenceDataset,
    rng:        &mut R,
    device:     B::Device,
) -> Result<TrainingReport> {

    // ── Build model ───────────────────────────────────────────────────────────
    let model_cfg = BiGruClassifierConfig::new(cfg.hidden_size, cfg.num_classes)
        .with_dropout(cfg.dropout);
    let mut model: BiGruClassifier<B> = model_cfg.init(embeddings, &device);
    tracing::info!(
        "Model ready: vocab={}, embed_dim={}, hidden={} (x2 directions)",
        embeddings.rows(), embeddings.dim(), cfg.hidden_size
    );

    // ── RMSProp optimiser ─────────────────────────────────────────────────────
    // v = α*v + (1-α)*g²
    // θ = θ - lr * g / (√v + ε)
    let optim_cfg = RmsPropConfig::new()
        .with_alpha(cfg.rms_decay)
        .with_epsilon(cfg.rms_epsilon);
    let mut optim = optim_cfg.init::<B, BiGruClassifier<B>>();

    let sampler       = BatchSampler::new(cfg.batch_size);
    let train_batcher = ClassifierBatcher::<B>::new(device.clone());
    let valid_batcher = ClassifierBatcher::<B::InnerBackend>::new(device.clone());
    let mut report    = TrainingReport::default();

    // ── Step loop ─────────────────────────────────────────────────────────────
    for step in 0..cfg.train_steps {
        let sampled = sampler.sample(train_data, vocab, rng)?;
        tracing::trace!("step {} batch rows {:?}", step, sampled.source_indices);
        let batch   = train_batcher.batch(&sampled);

        let loss     = model.forward_loss(batch.inputs, batch.mask, batch.labels);
        let loss_val = loss.clone().into_scalar().elem::<f64>();

        let grads = loss.backward();
        let grads = GradientsParams::from_grads(grads, &model);
        model = optim.step(cfg.learning_rate, model, grads);

        if step % cfg.log_every == 0 {
            // Same batch, updated weights
            let eval  = valid_batcher.batch(&sampled);
            let acc   = accuracy(model.valid().forward(eval.inputs, eval.mask), eval.labels);
            tracing::debug!("step {} loss={:.5}", step, loss_val);
            report.record_step(step, acc);
        }
    }

    // ── Held-out evaluation ───────────────────────────────────────────────────
    let model_valid = model.valid();
    for index in 0..cfg.eval_batches {
        let sampled = sampler.sample(test_data, vocab, rng)?;
        let batch   = valid_batcher.batch(&sampled);
        let logits  = model_valid.forward(batch.inputs, batch.mask);
        report.record_test_batch(index, accuracy(logits, batch.labels));
    }

    tracing::info!("Training complete!");
    Ok(report)
}
