//! The search engine

use ndarray::ArrayView1;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::AutoRunSpec;
use super::error::SearchError;
use super::mutate::mutate;
use super::sampler::{Affinities, Sampler};
use super::select::{rank_models, select_diverse};
use super::space::FeatureSpace;
use crate::data::Frame;
use crate::model::{encode_target, Kind, Model};
use crate::prior::Priors;
use crate::Result;

/// Seeded model-search engine
///
/// ```no_run
/// use phenosr::model::Kind;
/// use phenosr::search::{AutoRunSpec, QLattice};
/// # fn demo(train: &phenosr::data::Frame, priors: &phenosr::prior::Priors) -> phenosr::Result<()> {
/// let mut ql = QLattice::new(1024);
/// ql.update_priors(priors);
/// let models = ql.auto_run(train, &AutoRunSpec::new("phenotype_reg", Kind::Classification))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QLattice {
    seed: u64,
    rng: StdRng,
    priors: Priors,
}

impl QLattice {
    /// Engine seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            priors: Priors::default(),
        }
    }

    /// Seed the engine was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Replace the feature priors used to bias input sampling
    pub fn update_priors(&mut self, priors: &Priors) {
        self.priors = priors.clone();
    }

    /// Current priors
    pub fn priors(&self) -> &Priors {
        &self.priors
    }

    /// Search for models of `spec.output_name` on `train`, best first
    pub fn auto_run(&mut self, train: &Frame, spec: &AutoRunSpec) -> Result<Vec<Model>> {
        if train.n_rows() == 0 {
            return Err(SearchError::EmptyTrainingSet.into());
        }
        let target = encode_target(train, &spec.output_name, spec.kind)?;
        let space = FeatureSpace::from_frame(train, &spec.output_name, &spec.stypes)?;
        let fit = spec.fit_config();
        let output_bias = initial_bias(spec.kind, target.values.view());

        tracing::info!(
            target = %spec.output_name,
            kind = %spec.kind,
            inputs = space.len(),
            rows = train.n_rows(),
            epochs = spec.n_epochs,
            "starting model search"
        );

        let mut affinities = Affinities::new(space.len());
        let mut pool: Vec<Model> = Vec::new();

        for epoch in 0..spec.n_epochs {
            let sampler = Sampler::new(&space, &self.priors, &affinities, &spec.output_name, spec.kind)
                .with_output_bias(output_bias)
                .with_positive_class(target.positive_class.as_deref());

            let mut candidates = Vec::with_capacity(spec.sample_size + pool.len());
            for _ in 0..spec.sample_size {
                candidates.push(sampler.sample(&mut self.rng, spec.max_complexity)?);
            }
            for parent in pool.iter().take(spec.sample_size) {
                candidates.push(mutate(parent, &sampler, &mut self.rng, spec.max_complexity)?);
            }

            let mut fitted = Vec::with_capacity(candidates.len());
            for mut model in candidates {
                let loss = model.fit(train, target.values.view(), &fit)?;
                if loss.is_finite() {
                    fitted.push(model);
                }
            }

            pool.extend(fitted);
            pool = rank_models(pool, spec.criterion, spec.pool_size);
            affinities.reinforce(&pool, sampler.space());

            if let Some(best) = pool.first() {
                tracing::debug!(
                    epoch,
                    pool = pool.len(),
                    best_score = best.score(spec.criterion),
                    best_loss = best.loss(),
                    "epoch complete"
                );
            }
        }

        let models = select_diverse(&pool, spec.max_models);
        tracing::info!(models = models.len(), "model search finished");
        Ok(models)
    }
}

/// Output bias matching the base rate (classification) or mean (regression)
fn initial_bias(kind: Kind, y: ArrayView1<'_, f64>) -> f64 {
    let mean = y.mean().unwrap_or(0.0);
    match kind {
        Kind::Classification => {
            let p = mean.clamp(0.01, 0.99);
            (p / (1.0 - p)).ln()
        }
        Kind::Regression => mean,
    }
}
