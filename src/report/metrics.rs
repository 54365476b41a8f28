//! Per-partition evaluation of one model

use crate::data::Frame;
use crate::eval::classification::THRESHOLD;
use crate::eval::{mse, r2, roc_auc, roc_curve, ConfusionMatrix, RocPoint};
use crate::model::{Kind, Model};
use crate::Result;

/// Metrics of a model on one partition
#[derive(Debug, Clone, PartialEq)]
pub enum PartitionMetrics {
    Classification {
        n: usize,
        accuracy: f64,
        auc: f64,
        precision: f64,
        recall: f64,
        confusion: ConfusionMatrix,
        roc: Vec<RocPoint>,
    },
    Regression {
        n: usize,
        r2: f64,
        mse: f64,
        actual: Vec<f64>,
        predicted: Vec<f64>,
    },
}

impl PartitionMetrics {
    /// Evaluate `model` on `frame` (which must contain the target)
    pub fn evaluate(model: &Model, frame: &Frame) -> Result<Self> {
        let y = model.target_values(frame)?;
        let pred = model.predict(frame)?;
        Ok(match model.kind() {
            Kind::Classification => {
                let confusion = ConfusionMatrix::from_probabilities(y.view(), pred.view(), THRESHOLD);
                Self::Classification {
                    n: y.len(),
                    accuracy: confusion.accuracy(),
                    auc: roc_auc(y.view(), pred.view()),
                    precision: confusion.precision(),
                    recall: confusion.recall(),
                    confusion,
                    roc: roc_curve(y.view(), pred.view()),
                }
            }
            Kind::Regression => Self::Regression {
                n: y.len(),
                r2: r2(y.view(), pred.view()),
                mse: mse(y.view(), pred.view()),
                actual: y.to_vec(),
                predicted: pred.to_vec(),
            },
        })
    }

    pub fn n(&self) -> usize {
        match self {
            Self::Classification { n, .. } | Self::Regression { n, .. } => *n,
        }
    }

    /// ROC AUC for classifiers
    pub fn auc(&self) -> Option<f64> {
        match self {
            Self::Classification { auc, .. } => Some(*auc),
            Self::Regression { .. } => None,
        }
    }

    /// Accuracy at p > 0.5 for classifiers
    pub fn accuracy(&self) -> Option<f64> {
        match self {
            Self::Classification { accuracy, .. } => Some(*accuracy),
            Self::Regression { .. } => None,
        }
    }
}
