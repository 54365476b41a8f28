//! Model evaluation metrics
//!
//! - `classification`: binary confusion matrix, ROC curve and AUC, accuracy
//! - `regression`: MSE, RMSE, MAE, R²
//! - `loss`: training losses (binary cross-entropy, squared error)
//! - `criterion`: information criteria (BIC, AIC) used to rank models

pub mod classification;
pub mod criterion;
pub mod loss;
pub mod regression;

pub use classification::{accuracy, roc_auc, roc_curve, ConfusionMatrix, RocPoint};
pub use criterion::{aic, bic, Criterion};
pub use loss::{binary_cross_entropy, squared_error};
pub use regression::{mae, mse, pearson, r2, rmse};
