//! Target column encoding

use ndarray::Array1;
use std::cmp::Ordering;

use super::graph::Model;
use super::kind::Kind;
use crate::data::{Column, Frame};
use crate::search::SearchError;
use crate::Result;

/// Encoded target values with the label mapped to 1.0 (classification only)
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedTarget {
    /// Target values: 0/1 for classification, raw values for regression
    pub values: Array1<f64>,
    /// Label treated as the positive class
    pub positive_class: Option<String>,
}

/// Encode a target column for `kind`.
///
/// Classification needs exactly two distinct values; the larger one
/// (numerically for numeric columns, lexicographically otherwise) becomes the
/// positive class.
pub fn encode_target(frame: &Frame, target: &str, kind: Kind) -> Result<EncodedTarget> {
    let column = frame.require(target)?;
    match kind {
        Kind::Regression => {
            let values = column
                .as_numeric()
                .ok_or_else(|| SearchError::NonNumericTarget(target.to_string()))?;
            Ok(EncodedTarget {
                values: values.clone(),
                positive_class: None,
            })
        }
        Kind::Classification => {
            let mut classes: Vec<(f64, String)> = match column {
                Column::Numeric(values) => values.iter().map(|&v| (v, v.to_string())).collect(),
                Column::Categorical(values) => values.iter().map(|v| (0.0, v.clone())).collect(),
            };
            classes.sort_by(|a, b| {
                a.0.partial_cmp(&b.0)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.1.cmp(&b.1))
            });
            classes.dedup_by(|a, b| a.1 == b.1);

            if classes.len() != 2 {
                return Err(SearchError::NonBinaryTarget {
                    column: target.to_string(),
                    n_classes: classes.len(),
                }
                .into());
            }
            let positive = classes[1].1.clone();
            let values = encode_positive(column, &positive);
            Ok(EncodedTarget {
                values,
                positive_class: Some(positive),
            })
        }
    }
}

fn encode_positive(column: &Column, positive: &str) -> Array1<f64> {
    column
        .labels()
        .iter()
        .map(|label| if label == positive { 1.0 } else { 0.0 })
        .collect()
}

impl Model {
    /// Target values of `frame` encoded the way this model was trained
    pub fn target_values(&self, frame: &Frame) -> Result<Array1<f64>> {
        let column = frame.require(&self.output_name)?;
        match (self.kind, &self.positive_class) {
            (Kind::Classification, Some(positive)) => Ok(encode_positive(column, positive)),
            _ => Ok(encode_target(frame, &self.output_name, self.kind)?.values),
        }
    }
}
