//! Best-model export

use std::path::{Path, PathBuf};

use super::signal::write_signal;
use super::summary::write_summary;
use crate::data::Frame;
use crate::io::{save_model, ModelSnapshot, SaveConfig};
use crate::model::Model;
use crate::Result;

/// Files written by [`export_best`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// `{name}_summary.html`
    pub summary: PathBuf,
    /// `{name}_signal.svg`
    pub signal: PathBuf,
    /// `{name}_model.json`
    pub model: PathBuf,
}

impl ExportPaths {
    pub fn new(output_dir: impl AsRef<Path>, name: &str) -> Self {
        let dir = output_dir.as_ref();
        Self {
            summary: dir.join(format!("{name}_summary.html")),
            signal: dir.join(format!("{name}_signal.svg")),
            model: dir.join(format!("{name}_model.json")),
        }
    }
}

/// Write the summary, signal plot and JSON snapshot of `model`.
///
/// Existing files with the same names are replaced.
pub fn export_best(
    model: &Model,
    name: &str,
    train: &Frame,
    test: &Frame,
    output_dir: impl AsRef<Path>,
) -> Result<ExportPaths> {
    let paths = ExportPaths::new(output_dir, name);

    write_summary(&paths.summary, name, model, train, test)?;
    write_signal(&paths.signal, model, train)?;
    save_model(&ModelSnapshot::from_model(name, model), &paths.model, &SaveConfig::default())?;

    tracing::info!(
        summary = %paths.summary.display(),
        signal = %paths.signal.display(),
        model = %paths.model.display(),
        "exported best model"
    );
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Column;
    use crate::io::load_model;
    use crate::model::{Kind, Node, Op};
    use crate::report::{node_correlations, summary_html};
    use ndarray::Array1;
    use tempfile::TempDir;

    fn frames() -> (Frame, Frame) {
        let make = |xs: Vec<f64>| {
            let y: Vec<f64> = xs.iter().map(|&x| if x > 0.0 { 1.0 } else { 0.0 }).collect();
            Frame::new()
                .with_column("gene_a", Column::Numeric(Array1::from(xs)))
                .unwrap()
                .with_column("phenotype_reg", Column::Numeric(Array1::from(y)))
                .unwrap()
        };
        (
            make(vec![-2.0, -1.0, -0.5, 0.5, 1.0, 2.0]),
            make(vec![-1.5, 0.2, 1.7]),
        )
    }

    fn model(kind: Kind) -> Model {
        Model::from_nodes(
            "phenotype_reg",
            kind,
            vec![
                Node::Numeric {
                    name: "gene_a".into(),
                    center: 0.0,
                    scale: 1.0,
                    w: 3.0,
                    b: 0.0,
                },
                Node::Interaction {
                    op: Op::Tanh,
                    params: vec![],
                },
                Node::Output { kind, w: 2.0, b: 0.0 },
            ],
        )
        .unwrap()
        .with_positive_class("1")
    }

    #[test]
    fn test_export_writes_three_files() {
        let (train, test) = frames();
        let dir = TempDir::new().unwrap();
        let paths = export_best(&model(Kind::Classification), "qlattice_three_genes", &train, &test, dir.path()).unwrap();

        let html = std::fs::read_to_string(&paths.summary).unwrap();
        assert!(html.contains("qlattice_three_genes"));
        assert!(html.contains("logreg("));
        assert!(html.contains("<svg"));
        assert!(html.contains("AUC"));

        let svg = std::fs::read_to_string(&paths.signal).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<rect"));
        assert!(svg.contains("gene_a"));
        assert!(svg.contains("r = "));

        let snapshot = load_model(&paths.model).unwrap();
        assert_eq!(snapshot.metadata.name, "qlattice_three_genes");
        assert!(paths.model.ends_with("qlattice_three_genes_model.json"));
    }

    #[test]
    fn test_reexport_overwrites() {
        let (train, test) = frames();
        let dir = TempDir::new().unwrap();
        let first = export_best(&model(Kind::Classification), "run", &train, &test, dir.path()).unwrap();
        let summary = std::fs::read_to_string(&first.summary).unwrap();
        let signal = std::fs::read_to_string(&first.signal).unwrap();

        let second = export_best(&model(Kind::Classification), "run", &train, &test, dir.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);
        assert_eq!(std::fs::read_to_string(&second.summary).unwrap(), summary);
        assert_eq!(std::fs::read_to_string(&second.signal).unwrap(), signal);
    }

    #[test]
    fn test_correlations_of_monotone_chain() {
        let (train, _) = frames();
        let r = node_correlations(&model(Kind::Classification), &train).unwrap();
        assert_eq!(r.len(), 3);
        assert!(r.iter().all(|v| *v > 0.8));
    }

    #[test]
    fn test_regression_summary_has_scatter() {
        let (train, test) = frames();
        let regression = Model::from_nodes(
            "gene_a",
            Kind::Regression,
            vec![
                Node::Numeric {
                    name: "phenotype_reg".into(),
                    center: 0.0,
                    scale: 1.0,
                    w: 1.0,
                    b: 0.0,
                },
                Node::Output {
                    kind: Kind::Regression,
                    w: 1.0,
                    b: 0.0,
                },
            ],
        )
        .unwrap();
        let html = summary_html("reg", &regression, &train, &test).unwrap();
        assert!(html.contains("R²"));
        assert!(html.contains("<circle"));
        assert!(!html.contains("logreg"));
    }
}
