//! Self-contained HTML summary of one model, rendered from a tera template

use std::fs::File;
use std::io::Write;
use std::path::Path;

use plotters::style::RGBColor;
use serde::Serialize;
use tera::{Context, Tera};

use super::charts::{roc_chart, scatter_chart, RocCurve};
use super::metrics::PartitionMetrics;
use crate::data::Frame;
use crate::eval::ConfusionMatrix;
use crate::model::{format_significant, Model};
use crate::Result;

const TRAIN_COLOR: RGBColor = RGBColor(31, 119, 180);
const TEST_COLOR: RGBColor = RGBColor(214, 39, 40);

const SUMMARY_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{ name }} summary</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 900px; margin: 0 auto; padding: 2rem; }
pre { background: #f5f5f5; padding: 1rem; overflow-x: auto; }
table { border-collapse: collapse; margin: 1rem 0; }
th, td { border: 1px solid #ccc; padding: 0.3rem 0.8rem; text-align: right; }
.charts { display: flex; gap: 2rem; flex-wrap: wrap; }
</style>
</head>
<body>
<h1>{{ name }}</h1>
<p>Target <code>{{ target }}</code> ({{ kind }}){% if positive_class %}, positive class <code>{{ positive_class }}</code>{% endif %}</p>
<h2>Functional form</h2>
<pre>{{ form }}</pre>
<p>Features: {{ features }} &middot; complexity {{ complexity }} &middot; parameters {{ parameters }} &middot; BIC {{ bic }} &middot; training loss {{ loss }}</p>
<h2>Metrics</h2>
<table>
<tr><th></th><th>Train</th><th>Test</th></tr>
{% for row in metrics %}<tr><th>{{ row.label }}</th><td>{{ row.train }}</td><td>{{ row.test }}</td></tr>
{% endfor %}</table>
{% if confusion %}<h2>Confusion matrices</h2>
<div class="charts">
{% for cm in confusion %}<table>
<caption>{{ cm.title }}</caption>
<tr><th></th><th>pred 0</th><th>pred 1</th></tr>
{% for row in cm.rows %}<tr><th>true {{ loop.index0 }}</th>{% for count in row %}<td>{{ count }}</td>{% endfor %}</tr>
{% endfor %}</table>
{% endfor %}</div>
{% endif %}{% if roc %}<h2>ROC</h2>
{{ roc | safe }}
{% endif %}{% if scatter %}<h2>Actual vs predicted</h2>
<div class="charts">
{% for chart in scatter %}<div><h3>{{ chart.title }}</h3>
{{ chart.svg | safe }}
</div>
{% endfor %}</div>
{% endif %}</body>
</html>
"#;

#[derive(Serialize)]
struct MetricRow {
    label: &'static str,
    train: String,
    test: String,
}

#[derive(Serialize)]
struct ConfusionView {
    title: &'static str,
    rows: [[usize; 2]; 2],
}

impl ConfusionView {
    fn new(title: &'static str, cm: &ConfusionMatrix) -> Self {
        Self {
            title,
            rows: cm.matrix(),
        }
    }
}

#[derive(Serialize)]
struct ChartView {
    title: &'static str,
    svg: String,
}

/// Render the summary page for `model` evaluated on both partitions
pub fn summary_html(name: &str, model: &Model, train: &Frame, test: &Frame) -> Result<String> {
    let train_metrics = PartitionMetrics::evaluate(model, train)?;
    let test_metrics = PartitionMetrics::evaluate(model, test)?;

    let mut ctx = Context::new();
    ctx.insert("name", name);
    ctx.insert("target", model.output_name());
    ctx.insert("kind", &model.kind().to_string());
    ctx.insert("positive_class", &model.positive_class());
    ctx.insert("form", &model.sympify(3));
    ctx.insert("features", &model.features().join(", "));
    ctx.insert("complexity", &model.complexity());
    ctx.insert("parameters", &model.n_parameters());
    ctx.insert("bic", &format_significant(model.bic(), 5));
    ctx.insert("loss", &format_significant(model.loss(), 4));
    ctx.insert("metrics", &metric_rows(&train_metrics, &test_metrics));

    let mut confusion = None;
    let mut roc = None;
    let mut scatter = None;
    match (&train_metrics, &test_metrics) {
        (
            PartitionMetrics::Classification {
                confusion: train_cm,
                roc: train_roc,
                auc: train_auc,
                ..
            },
            PartitionMetrics::Classification {
                confusion: test_cm,
                roc: test_roc,
                auc: test_auc,
                ..
            },
        ) => {
            confusion = Some(vec![
                ConfusionView::new("Train", train_cm),
                ConfusionView::new("Test", test_cm),
            ]);
            roc = Some(roc_chart(&[
                RocCurve {
                    label: "Train",
                    points: train_roc,
                    auc: *train_auc,
                    color: TRAIN_COLOR,
                },
                RocCurve {
                    label: "Test",
                    points: test_roc,
                    auc: *test_auc,
                    color: TEST_COLOR,
                },
            ])?);
        }
        (
            PartitionMetrics::Regression {
                actual: train_actual,
                predicted: train_pred,
                ..
            },
            PartitionMetrics::Regression {
                actual: test_actual,
                predicted: test_pred,
                ..
            },
        ) => {
            scatter = Some(vec![
                ChartView {
                    title: "Train",
                    svg: scatter_chart(train_actual, train_pred)?,
                },
                ChartView {
                    title: "Test",
                    svg: scatter_chart(test_actual, test_pred)?,
                },
            ]);
        }
        _ => {}
    }
    ctx.insert("confusion", &confusion);
    ctx.insert("roc", &roc);
    ctx.insert("scatter", &scatter);

    let mut tera = Tera::default();
    tera.add_raw_template("summary.html", SUMMARY_TEMPLATE)?;
    Ok(tera.render("summary.html", &ctx)?)
}

fn metric_rows(train: &PartitionMetrics, test: &PartitionMetrics) -> Vec<MetricRow> {
    let row = |label, a: f64, b: f64| MetricRow {
        label,
        train: format!("{a:.3}"),
        test: format!("{b:.3}"),
    };
    let mut rows = vec![MetricRow {
        label: "Rows",
        train: train.n().to_string(),
        test: test.n().to_string(),
    }];
    match (train, test) {
        (
            PartitionMetrics::Classification {
                accuracy: a1,
                auc: u1,
                precision: p1,
                recall: r1,
                ..
            },
            PartitionMetrics::Classification {
                accuracy: a2,
                auc: u2,
                precision: p2,
                recall: r2,
                ..
            },
        ) => {
            rows.push(row("Accuracy", *a1, *a2));
            rows.push(row("AUC", *u1, *u2));
            rows.push(row("Precision", *p1, *p2));
            rows.push(row("Recall", *r1, *r2));
        }
        (
            PartitionMetrics::Regression { r2: r1, mse: m1, .. },
            PartitionMetrics::Regression { r2: r2v, mse: m2, .. },
        ) => {
            rows.push(row("R²", *r1, *r2v));
            rows.push(row("MSE", *m1, *m2));
        }
        _ => {}
    }
    rows
}

/// Write the summary page to `path`, replacing any existing file
pub fn write_summary(path: impl AsRef<Path>, name: &str, model: &Model, train: &Frame, test: &Frame) -> Result<()> {
    let html = summary_html(name, model, train, test)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(html.as_bytes())?;
    Ok(())
}
