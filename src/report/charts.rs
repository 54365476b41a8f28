//! ROC and actual-vs-predicted charts drawn with plotters into SVG strings

use plotters::prelude::*;

use crate::eval::RocPoint;
use crate::{Error, Result};

const CHART_SIZE: (u32, u32) = (420, 400);
const DIAGONAL: RGBColor = RGBColor(187, 187, 187);
const POINT: RGBColor = RGBColor(31, 119, 180);

/// Map a plotters drawing error into the crate error
pub(crate) fn render_error(err: impl std::fmt::Display) -> Error {
    Error::Render(err.to_string())
}

/// One partition's ROC curve
pub(crate) struct RocCurve<'a> {
    pub label: &'a str,
    pub points: &'a [RocPoint],
    pub auc: f64,
    pub color: RGBColor,
}

/// ROC curves for several partitions in one chart, with a chance diagonal
/// and an AUC legend
pub(crate) fn roc_chart(curves: &[RocCurve<'_>]) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0f64..1f64, 0f64..1f64)
            .map_err(render_error)?;
        chart
            .configure_mesh()
            .x_desc("False positive rate")
            .y_desc("True positive rate")
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(LineSeries::new([(0.0, 0.0), (1.0, 1.0)], &DIAGONAL))
            .map_err(render_error)?;
        for curve in curves {
            let color = curve.color;
            chart
                .draw_series(LineSeries::new(
                    curve.points.iter().map(|p| (p.fpr, p.tpr)),
                    color.stroke_width(2),
                ))
                .map_err(render_error)?
                .label(format!("{} (AUC {:.3})", curve.label, curve.auc))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(render_error)?;
        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

/// Axis range covering every finite value, padded by 5% on each side
fn finite_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo > hi {
        return (0.0, 1.0);
    }
    let pad = if hi > lo { 0.05 * (hi - lo) } else { 0.5 };
    (lo - pad, hi + pad)
}

/// Actual-vs-predicted scatter with the identity line; non-finite pairs are
/// skipped
pub(crate) fn scatter_chart(actual: &[f64], predicted: &[f64]) -> Result<String> {
    let (lo, hi) = finite_range(actual.iter().chain(predicted).copied());
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(lo..hi, lo..hi)
            .map_err(render_error)?;
        chart
            .configure_mesh()
            .x_desc("Actual")
            .y_desc("Predicted")
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(LineSeries::new([(lo, lo), (hi, hi)], &DIAGONAL))
            .map_err(render_error)?;
        chart
            .draw_series(
                actual
                    .iter()
                    .zip(predicted)
                    .filter(|(a, p)| a.is_finite() && p.is_finite())
                    .map(|(&a, &p)| Circle::new((a, p), 3, POINT.filled())),
            )
            .map_err(render_error)?;
        root.present().map_err(render_error)?;
    }
    Ok(svg)
}
