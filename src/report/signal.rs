//! Signal plot: the model graph annotated with per-node correlations

use std::fs::File;
use std::io::Write;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::charts::render_error;
use crate::data::Frame;
use crate::eval::pearson;
use crate::model::Model;
use crate::Result;

const COLUMN_WIDTH: i32 = 170;
const ROW_HEIGHT: i32 = 70;
const NODE_WIDTH: i32 = 130;
const NODE_HEIGHT: i32 = 40;
const PADDING: i32 = 30;

const EDGE: RGBColor = RGBColor(136, 136, 136);
const INPUT_BORDER: RGBColor = RGBColor(44, 160, 44);
const NODE_BORDER: RGBColor = RGBColor(85, 85, 85);

/// Pearson correlation of every node's activation with the target on `frame`
pub fn node_correlations(model: &Model, frame: &Frame) -> Result<Vec<f64>> {
    let y = model.target_values(frame)?;
    let acts = model.activations(frame)?;
    Ok(acts.iter().map(|a| pearson(a.view(), y.view())).collect())
}

/// Fill colour by correlation strength: grey for none, deep blue for |r| = 1
fn shade(r: f64) -> RGBColor {
    let t = if r.is_finite() { r.abs().min(1.0) } else { 0.0 };
    let channel = |from: f64, to: f64| (from + (to - from) * t).round() as u8;
    RGBColor(channel(235.0, 31.0), channel(235.0, 119.0), channel(235.0, 180.0))
}

/// Grid cell `(column, row)` of every node in a post-order graph. The column
/// is the node's height above the leaves; rows fill each column top down.
fn layout(children: &[Vec<usize>]) -> Vec<(usize, usize)> {
    let mut column: Vec<usize> = Vec::with_capacity(children.len());
    for kids in children {
        let depth = kids.iter().map(|&c| column[c] + 1).max().unwrap_or(0);
        column.push(depth);
    }
    let n_columns = column.iter().max().map_or(1, |c| c + 1);
    let mut filled = vec![0usize; n_columns];
    column
        .into_iter()
        .map(|c| {
            let row = filled[c];
            filled[c] += 1;
            (c, row)
        })
        .collect()
}

/// Draw the graph left to right, inputs first, each node labelled with its
/// correlation to the target
pub fn signal_svg(model: &Model, frame: &Frame) -> Result<String> {
    let correlations = node_correlations(model, frame)?;
    let children = model.children();
    let cells = layout(&children);

    let n_columns = cells.iter().map(|&(c, _)| c + 1).max().unwrap_or(1);
    let n_rows = cells.iter().map(|&(_, r)| r + 1).max().unwrap_or(1);
    let width = 2 * PADDING + (n_columns as i32 - 1) * COLUMN_WIDTH + NODE_WIDTH;
    let height = 2 * PADDING + (n_rows as i32 - 1) * ROW_HEIGHT + NODE_HEIGHT;
    let corner = |i: usize| {
        let (c, r) = cells[i];
        (PADDING + c as i32 * COLUMN_WIDTH, PADDING + r as i32 * ROW_HEIGHT)
    };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width as u32, height as u32)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        for (i, kids) in children.iter().enumerate() {
            let (x, y) = corner(i);
            for &c in kids {
                let (cx, cy) = corner(c);
                let edge = vec![(cx + NODE_WIDTH, cy + NODE_HEIGHT / 2), (x, y + NODE_HEIGHT / 2)];
                root.draw(&PathElement::new(edge, EDGE.stroke_width(2)))
                    .map_err(render_error)?;
            }
        }

        let centered = Pos::new(HPos::Center, VPos::Center);
        let label_style = ("sans-serif", 12).into_font().color(&BLACK).pos(centered);
        let value_style = ("sans-serif", 11).into_font().color(&BLACK).pos(centered);
        for ((i, node), r) in model.nodes().iter().enumerate().zip(&correlations) {
            let (x, y) = corner(i);
            let border = if node.is_input() { INPUT_BORDER } else { NODE_BORDER };
            let rect = [(x, y), (x + NODE_WIDTH, y + NODE_HEIGHT)];
            root.draw(&Rectangle::new(rect, shade(*r).filled()))
                .map_err(render_error)?;
            root.draw(&Rectangle::new(rect, border.stroke_width(1)))
                .map_err(render_error)?;

            let middle = x + NODE_WIDTH / 2;
            root.draw(&Text::new(node.label(), (middle, y + 13), label_style.clone()))
                .map_err(render_error)?;
            root.draw(&Text::new(format!("r = {r:.2}"), (middle, y + 29), value_style.clone()))
                .map_err(render_error)?;
        }
        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

/// Write the signal plot to `path`, replacing any existing file
pub fn write_signal(path: impl AsRef<Path>, model: &Model, frame: &Frame) -> Result<()> {
    let svg = signal_svg(model, frame)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(svg.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_of_chain() {
        let children = vec![vec![], vec![0], vec![1]];
        assert_eq!(layout(&children), vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_layout_stacks_siblings_in_rows() {
        // two inputs feeding an add, then the output
        let children = vec![vec![], vec![], vec![0, 1], vec![2]];
        assert_eq!(layout(&children), vec![(0, 0), (0, 1), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_layout_uses_deepest_child() {
        // input 0 -> exp (1); input 2; multiply(1, 2) sits right of exp
        let children = vec![vec![], vec![0], vec![], vec![1, 2], vec![3]];
        assert_eq!(layout(&children), vec![(0, 0), (1, 0), (0, 1), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_layout_empty() {
        assert!(layout(&[]).is_empty());
    }

    #[test]
    fn test_shade_endpoints() {
        assert_eq!(shade(0.0), RGBColor(235, 235, 235));
        assert_eq!(shade(-1.0), RGBColor(31, 119, 180));
        assert_eq!(shade(f64::NAN), shade(0.0));
    }
}
