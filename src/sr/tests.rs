//! Tests for the evolutionary regressor

use super::*;
use approx::assert_relative_eq;
use ndarray::{Array1, Array2};
use proptest::prelude::*;

fn product_data() -> RegressionData {
    let n = 40;
    let x = Array2::from_shape_fn((n, 2), |(i, j)| {
        if j == 0 {
            1.0 + (i % 8) as f64 * 0.25
        } else {
            0.5 + (i / 8) as f64 * 0.5
        }
    });
    let y = Array1::from_iter(x.rows().into_iter().map(|r| r[0] * r[1]));
    RegressionData {
        x,
        y,
        names: vec!["gene_a".into(), "gene_b".into()],
    }
}

fn variance(y: &Array1<f64>) -> f64 {
    let mean = y.mean().unwrap_or(0.0);
    y.mapv(|v| (v - mean).powi(2)).mean().unwrap_or(0.0)
}

fn small_config() -> SrConfig {
    SrConfig {
        niterations: 15,
        ..SrConfig::default()
    }
}

// ============================================================
// Hall of fame
// ============================================================

#[test]
fn test_hall_keeps_lowest_loss_per_complexity() {
    let mut hall = HallOfFame::new(vec!["a".into()]);
    assert!(hall.consider(&Expr::Var(0), 1, 2.0));
    assert!(!hall.consider(&Expr::Const(1.0), 1, 3.0));
    assert!(hall.consider(&Expr::Const(1.0), 1, 1.0));
    assert!(!hall.consider(&Expr::Var(0), 2, f64::NAN));
    assert_eq!(hall.len(), 1);
    assert_eq!(hall.pareto_front()[0].expr, Expr::Const(1.0));
}

#[test]
fn test_pareto_front_drops_dominated() {
    let mut hall = HallOfFame::new(vec!["a".into()]);
    hall.consider(&Expr::Var(0), 1, 4.0);
    hall.consider(&Expr::unary(UnaryOp::Square, Expr::Var(0)), 2, 5.0);
    hall.consider(&Expr::unary(UnaryOp::Exp, Expr::Var(0)), 3, 1.0);

    let front = hall.pareto_front();
    assert_eq!(front.len(), 2);
    assert_eq!(front[0].complexity, 1);
    assert_eq!(front[1].complexity, 3);
    assert_eq!(front[0].score, 0.0);
    assert_relative_eq!(front[1].score, 4.0f64.ln() / 2.0);
    assert_eq!(front[1].equation, "exp(a)");
}

#[test]
fn test_best_prefers_score_within_loss_window() {
    let mut hall = HallOfFame::new(vec!["a".into()]);
    hall.consider(&Expr::Var(0), 1, 10.0);
    // big drop at complexity 3, marginal gain at 7
    hall.consider(&Expr::unary(UnaryOp::Exp, Expr::Var(0)), 3, 1.2);
    hall.consider(&Expr::unary(UnaryOp::Log, Expr::Var(0)), 7, 1.0);

    let best = hall.best().unwrap();
    assert_eq!(best.complexity, 3);
}

#[test]
fn test_best_excludes_entries_outside_window() {
    let mut hall = HallOfFame::new(vec!["a".into()]);
    hall.consider(&Expr::Var(0), 1, 10.0);
    hall.consider(&Expr::unary(UnaryOp::Exp, Expr::Var(0)), 2, 2.0);
    hall.consider(&Expr::unary(UnaryOp::Log, Expr::Var(0)), 8, 1.0);

    // complexity 2 scores higher but 2.0 > 1.5 * 1.0
    assert_eq!(hall.best().unwrap().complexity, 8);
}

#[test]
fn test_empty_hall_has_no_best() {
    assert!(HallOfFame::default().best().is_none());
}

#[test]
fn test_equations_csv_roundtrip_and_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("equations.csv");

    let mut hall = HallOfFame::new(vec!["gene_a".into()]);
    hall.consider(&Expr::Var(0), 1, 0.5);
    hall.consider(
        &Expr::binary(BinaryOp::Mul, Expr::Var(0), Expr::Const(2.0)),
        6,
        0.1,
    );
    write_equations(&hall, &path).unwrap();
    write_equations(&hall, &path).unwrap();

    let header = std::fs::read_to_string(&path).unwrap();
    assert!(header.starts_with("Complexity,Loss,Equation"));

    let rows = read_equations(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], (6, 0.1, "(gene_a * 2.0)".to_string()));
}

#[test]
fn test_empty_equations_file_has_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("equations.csv");
    write_equations(&HallOfFame::default(), &path).unwrap();
    assert!(read_equations(&path).unwrap().is_empty());
    assert!(std::fs::read_to_string(&path).unwrap().starts_with("Complexity"));
}

// ============================================================
// Regressor
// ============================================================

#[test]
fn test_fit_finds_low_loss_equation() {
    let data = product_data();
    let hall = Regressor::new(SrConfig::default()).fit(&data).unwrap();
    let best = hall.best().unwrap();
    assert!(best.loss < 0.05 * variance(&data.y), "loss {}", best.loss);
}

#[test]
fn test_front_respects_constraints() {
    let config = small_config();
    let hall = Regressor::new(config.clone()).fit(&product_data()).unwrap();
    let front = hall.pareto_front();
    assert!(!front.is_empty());
    for pair in front.windows(2) {
        assert!(pair[0].complexity < pair[1].complexity);
        assert!(pair[0].loss > pair[1].loss);
    }
    for e in &front {
        assert!(e.complexity <= config.maxsize);
        assert_eq!(e.expr.complexity(config.complexity_of_constants), e.complexity);
        assert!(e.expr.depth() <= config.maxdepth);
        assert!(!e.expr.has_nested_unary());
    }
}

#[test]
fn test_fit_is_deterministic() {
    let data = product_data();
    let a = Regressor::new(small_config()).fit(&data).unwrap().pareto_front();
    let b = Regressor::new(small_config()).fit(&data).unwrap().pareto_front();
    assert_eq!(a, b);
}

#[test]
fn test_sign_loss() {
    let x = Array2::from_shape_fn((20, 1), |(i, _)| i as f64 - 9.5);
    let y = x.column(0).mapv(|v| 3.0 * v);
    let data = RegressionData {
        x,
        y,
        names: vec!["gene_a".into()],
    };
    let config = small_config().with_loss(LossKind::SignMismatch);
    let hall = Regressor::new(config).fit(&data).unwrap();
    assert_eq!(hall.best().unwrap().loss, 0.0);
}

#[test]
fn test_leaf_only_operators() {
    let config = SrConfig {
        binary_operators: Vec::new(),
        unary_operators: Vec::new(),
        ..small_config()
    };
    let hall = Regressor::new(config).fit(&product_data()).unwrap();
    for e in hall.pareto_front() {
        assert!(matches!(e.expr, Expr::Var(_) | Expr::Const(_)));
    }
}

#[test]
fn test_invalid_settings_rejected() {
    let config = SrConfig {
        populations: 0,
        ..SrConfig::default()
    };
    let err = Regressor::new(config).fit(&product_data()).unwrap_err();
    assert!(matches!(err, crate::Error::Config(_)));
}

#[test]
fn test_empty_data_rejected() {
    let data = RegressionData {
        x: Array2::zeros((0, 1)),
        y: Array1::zeros(0),
        names: vec!["gene_a".into()],
    };
    let err = Regressor::new(small_config()).fit(&data).unwrap_err();
    assert!(matches!(err, crate::Error::EmptyDataset(_)));
}

// ============================================================
// Property Tests
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_front_within_maxsize(seed in 0u64..1000, maxsize in 1usize..10) {
        let config = SrConfig {
            maxsize,
            niterations: 3,
            populations: 2,
            population_size: 10,
            random_state: seed,
            ..SrConfig::default()
        };
        let hall = Regressor::new(config).fit(&product_data()).unwrap();
        for e in hall.pareto_front() {
            prop_assert!(e.complexity <= maxsize);
            prop_assert!(!e.expr.has_nested_unary());
        }
    }
}
