// src/predict/model.rs
//
// Fixed model artifacts: stat means, PCA basis, logistic weights. Loaded from
// a versioned JSON asset; nothing here is fitted at runtime.

use std::path::Path;

use serde::Deserialize;

use crate::config::consts::DEFAULT_MODEL;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StatColumns {
    pub first: String,
    pub last: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ModelParams {
    pub version: String,
    #[serde(default)]
    pub description: String,
    /// Column range read from both the offense and the opponent page.
    pub stat_columns: StatColumns,
    /// One per raw stat, offense block then defense block.
    pub means: Vec<f64>,
    /// `means.len()` rows of `dims` columns.
    pub basis: Vec<Vec<f64>>,
    /// Intercept, then visitor dims, then home dims.
    pub weights: Vec<f64>,
}

impl ModelParams {
    pub fn from_json(text: &str) -> Result<Self> {
        let m: ModelParams = serde_json::from_str(text)?;
        m.validate()?;
        Ok(m)
    }

    /// The bundled asset unless `path` overrides it.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_json(&std::fs::read_to_string(p)?),
            None => Self::from_json(DEFAULT_MODEL),
        }
    }

    fn validate(&self) -> Result<()> {
        let raw = self.means.len();
        if raw == 0 || raw % 2 != 0 {
            return Err(Error::Model(format!("{raw} means; need an even, non-zero count")));
        }
        if self.basis.len() != raw {
            return Err(Error::Model(format!("basis has {} rows, means has {raw}", self.basis.len())));
        }
        let dims = self.dims();
        if dims == 0 || self.basis.iter().any(|r| r.len() != dims) {
            return Err(Error::Model(s!("basis rows must share one non-zero width")));
        }
        if self.weights.len() != 1 + 2 * dims {
            return Err(Error::Model(format!(
                "{} weights for {dims} dims; expected {}", self.weights.len(), 1 + 2 * dims
            )));
        }
        Ok(())
    }

    pub fn dims(&self) -> usize {
        self.basis.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Values expected from each of the offense and opponent pages.
    pub fn stats_per_page(&self) -> usize {
        self.means.len() / 2
    }

    /// Center `raw` on the means and project onto the basis.
    pub fn project(&self, raw: &[f64]) -> Result<Vec<f64>> {
        if raw.len() != self.means.len() {
            return Err(Error::Model(format!(
                "{} stats for a model expecting {}", raw.len(), self.means.len()
            )));
        }
        let mut out = vec![0.0; self.dims()];
        for ((x, mean), row) in raw.iter().zip(&self.means).zip(&self.basis) {
            let centered = x - mean;
            for (acc, b) in out.iter_mut().zip(row) {
                *acc += centered * b;
            }
        }
        Ok(out)
    }

    /// Visitor win probability from two projected teams. Always strictly
    /// inside (0, 1), even when the logistic saturates.
    pub fn probability(&self, visitor: &[f64], home: &[f64]) -> f64 {
        let dims = self.dims();
        let (intercept, rest) = self.weights.split_at(1);
        let (wv, wh) = rest.split_at(dims);
        let a = intercept[0] + dot(wv, visitor) + dot(wh, home);
        sigmoid(a).clamp(f64::EPSILON, 1.0 - f64::EPSILON)
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

pub fn sigmoid(a: f64) -> f64 {
    1.0 / (1.0 + (-a).exp())
}

/// American odds for the visitor and the home side.
///
/// Favorite (p > 0.5) gets `-100·p/(1-p)`, otherwise `+100·(1-p)/p`; home is
/// the negation. At exactly 0.5 the visitor takes the underdog branch, i.e.
/// `(+100, -100)`. Halves round to even. Lines past `i32::MAX` in either
/// direction saturate, so `p` of exactly 0 or 1 is still a line.
pub fn moneyline(p: f64) -> (i32, i32) {
    let visitor = if p > 0.5 {
        -100.0 * p / (1.0 - p)
    } else {
        100.0 * (1.0 - p) / p
    };
    let limit = f64::from(i32::MAX);
    let visitor = visitor.round_ties_even().clamp(-limit, limit) as i32;
    (visitor, -visitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> ModelParams {
        ModelParams::from_json(r#"{
            "version": "test",
            "stat_columns": { "first": "FG", "last": "PTS" },
            "means": [1.0, 2.0, 1.0, 2.0],
            "basis": [[1.0], [0.0], [0.0], [1.0]],
            "weights": [0.0, 1.0, -1.0]
        }"#).unwrap()
    }

    #[test]
    fn bundled_model_loads() {
        let m = ModelParams::load(None).unwrap();
        assert_eq!(m.version, "hifo-v1");
        assert_eq!(m.means.len(), 42);
        assert_eq!(m.dims(), 7);
        assert_eq!(m.weights.len(), 15);
        assert_eq!(m.stats_per_page(), 21);
        assert_eq!(m.stat_columns.first, "FG");
    }

    #[test]
    fn mean_team_projects_to_origin() {
        let m = ModelParams::load(None).unwrap();
        let z = m.project(&m.means.clone()).unwrap();
        assert!(z.iter().all(|v| v.abs() < 1e-12));
        // Two average teams: only the intercept (home edge) is left.
        let p = m.probability(&z, &z);
        assert!((p - sigmoid(m.weights[0])).abs() < 1e-12);
        assert!(p < 0.5);
    }

    #[test]
    fn projection_and_probability() {
        let m = tiny();
        let v = m.project(&[3.0, 9.0, 9.0, 2.0]).unwrap();
        let h = m.project(&[1.0, 9.0, 9.0, 2.0]).unwrap();
        assert_eq!(v, vec![2.0]);
        assert_eq!(h, vec![0.0]);
        assert!((m.probability(&v, &h) - sigmoid(2.0)).abs() < 1e-12);
    }

    #[test]
    fn wrong_stat_count_is_rejected() {
        assert!(matches!(tiny().project(&[1.0]), Err(Error::Model(_))));
    }

    #[test]
    fn mismatched_weights_are_rejected() {
        let err = ModelParams::from_json(r#"{
            "version": "bad",
            "stat_columns": { "first": "FG", "last": "PTS" },
            "means": [0.0, 0.0],
            "basis": [[1.0], [1.0]],
            "weights": [0.0, 1.0]
        }"#).unwrap_err();
        assert!(matches!(err, Error::Model(_)));
    }

    #[test]
    fn malformed_json_is_a_model_error() {
        assert!(matches!(ModelParams::from_json("{"), Err(Error::Model(_))));
    }

    #[test]
    fn favorite_and_underdog_lines() {
        assert_eq!(moneyline(0.6), (-150, 150));
        assert_eq!(moneyline(0.4), (150, -150));
        assert_eq!(moneyline(0.75), (-300, 300));
        assert_eq!(moneyline(0.2), (400, -400));
    }

    #[test]
    fn even_odds_take_the_underdog_branch() {
        assert_eq!(moneyline(0.5), (100, -100));
    }

    #[test]
    fn saturated_probability_still_has_a_line() {
        assert_eq!(sigmoid(40.0), 1.0);
        assert_eq!(moneyline(sigmoid(40.0)), (-i32::MAX, i32::MAX));
        assert_eq!(moneyline(sigmoid(-800.0)), (i32::MAX, -i32::MAX));
    }

    #[test]
    fn lopsided_matchup_stays_inside_the_unit_interval() {
        let m = tiny();
        let strong = m.project(&[100.0, 9.0, 9.0, 2.0]).unwrap();
        let weak = m.project(&[-100.0, 9.0, 9.0, 2.0]).unwrap();
        let p = m.probability(&strong, &weak);
        assert!(p > 0.5 && p < 1.0);
        let q = m.probability(&weak, &strong);
        assert!(q > 0.0 && q < 0.5);
        let (v, h) = moneyline(p);
        assert_eq!(h, -v);
    }

    #[test]
    fn sigmoid_is_centered() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(10.0) > 0.9999);
    }
}
