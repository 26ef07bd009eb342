use std::fmt;
use std::str::FromStr;

use crate::error::LatheError;

/// Minimum number of parameter divisions used when sampling a profile
pub const MIN_SAMPLE_DIVISIONS: usize = 8;

/// The kind of curve drawn through the control points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CurveKind {
    #[default]
    Bezier,
    #[cfg_attr(feature = "serde", serde(alias = "spline"))]
    BSpline,
}

impl FromStr for CurveKind {
    type Err = LatheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bezier" => Ok(CurveKind::Bezier),
            "bspline" | "spline" => Ok(CurveKind::BSpline),
            _ => Err(LatheError::InvalidCurveKind(s.to_string())),
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveKind::Bezier => write!(f, "bezier"),
            CurveKind::BSpline => write!(f, "bspline"),
        }
    }
}

/// Options for sampling a profile curve from its control points
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CurveConfig {
    pub kind: CurveKind,
    /// Degree of the B-spline, ignored for Bézier curves
    pub degree: usize,
    /// Number of parameter divisions, the profile has `divisions + 1` points
    pub sample_count: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            kind: CurveKind::Bezier,
            degree: 3,
            sample_count: 80,
        }
    }
}

impl CurveConfig {
    pub fn bezier() -> Self {
        Self::default()
    }

    pub fn bspline(degree: usize) -> Self {
        Self {
            kind: CurveKind::BSpline,
            degree,
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: CurveKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Degree actually used for evaluation, at least 1
    pub fn effective_degree(&self) -> usize {
        self.degree.max(1)
    }

    /// Number of parameter divisions actually used for sampling
    pub fn divisions(&self) -> usize {
        self.sample_count.max(MIN_SAMPLE_DIVISIONS)
    }
}
