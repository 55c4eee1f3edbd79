use std::{fmt, str::FromStr};

use crate::error::TypeError;

/// Edge interpolation algorithms for geography types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeAlgorithm {
    /// Edges are great-circle arcs on a sphere.
    Spherical,
    /// Vincenty's inverse formula on an ellipsoid.
    Vincenty,
    /// Thomas' second-order approximation.
    Thomas,
    /// Andoyer-Lambert first-order approximation.
    Andoyer,
    /// Karney's geodesic algorithm.
    Karney,
}

impl EdgeAlgorithm {
    pub const ALL: [EdgeAlgorithm; 5] = [
        Self::Spherical,
        Self::Vincenty,
        Self::Thomas,
        Self::Andoyer,
        Self::Karney,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spherical => "spherical",
            Self::Vincenty => "vincenty",
            Self::Thomas => "thomas",
            Self::Andoyer => "andoyer",
            Self::Karney => "karney",
        }
    }

    /// Resolve an algorithm from its name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, TypeError> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| TypeError::UnknownEdgeAlgorithm {
                name: name.to_string(),
            })
    }
}

impl FromStr for EdgeAlgorithm {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for EdgeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
