//! Cycle point vocabulary and state records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Thermodynamic state of one cycle point.
///
/// Units: `p` [bar], `t` [°C], `h` [kcal/kg], `s` [kcal/(kg·K)], `x` vapor
/// quality fraction. Absent fields are unknown. `x` is absent outside the
/// saturation dome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub p: Option<f64>,
    #[serde(default)]
    pub t: Option<f64>,
    #[serde(default)]
    pub h: Option<f64>,
    #[serde(default)]
    pub s: Option<f64>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Point {
    /// Point known by pressure and enthalpy only.
    pub fn from_ph(p: Option<f64>, h: f64) -> Self {
        Self {
            p,
            h: Some(h),
            ..Self::default()
        }
    }

    /// Copy of the five state properties, without any error message.
    pub fn inputs(&self) -> Self {
        Self {
            p: self.p,
            t: self.t,
            h: self.h,
            s: self.s,
            x: self.x,
            error: None,
        }
    }

    /// Number of state properties present.
    pub fn known_count(&self) -> usize {
        [self.p, self.t, self.h, self.s, self.x]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Fixed vocabulary of points in the regenerative cycle.
///
/// Variants are declared in cycle order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PointId {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2_prime", alias = "2′")]
    TwoPrime,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "n")]
    N,
    #[serde(rename = "n_prime", alias = "n′")]
    NPrime,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4_prime", alias = "4′")]
    FourPrime,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "x_prime", alias = "x′")]
    XPrime,
    #[serde(rename = "x")]
    X,
    #[serde(rename = "6_prime", alias = "6′")]
    SixPrime,
    #[serde(rename = "6")]
    Six,
}

impl PointId {
    pub const ALL: [PointId; 13] = [
        PointId::One,
        PointId::TwoPrime,
        PointId::Two,
        PointId::N,
        PointId::NPrime,
        PointId::Three,
        PointId::FourPrime,
        PointId::Four,
        PointId::Five,
        PointId::XPrime,
        PointId::X,
        PointId::SixPrime,
        PointId::Six,
    ];

    /// Wire identifier.
    pub fn key(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::TwoPrime => "2_prime",
            Self::Two => "2",
            Self::N => "n",
            Self::NPrime => "n_prime",
            Self::Three => "3",
            Self::FourPrime => "4_prime",
            Self::Four => "4",
            Self::Five => "5",
            Self::XPrime => "x_prime",
            Self::X => "x",
            Self::SixPrime => "6_prime",
            Self::Six => "6",
        }
    }

    /// Human-readable description of where the point sits in the plant.
    pub fn label(self) -> &'static str {
        match self {
            Self::One => "Condenser outlet (sat. liquid)",
            Self::TwoPrime => "Pump outlet (ideal)",
            Self::Two => "Pump outlet (real)",
            Self::N => "Preheater outlet (water)",
            Self::NPrime => "Preheater drain (sat. liquid)",
            Self::Three => "HP turbine inlet",
            Self::FourPrime => "HP turbine outlet (ideal)",
            Self::Four => "HP turbine outlet (real)",
            Self::Five => "LP turbine inlet",
            Self::XPrime => "Turbine extraction (ideal)",
            Self::X => "Turbine extraction (real)",
            Self::SixPrime => "LP turbine outlet (ideal)",
            Self::Six => "LP turbine outlet (real)",
        }
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for PointId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('′', "_prime");
        PointId::ALL
            .into_iter()
            .find(|id| id.key() == normalized)
            .ok_or_else(|| format!("Unknown point id: {}", s))
    }
}

/// Points of one cycle, keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cycle {
    points: BTreeMap<PointId, Point>,
}

impl Cycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cycle with every point of the vocabulary present and unknown.
    pub fn template() -> Self {
        Self {
            points: PointId::ALL
                .into_iter()
                .map(|id| (id, Point::default()))
                .collect(),
        }
    }

    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.get(&id)
    }

    pub fn insert(&mut self, id: PointId, point: Point) -> Option<Point> {
        self.points.insert(id, point)
    }

    /// Enthalpy of a point, absent when the point or its enthalpy is missing.
    pub fn h(&self, id: PointId) -> Option<f64> {
        self.get(id).and_then(|pt| pt.h)
    }

    /// Pressure of a point, absent when the point or its pressure is missing.
    pub fn p(&self, id: PointId) -> Option<f64> {
        self.get(id).and_then(|pt| pt.p)
    }

    /// Set a point's enthalpy, creating the point if needed.
    pub fn set_h(&mut self, id: PointId, h: f64) {
        self.points.entry(id).or_default().h = Some(h);
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.points.iter().map(|(id, pt)| (*id, pt))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(PointId, Point)> for Cycle {
    fn from_iter<I: IntoIterator<Item = (PointId, Point)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
