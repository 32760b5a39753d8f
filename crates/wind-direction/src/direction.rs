//! Wind direction value object.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::circular::{enclosing_arc, normalize_degrees, sector_index, SECTOR_COUNT};
use crate::error::{Result, WindDirectionError};

/// A set of dominant direction sectors described as one direction.
///
/// Members are normalized into `[0, 360)`, sorted and deduplicated. The bounds
/// describe the minimal arc enclosing every member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WindDirection {
    degrees: Vec<f64>,
    lower_bound: f64,
    upper_bound: f64,
}

impl WindDirection {
    /// Build a direction from degree values. Duplicates are collapsed.
    pub fn new<I>(degrees: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = Vec::new();
        for degree in degrees {
            if !degree.is_finite() {
                return Err(WindDirectionError::NonFiniteDegree(degree));
            }
            values.push(normalize_degrees(degree));
        }

        values.sort_by(f64::total_cmp);
        values.dedup();

        let (lower_bound, upper_bound) = enclosing_arc(&values).ok_or_else(|| {
            WindDirectionError::invalid_input("wind direction needs at least one degree value")
        })?;

        Ok(Self {
            degrees: values,
            lower_bound,
            upper_bound,
        })
    }

    /// Member sectors, sorted in `[0, 360)`.
    pub fn degrees(&self) -> &[f64] {
        &self.degrees
    }

    /// Start of the enclosing arc; negative when the arc crosses north.
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// End of the enclosing arc, in `[0, 360)`.
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Angular size of the enclosing arc.
    pub fn size(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// Middle of the enclosing arc, in `[0, 360)`.
    pub fn middle(&self) -> f64 {
        normalize_degrees((self.lower_bound + self.upper_bound) / 2.0)
    }

    /// 16-point compass index of the middle (0 = N, 4 = E, ...).
    pub fn sympo_code(&self) -> u8 {
        sector_index(self.middle())
    }

    pub fn compass(&self) -> Compass {
        Compass::from_sympo_code(self.sympo_code())
    }

    /// True when the enclosing arc fits within `max_size` degrees.
    pub fn check_size(&self, max_size: f64) -> bool {
        self.size() <= max_size
    }

    /// Direction holding the members of both `self` and `other`.
    pub fn merge(&self, other: &WindDirection) -> WindDirection {
        let mut degrees = Vec::with_capacity(self.degrees.len() + other.degrees.len());
        degrees.extend_from_slice(&self.degrees);
        degrees.extend_from_slice(&other.degrees);
        degrees.sort_by(f64::total_cmp);
        degrees.dedup();

        // Both member lists are non-empty, so the union has an arc.
        let (lower_bound, upper_bound) =
            enclosing_arc(&degrees).unwrap_or((self.lower_bound, self.upper_bound));

        WindDirection {
            degrees,
            lower_bound,
            upper_bound,
        }
    }

    /// Same compass sector as `other`.
    pub fn same_sector_as(&self, other: &WindDirection) -> bool {
        self.sympo_code() == other.sympo_code()
    }

    /// Compass sectors exactly half a turn apart.
    pub fn is_opposite_to(&self, other: &WindDirection) -> bool {
        let diff = (self.sympo_code() as i64 - other.sympo_code() as i64).rem_euclid(SECTOR_COUNT);
        diff == SECTOR_COUNT / 2
    }

    /// Compass label of the enclosing arc, e.g. `"NW"` or `"N to NE"`.
    pub fn describe(&self) -> String {
        let lower = Compass::from_sympo_code(sector_index(self.lower_bound));
        let upper = Compass::from_sympo_code(sector_index(self.upper_bound));
        if lower == upper {
            lower.to_string()
        } else {
            format!("{} to {}", lower, upper)
        }
    }
}

impl TryFrom<Vec<f64>> for WindDirection {
    type Error = WindDirectionError;

    fn try_from(degrees: Vec<f64>) -> Result<Self> {
        WindDirection::new(degrees)
    }
}

impl From<WindDirection> for Vec<f64> {
    fn from(direction: WindDirection) -> Self {
        direction.degrees
    }
}

impl Add for WindDirection {
    type Output = WindDirection;

    fn add(self, other: WindDirection) -> WindDirection {
        self.merge(&other)
    }
}

impl<'a> Add<&'a WindDirection> for &'a WindDirection {
    type Output = WindDirection;

    fn add(self, other: &'a WindDirection) -> WindDirection {
        self.merge(other)
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{:.1}, {:.1}]",
            self.describe(),
            self.lower_bound,
            self.upper_bound
        )
    }
}

/// The 16 points of the compass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compass {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl Compass {
    const ALL: [Compass; 16] = [
        Compass::N,
        Compass::NNE,
        Compass::NE,
        Compass::ENE,
        Compass::E,
        Compass::ESE,
        Compass::SE,
        Compass::SSE,
        Compass::S,
        Compass::SSW,
        Compass::SW,
        Compass::WSW,
        Compass::W,
        Compass::WNW,
        Compass::NW,
        Compass::NNW,
    ];

    /// Compass point for a sympo code (taken modulo 16).
    pub fn from_sympo_code(code: u8) -> Self {
        Self::ALL[(code as usize) % Self::ALL.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Compass::N => "N",
            Compass::NNE => "NNE",
            Compass::NE => "NE",
            Compass::ENE => "ENE",
            Compass::E => "E",
            Compass::ESE => "ESE",
            Compass::SE => "SE",
            Compass::SSE => "SSE",
            Compass::S => "S",
            Compass::SSW => "SSW",
            Compass::SW => "SW",
            Compass::WSW => "WSW",
            Compass::W => "W",
            Compass::WNW => "WNW",
            Compass::NW => "NW",
            Compass::NNW => "NNW",
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
