//! Sort - Sorted View Parameters and Comparison Policy

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::vehicle::Vehicle;
use crate::error::{Error, Result};

/// Vehicle field the sorted view is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Id,
    Name,
    Model,
    Year,
    Color,
    Price,
    Latitude,
    Longitude,
}

impl SortField {
    pub const ALL: [SortField; 8] = [
        SortField::Id,
        SortField::Name,
        SortField::Model,
        SortField::Year,
        SortField::Color,
        SortField::Price,
        SortField::Latitude,
        SortField::Longitude,
    ];

    /// Field name as it appears in the JSON records
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Model => "model",
            SortField::Year => "year",
            SortField::Color => "color",
            SortField::Price => "price",
            SortField::Latitude => "latitude",
            SortField::Longitude => "longitude",
        }
    }

    /// Native ordering of this field between two vehicles.
    ///
    /// Floats that are not comparable (NaN) are treated as equal.
    pub fn compare(&self, a: &Vehicle, b: &Vehicle) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Model => a.model.cmp(&b.model),
            SortField::Year => a.year.cmp(&b.year),
            SortField::Color => a.color.cmp(&b.color),
            SortField::Price => compare_f64(a.price, b.price),
            SortField::Latitude => compare_f64(a.latitude, b.latitude),
            SortField::Longitude => compare_f64(a.longitude, b.longitude),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SortField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| Error::Invalid {
                message: format!("unknown sort field '{s}'"),
            })
    }
}

/// Direction of the sorted view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(Error::Invalid {
                message: format!("unknown sort order '{other}'"),
            }),
        }
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Copy `vehicles` and order the copy by `field` in `order`.
///
/// Descending mirrors the comparator instead of reversing the ascending
/// output, so with the stable sort equal keys keep their original relative
/// order in both directions. An unset field returns the input order.
pub fn sort_vehicles(
    vehicles: &[Vehicle],
    field: Option<SortField>,
    order: SortOrder,
) -> Vec<Vehicle> {
    let mut sorted = vehicles.to_vec();
    let Some(field) = field else {
        return sorted;
    };

    match order {
        SortOrder::Asc => sorted.sort_by(|a, b| field.compare(a, b)),
        SortOrder::Desc => sorted.sort_by(|a, b| field.compare(b, a)),
    }
    sorted
}
