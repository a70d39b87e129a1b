//! Resource allocation categories

use serde::{Deserialize, Serialize};

/// The fixed set of resource categories, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryName {
    Compute,
    Storage,
    Network,
    Other,
}

/// All categories, in the order the legend shows them
pub const CATEGORY_NAMES: [CategoryName; 4] = [
    CategoryName::Compute,
    CategoryName::Storage,
    CategoryName::Network,
    CategoryName::Other,
];

impl CategoryName {
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryName::Compute => "Compute",
            CategoryName::Storage => "Storage",
            CategoryName::Network => "Network",
            CategoryName::Other => "Other",
        }
    }
}

/// A named allocation magnitude, regenerated wholesale on every refresh
///
/// Values are uniform integers in [0, 100). No identity or continuity is
/// preserved across refreshes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: CategoryName,
    pub value: u64,
}

impl CategoryShare {
    pub fn new(name: CategoryName, value: u64) -> Self {
        Self { name, value }
    }
}
