//! Hybrid analysis: the three divisor-sum classes of one range, grouped by
//! category label.

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::AsRefStr;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

use crate::enumerate::find_abundant_numbers;
use crate::enumerate::find_deficient_numbers;
use crate::enumerate::find_perfect_numbers;

/// Report categories. Declaration order is the report's key order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, IntoStaticStr,
)]
pub enum Category {
    #[strum(serialize = "Perfect Numbers")]
    Perfect,
    #[strum(serialize = "Deficient Numbers")]
    Deficient,
    #[strum(serialize = "Abundant Numbers")]
    Abundant,
}

/// Perfect, deficient and abundant numbers in `1..=limit`.
///
/// Serializes as a JSON object keyed by category label, in category order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HybridAnalysis {
    #[serde(rename = "Perfect Numbers")]
    perfect: Vec<u64>,
    #[serde(rename = "Deficient Numbers")]
    deficient: Vec<u64>,
    #[serde(rename = "Abundant Numbers")]
    abundant: Vec<u64>,
}

impl HybridAnalysis {
    pub fn get(&self, category: Category) -> &[u64] {
        match category {
            Category::Perfect => &self.perfect,
            Category::Deficient => &self.deficient,
            Category::Abundant => &self.abundant,
        }
    }

    /// Look a category up by its display label, e.g. `"Perfect Numbers"`.
    pub fn get_label(&self, label: &str) -> Option<&[u64]> {
        label.parse::<Category>().ok().map(|category| self.get(category))
    }

    /// Categories and their numbers, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[u64])> + '_ {
        Category::iter().map(move |category| (category, self.get(category)))
    }
}

pub fn hybrid_analysis(limit: u64) -> HybridAnalysis {
    let analysis = HybridAnalysis {
        perfect: find_perfect_numbers(limit),
        deficient: find_deficient_numbers(limit),
        abundant: find_abundant_numbers(limit),
    };
    tracing::debug!(
        limit,
        perfect = analysis.perfect.len(),
        deficient = analysis.deficient.len(),
        abundant = analysis.abundant.len(),
        "hybrid analysis finished"
    );
    analysis
}
