//! Analysis report: the timed sections plus the hybrid breakdown, rendered
//! either as the plain-text console layout or as JSON.

use std::io::Write;
use std::time::Duration;

use numclass_core::HybridAnalysis;
use serde::Serialize;

/// Printed in place of an empty sequence.
pub const NO_DATA: &str = "No data.";

const HYBRID_TITLE: &str = "Hybrid Number Analysis";
const HYBRID_RULE: &str = "===========================";

/// One timed operation and its results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub values: Vec<u128>,
    #[serde(
        rename = "elapsed_ms",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_millis"
    )]
    pub elapsed: Option<Duration>,
}

impl Section {
    pub fn new<T>(title: &'static str, values: Vec<T>, elapsed: Option<Duration>) -> Self
    where
        T: Into<u128>,
    {
        Self {
            title,
            values: values.into_iter().map(Into::into).collect(),
            elapsed,
        }
    }
}

/// Full output of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub limit: u64,
    pub max_exponent: u32,
    pub sections: Vec<Section>,
    pub hybrid: HybridAnalysis,
}

fn serialize_millis<S>(elapsed: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match elapsed {
        Some(elapsed) => serializer.serialize_u128(elapsed.as_millis()),
        None => serializer.serialize_none(),
    }
}

/// Join values with `", "`, or [`NO_DATA`] when there are none.
pub fn format_sequence<T: ToString>(values: &[T]) -> String {
    if values.is_empty() {
        return NO_DATA.to_string();
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl AnalysisReport {
    /// Write the sections and the hybrid breakdown in console layout.
    pub fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
        for section in &self.sections {
            writeln!(out, "{}", section.title)?;
            writeln!(out, "{}", "-".repeat(section.title.len()))?;
            writeln!(out, "{}", format_sequence(&section.values))?;
            if let Some(elapsed) = section.elapsed {
                writeln!(out, "Execution time: {} ms", elapsed.as_millis())?;
            }
            writeln!(out)?;
        }

        writeln!(out, "{HYBRID_TITLE}")?;
        writeln!(out, "{HYBRID_RULE}")?;
        writeln!(out)?;
        for (category, numbers) in self.hybrid.iter() {
            writeln!(out, "{category}:")?;
            writeln!(out, "{}", format_sequence(numbers))?;
            writeln!(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numclass_core::hybrid_analysis;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_sequence_joins_or_reports_no_data() {
        assert_eq!(format_sequence(&[6u64, 28]), "6, 28");
        assert_eq!(format_sequence::<u64>(&[]), "No data.");
    }

    #[test]
    fn text_layout() {
        let report = AnalysisReport {
            limit: 6,
            max_exponent: 2,
            sections: vec![
                Section::new("Perfect Numbers", vec![6u64], Some(Duration::from_millis(3))),
                Section::new::<u128>("Mersenne Primes", vec![], None),
            ],
            hybrid: hybrid_analysis(6),
        };

        let mut out = Vec::new();
        report.write_text(&mut out).expect("write");
        let text = String::from_utf8(out).expect("utf8");

        let expected = "\
Perfect Numbers
---------------
6
Execution time: 3 ms

Mersenne Primes
---------------
No data.

Hybrid Number Analysis
===========================

Perfect Numbers:
6

Deficient Numbers:
1, 2, 3, 4, 5

Abundant Numbers:
No data.

";
        assert_eq!(text, expected);
    }

    #[test]
    fn json_omits_missing_timings() {
        let section = Section::new("Perfect Numbers", vec![6u64, 28], None);
        let json = serde_json::to_string(&section).expect("json");
        assert_eq!(json, r#"{"title":"Perfect Numbers","values":[6,28]}"#);

        let timed = Section::new("Perfect Numbers", vec![6u64], Some(Duration::from_millis(12)));
        let json = serde_json::to_string(&timed).expect("json");
        assert_eq!(json, r#"{"title":"Perfect Numbers","values":[6],"elapsed_ms":12}"#);
    }
}
