//! Feature importance bar chart

use crate::data::Feature;

/// Width of the longest bar.
pub const BAR_WIDTH: usize = 40;

/// Horizontal bar chart of importances, most important first.
///
/// Bars are scaled to the largest importance.
pub fn importance_chart(importances: &[(Feature, f64)]) -> String {
    if importances.is_empty() {
        return String::from("No feature importance data");
    }

    let mut sorted = importances.to_vec();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));

    let name_width = sorted.iter().map(|(f, _)| f.name().len()).max().unwrap_or(10);
    let max_score = sorted.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    let mut output = String::from("Feature importance\n");
    for (feature, score) in &sorted {
        let bar_len = if max_score > 0.0 {
            ((score / max_score) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = super::BLOCK_FULL.to_string().repeat(bar_len);
        output.push_str(&format!(
            "  {:name_width$}  {bar:BAR_WIDTH$}  {score:.3}\n",
            feature.name()
        ));
    }
    output
}
