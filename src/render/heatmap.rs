//! Confusion-matrix heat map

use crate::eval::ConfusionMatrix;

/// Shade ramp from an empty cell to the fullest cell.
pub const SHADES: [char; 5] = [' ', '\u{2591}', '\u{2592}', '\u{2593}', super::BLOCK_FULL];

pub(super) fn shade(count: usize, max: usize) -> char {
    if max == 0 || count == 0 {
        return SHADES[0];
    }
    let steps = SHADES.len() - 1;
    let level = (count * steps).div_ceil(max).clamp(1, steps);
    SHADES[level]
}

/// Render `cm` as a labelled grid, rows actual and columns predicted.
///
/// Each cell carries a shade proportional to its count (relative to the
/// largest cell) followed by the count itself. `names` labels the axes; when
/// its length does not match the matrix the numeric labels are used.
pub fn confusion_heatmap(cm: &ConfusionMatrix, names: &[&str]) -> String {
    let labels: Vec<String> = if names.len() == cm.n_classes() {
        names.iter().map(|s| (*s).to_string()).collect()
    } else {
        cm.labels().iter().map(ToString::to_string).collect()
    };

    let max = cm.matrix().iter().flatten().copied().max().unwrap_or(0);
    let count_width = max.to_string().len();
    let cell_width = labels.iter().map(String::len).max().unwrap_or(1).max(count_width + 3);
    let row_width = labels.iter().map(String::len).max().unwrap_or(1).max("actual".len());

    let mut output = format!("{:>row_width$}  predicted\n", "");
    output.push_str(&format!("{:>row_width$}", "actual"));
    for label in &labels {
        output.push_str(&format!(" │{label:^cell_width$}"));
    }
    output.push('\n');

    for (label, row) in labels.iter().zip(cm.matrix()) {
        output.push_str(&format!("{label:>row_width$}"));
        for &count in row {
            let fill = shade(count, max).to_string().repeat(2);
            let cell = format!("{fill} {count:>count_width$}");
            output.push_str(&format!(" │{cell:^cell_width$}"));
        }
        output.push('\n');
    }
    output
}
