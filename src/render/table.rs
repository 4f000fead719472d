//! Candidate table

use crate::data::{Dataset, Feature};

/// Render the dataset as an aligned table, one row per candidate.
pub fn dataset_table(dataset: &Dataset) -> String {
    if dataset.is_empty() {
        return String::from("No candidates");
    }

    let index_width = dataset.len().to_string().len().max(1);
    let widths: Vec<usize> = Feature::ALL.iter().map(|f| f.name().len().max(6)).collect();

    let mut output = format!("{:>index_width$}", "#");
    for (feature, width) in Feature::ALL.iter().zip(&widths) {
        output.push_str(&format!("  {:>width$}", feature.name()));
    }
    output.push_str("  label\n");

    for (i, sample) in dataset.samples().iter().enumerate() {
        output.push_str(&format!("{i:>index_width$}"));
        for (feature, width) in Feature::ALL.iter().zip(&widths) {
            output.push_str(&format!("  {:>width$}", sample.features.get(*feature)));
        }
        output.push_str(&format!("  {} ({})\n", sample.label.index(), sample.label));
    }
    output
}
