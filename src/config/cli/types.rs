//! CLI value types: output formats and the inline confusion matrix

use std::fmt;

/// Output format for report-producing commands
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json, yaml"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// A confusion matrix typed on the command line as `"5,0,0;1,3,0;0,2,9"`.
///
/// Rows are separated by `;`, cells by `,`. Entries are signed so that
/// negative or ragged input reaches the impact calculator and is reported
/// there rather than as a parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix(pub Vec<Vec<i64>>);

impl CountMatrix {
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.0
    }
}

impl std::str::FromStr for CountMatrix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("Empty matrix. Expected rows like \"5,0,0;1,3,0;0,2,9\"".to_string());
        }
        s.split(';')
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .split(',')
                    .map(|cell| {
                        cell.trim().parse::<i64>().map_err(|e| {
                            format!("Invalid matrix entry '{}' in row {row}: {e}", cell.trim())
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map(CountMatrix)
    }
}

impl fmt::Display for CountMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .0
            .iter()
            .map(|row| row.iter().map(i64::to_string).collect::<Vec<_>>().join(","))
            .collect();
        f.write_str(&rows.join(";"))
    }
}
