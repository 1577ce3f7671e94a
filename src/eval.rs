use std::path::{Path, PathBuf};

/// A precomputed evaluation figure shipped next to the binary.
#[derive(Debug, Clone)]
pub struct EvalImage {
    pub title: &'static str,
    pub file: &'static str,
    pub caption: &'static str,
}

impl EvalImage {
    pub fn path(&self, asset_dir: &Path) -> PathBuf {
        asset_dir.join(self.file)
    }
}

pub const IMAGES: [EvalImage; 2] = [
    EvalImage {
        title: "Actual vs Predicted Sentiment",
        file: "eval_graph.png",
        caption: "Left: Actual Sentiment | Right: Predicted Sentiment",
    },
    EvalImage {
        title: "Word Frequency in Tweets",
        file: "freq.png",
        caption: "Most Frequent Words in Tweets",
    },
];

struct Row {
    name: &'static str,
    precision: Option<f32>,
    recall: Option<f32>,
    f1: f32,
    support: u32,
    bold: bool,
}

const REPORT: [Row; 6] = [
    Row { name: "Positive", precision: Some(0.63), recall: Some(0.59), f1: 0.61, support: 14651, bold: false },
    Row { name: "Negative", precision: Some(0.72), recall: Some(0.75), f1: 0.73, support: 20331, bold: false },
    Row { name: "Neutral", precision: Some(0.00), recall: Some(0.00), f1: 0.00, support: 0, bold: false },
    Row { name: "Accuracy", precision: None, recall: None, f1: 0.68, support: 34982, bold: true },
    Row { name: "Macro Avg", precision: Some(0.45), recall: Some(0.45), f1: 0.45, support: 34982, bold: true },
    Row { name: "Weighted Avg", precision: Some(0.68), recall: Some(0.68), f1: 0.68, support: 34982, bold: true },
];

fn cell(value: Option<f32>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

/// The classification report as a markdown table.
pub fn classification_report() -> String {
    let mut table = String::from(
        "| Sentiment | Precision | Recall | F1-Score | Support |\n\
         |-----------|-----------|--------|----------|---------|\n",
    );
    for row in REPORT.iter() {
        let name = if row.bold {
            format!("**{}**", row.name)
        } else {
            row.name.to_string()
        };
        // Accuracy has no precision/recall, only an emphasised f1
        let f1 = if row.precision.is_none() {
            format!("**{:.2}**", row.f1)
        } else {
            format!("{:.2}", row.f1)
        };
        table.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            name,
            cell(row.precision),
            cell(row.recall),
            f1,
            row.support
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_has_header_and_every_row() {
        let report = classification_report();
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 2 + REPORT.len());
        assert!(lines[0].starts_with("| Sentiment | Precision"));
        assert_eq!(lines[2], "| Positive | 0.63 | 0.59 | 0.61 | 14651 |");
        assert_eq!(lines[5], "| **Accuracy** |  |  | **0.68** | 34982 |");
        assert_eq!(lines[7], "| **Weighted Avg** | 0.68 | 0.68 | 0.68 | 34982 |");
    }

    #[test]
    fn images_resolve_under_asset_dir() {
        let path = IMAGES[0].path(Path::new("assets"));
        assert_eq!(path, PathBuf::from("assets/eval_graph.png"));
    }
}
