//! Plain-text rendering of a flow outcome for the terminal.

use hpc_core::chart::{ChartSpec, Series};
use hpc_core::flow::FlowOutcome;

pub fn render(outcome: &FlowOutcome) -> String {
    let mut lines = Vec::new();
    if let Some(message) = &outcome.message {
        lines.push(message.clone());
    }
    if let Some(spec) = &outcome.chart {
        lines.extend(summarize_chart(spec));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn summarize_chart(spec: &ChartSpec) -> Vec<String> {
    let mut lines = Vec::new();
    if let (Some(first), Some(last)) = (spec.labels.first(), spec.labels.last()) {
        lines.push(format!(
            "Zeitraum: {} bis {} ({} Zeitschritte)",
            first,
            last,
            spec.labels.len()
        ));
    }
    lines.extend(spec.series.iter().map(summarize_series));
    if !spec.is_aligned() {
        lines.push("Warnung: Reihen und Zeitschritte sind unterschiedlich lang".to_string());
    }
    lines
}

fn summarize_series(series: &Series) -> String {
    if series.data.is_empty() {
        return format!("{}: keine Werte", series.label);
    }
    let min = series.data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = series.data.iter().sum::<f64>() / series.data.len() as f64;
    format!(
        "{}: {} Werte, min {:.2}, max {:.2}, Mittel {:.2}",
        series.label,
        series.data.len(),
        min,
        max,
        mean
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpc_core::chart::AxisSide;

    #[test]
    fn message_only() {
        let outcome = FlowOutcome {
            message: Some("3.46".into()),
            ..FlowOutcome::default()
        };
        assert_eq!(render(&outcome), "3.46\n");
    }

    #[test]
    fn series_summary() {
        let spec = ChartSpec::new(vec!["01.01. 00:00".into(), "01.01. 01:00".into()])
            .with_series(Series::new("Last", vec![1.0, 3.0], "blue", AxisSide::Primary))
            .with_series(Series::new("Leer", Vec::new(), "red", AxisSide::Primary));
        let lines = summarize_chart(&spec);
        assert_eq!(
            lines[0],
            "Zeitraum: 01.01. 00:00 bis 01.01. 01:00 (2 Zeitschritte)"
        );
        assert_eq!(lines[1], "Last: 2 Werte, min 1.00, max 3.00, Mittel 2.00");
        assert_eq!(lines[2], "Leer: keine Werte");
        assert!(lines[3].starts_with("Warnung"));
    }
}
