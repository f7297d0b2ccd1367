//! Rendering line reports for the inspect command

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::scaling::{examine_line, rounding_for, Rounding};

/// What the quantity grammar found on one line of a recipe, without any
/// ratio applied. Pass-through lines carry no amount.
#[derive(Debug, Serialize)]
pub struct LineReport<'i> {
    pub line: usize,
    pub text: &'i str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_to: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest: Option<&'i str>,
}

/// Run the quantity grammar over every line of the document and report what
/// it would scale and how it would round, a dry run of the converter.
pub fn survey(full_text: &str) -> Vec<LineReport<'_>> {
    full_text
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            let text = line.trim();

            match examine_line(text) {
                Some(quantity) => LineReport {
                    line: index + 1,
                    text,
                    amount: Some(quantity.amount),
                    amount_to: quantity.amount_to,
                    rounding: Some(match rounding_for(quantity.rest) {
                        Rounding::Whole => "whole",
                        Rounding::Hundredths => "hundredths",
                    }),
                    rest: Some(quantity.rest),
                },
                None => LineReport {
                    line: index + 1,
                    text,
                    amount: None,
                    amount_to: None,
                    rounding: None,
                    rest: None,
                },
            }
        })
        .collect()
}

/// Render the reports as JSON for consumption by other tooling.
pub fn render_json(reports: &[LineReport]) -> String {
    serde_json::to_string_pretty(reports).expect("Serialize line reports")
}

/// Render the reports as a colored listing for the terminal, one row per
/// line of the document.
pub fn render_terminal(reports: &[LineReport]) -> String {
    let mut output = String::new();

    for report in reports {
        // pad before colorizing, otherwise the escape codes count against
        // the column widths
        let number = format!("{:>4}", report.line);

        let row = match report.amount {
            Some(amount) => {
                let numbers = match report.amount_to {
                    Some(amount_to) => format!("{} - {}", amount, amount_to),
                    None => amount.to_string(),
                };

                format!(
                    "{}  {}  {:<10}  {}",
                    number.dimmed(),
                    format!("{:>10}", numbers)
                        .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                        .bold(),
                    report
                        .rounding
                        .unwrap_or(""),
                    report
                        .rest
                        .unwrap_or("")
                        .trim()
                )
            }
            None => format!(
                "{}  {:>10}  {:<10}  {}",
                number.dimmed(),
                "",
                "",
                report
                    .text
                    .dimmed()
            ),
        };

        output.push_str(&row);
        output.push('\n');
    }

    output
}
