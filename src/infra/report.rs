//! One-page PDF report of the current simulation.

use std::{fs, path::PathBuf};

use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::{export_path, ExportError};
use crate::domain::Simulation;
use crate::util::format;
use crate::util::version::{version_label, APP_NAME};

/// Builds the PDF byte stream: a title, each result field as a label:value
/// line, and the verdict's advisory message as the closing paragraph.
pub fn report_bytes(snapshot: &Simulation) -> Result<Vec<u8>, ExportError> {
    // A4 portrait.
    let (doc, page, layer) = PdfDocument::new(
        format!("{APP_NAME} report"),
        Mm(210.0),
        Mm(297.0),
        "content",
    );
    let left = Mm(20.0);
    let line_step = 9.0;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| ExportError::Pdf(err.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|err| ExportError::Pdf(err.to_string()))?;
    let content = doc.get_page(page).get_layer(layer);

    content.use_text(
        format!("{APP_NAME} - Simulation Report"),
        16.0,
        left,
        Mm(270.0),
        &bold,
    );

    let result = &snapshot.result;
    let lines = [
        ("Sell price", format::currency(snapshot.input.sell_price)),
        ("Commission", format::currency(result.commission_value)),
        ("Total cost", format::currency(result.total_cost)),
        ("Profit per unit", format::currency(result.profit)),
        ("Margin", format::percent(result.margin_percent)),
        ("Break-even units", format::break_even(&result.break_even)),
    ];

    let mut y = 250.0;
    for (label, value) in lines {
        content.use_text(format!("{label}: {value}"), 11.0, left, Mm(y), &regular);
        y -= line_step;
    }

    y -= line_step;
    content.use_text(
        format!("Verdict: {}", result.verdict.label()),
        12.0,
        left,
        Mm(y),
        &bold,
    );
    y -= line_step;
    content.use_text(result.verdict.message(), 11.0, left, Mm(y), &regular);

    content.use_text(
        format!("Generated by {APP_NAME} {}", version_label()),
        8.0,
        left,
        Mm(15.0),
        &regular,
    );

    doc.save_to_bytes()
        .map_err(|err| ExportError::Pdf(err.to_string()))
}

/// Writes the report next to the user's other downloads and returns the
/// path.
pub fn save_report(snapshot: &Simulation) -> Result<PathBuf, ExportError> {
    let bytes = report_bytes(snapshot)?;
    let path = export_path("pdf");
    fs::write(&path, bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{simulate, SimulationInput};

    #[test]
    fn test_report_bytes_are_a_pdf() {
        let snapshot = simulate(SimulationInput::default());
        let bytes = report_bytes(&snapshot).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_loss_report_renders() {
        let snapshot = simulate(SimulationInput {
            sell_price: 10_000.0,
            product_cost: 8_000.0,
            shipping_cost: 2_000.0,
            commission_rate: 0.10,
            advertising_cost: 3_000.0,
            other_variable_costs: 1_000.0,
        });
        let bytes = report_bytes(&snapshot).unwrap();
        assert!(!bytes.is_empty());
    }
}
