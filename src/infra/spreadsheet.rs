//! One-row spreadsheet export of the current simulation.

use std::{fs, path::PathBuf};

use rust_xlsxwriter::{Format, Workbook};

use super::{export_path, ExportError};
use crate::domain::{BreakEven, Simulation};

const HEADERS: [&str; 5] = [
    "Sell price",
    "Total cost",
    "Profit",
    "Margin %",
    "Break-even units",
];

/// Builds the .xlsx byte stream: a bold header row and one data row, margin
/// at two decimals, break-even either as a number or the sentinel text.
pub fn spreadsheet_bytes(snapshot: &Simulation) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Simulation")?;

    let header_format = Format::new().set_bold();
    for (column, title) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, column as u16, *title, &header_format)?;
    }

    sheet.write_number(1, 0, snapshot.input.sell_price)?;
    sheet.write_number(1, 1, snapshot.result.total_cost)?;
    sheet.write_number(1, 2, snapshot.result.profit)?;

    let margin_format = Format::new().set_num_format("0.00");
    sheet.write_number_with_format(1, 3, snapshot.result.margin_percent, &margin_format)?;

    match snapshot.result.break_even {
        BreakEven::Units(units) => {
            let units_format = Format::new().set_num_format("0.0");
            sheet.write_number_with_format(1, 4, units, &units_format)?;
        }
        BreakEven::NotProfitable => {
            sheet.write_string(1, 4, "Not profitable")?;
        }
    }

    sheet.autofit();
    Ok(workbook.save_to_buffer()?)
}

/// Writes the spreadsheet next to the user's other downloads and returns the
/// path.
pub fn save_spreadsheet(snapshot: &Simulation) -> Result<PathBuf, ExportError> {
    let bytes = spreadsheet_bytes(snapshot)?;
    let path = export_path("xlsx");
    fs::write(&path, bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{simulate, SimulationInput};

    #[test]
    fn test_spreadsheet_bytes_are_a_zip_container() {
        let snapshot = simulate(SimulationInput::default());
        let bytes = spreadsheet_bytes(&snapshot).unwrap();
        // .xlsx is a ZIP archive.
        assert!(bytes.starts_with(b"PK\x03\x04"));
    }

    #[test]
    fn test_loss_snapshot_exports_the_sentinel() {
        let snapshot = simulate(SimulationInput {
            sell_price: 10_000.0,
            product_cost: 8_000.0,
            shipping_cost: 2_000.0,
            commission_rate: 0.10,
            advertising_cost: 3_000.0,
            other_variable_costs: 1_000.0,
        });
        assert_eq!(snapshot.result.break_even, BreakEven::NotProfitable);
        // The sentinel row must still produce a valid workbook.
        let bytes = spreadsheet_bytes(&snapshot).unwrap();
        assert!(!bytes.is_empty());
    }
}
