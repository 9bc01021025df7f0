use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
mod views;

pub use table::Table;

/// A value that knows how to lay itself out as rows for `--format table`.
pub trait TableView {
    fn table(&self) -> Table;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + TableView>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(value.table().render(options))
        }
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + TableView>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}
