//! `monotax categories`: lists a regime's category ceilings.

use anyhow::Result;
use clap::Args;
use monotax_core::category::CategoryTable;
use monotax_shared::AppConfig;
use monotax_shared::types::format_currency;

use crate::load_table;

/// Arguments of the categories subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct CategoriesArgs {
    /// Regime to list. Defaults to the configured one.
    #[arg(long)]
    pub regime: Option<String>,
}

/// One line per category, lowest ceiling first.
pub fn format_table(regime: &str, table: &CategoryTable) -> String {
    let mut out = format!("Categories for regime {regime}\n");
    for threshold in table.sorted_ascending() {
        out.push_str(&format!(
            "  Category {}: {}\n",
            threshold.label,
            format_currency(threshold.ceiling)
        ));
    }
    out
}

/// Execute the categories subcommand.
pub fn run_categories(args: &CategoriesArgs, config: &AppConfig) -> Result<u8> {
    let (regime, table) = load_table(config, args.regime.as_deref())?;
    print!("{}", format_table(&regime, &table));
    Ok(0)
}
