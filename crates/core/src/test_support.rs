//! Fixtures shared by unit tests.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use monotax_shared::AppConfig;

use crate::category::{CategoryLabel, CategoryTable, CategoryThreshold};
use crate::ingest::{ParserSettings, RecordParser};

pub fn label(letter: char) -> CategoryLabel {
    CategoryLabel::new(letter).unwrap()
}

pub fn table(entries: &[(char, Decimal)]) -> CategoryTable {
    CategoryTable::new(
        entries
            .iter()
            .map(|(l, c)| CategoryThreshold::new(label(*l), *c))
            .collect(),
    )
    .unwrap()
}

/// Parser for the built-in input settings.
pub fn parser() -> RecordParser {
    let config = AppConfig::builtin().unwrap();
    RecordParser::new(ParserSettings::from(&config.input))
}

/// Ceilings after the indexation update.
pub fn post_indexation() -> CategoryTable {
    table(&[
        ('A', dec!(7813063.45)),
        ('B', dec!(11447046.44)),
        ('C', dec!(16050091.57)),
        ('D', dec!(19926340.10)),
        ('E', dec!(23439190.34)),
        ('F', dec!(29374695.90)),
        ('G', dec!(35128502.31)),
        ('H', dec!(53298417.30)),
        ('I', dec!(59657887.55)),
        ('J', dec!(68318880.36)),
        ('K', dec!(82370281.28)),
    ])
}

/// Ceilings before the indexation update.
pub fn pre_indexation() -> CategoryTable {
    table(&[
        ('A', dec!(6450000)),
        ('B', dec!(9450000)),
        ('C', dec!(13250000)),
        ('D', dec!(16450000)),
        ('E', dec!(19350000)),
        ('F', dec!(24250000)),
        ('G', dec!(29000000)),
        ('H', dec!(44000000)),
        ('I', dec!(49250000)),
        ('J', dec!(56400000)),
        ('K', dec!(68000000)),
    ])
}
