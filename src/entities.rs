use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the upstream fuel price catalogue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FuelRecord {
    pub date: Option<String>,
    pub ron95: Option<Decimal>,
    pub ron97: Option<Decimal>,
    pub diesel: Option<Decimal>,
    pub series_type: Option<String>,
    pub diesel_eastmsia: Option<Decimal>,
}

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

impl FuelRecord {
    /// The record date, or `None` when missing or unparseable.
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(parse_date)
    }

    const fn price(&self, fuel_type: FuelType) -> Option<Decimal> {
        match fuel_type {
            FuelType::Ron95 => self.ron95,
            FuelType::Ron97 => self.ron97,
            FuelType::Diesel => self.diesel,
        }
    }
}

/// Lenient date parsing. Offsets are dropped, the written wall-clock time is kept.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Ron95,
    Ron97,
    Diesel,
}

impl FuelType {
    /// Flattening order within a record.
    pub const ALL: [Self; 3] = [Self::Ron95, Self::Ron97, Self::Diesel];
}

/// A single (date, fuel type, price) point, the unit that gets cached and returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatFuelEntry {
    pub date: Option<NaiveDateTime>,
    pub fuel_type: FuelType,
    pub price: Decimal,
}

/// Expands each record into one entry per reported price. Zero and negative
/// prices count as not reported.
pub fn flatten_records(records: &[FuelRecord]) -> Vec<FlatFuelEntry> {
    records
        .iter()
        .flat_map(|record| {
            let date = record.date();
            FuelType::ALL.into_iter().filter_map(move |fuel_type| {
                record
                    .price(fuel_type)
                    .filter(|price| *price > Decimal::ZERO)
                    .map(|price| FlatFuelEntry {
                        date,
                        fuel_type,
                        price,
                    })
            })
        })
        .collect()
}
