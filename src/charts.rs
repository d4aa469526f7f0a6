//! Placeholder datasets for the example chart widgets on the dashboard.
//!
//! The values are fixtures the frontend was built against, they are not derived
//! from the fuel prices.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComboPoint {
    pub date: NaiveDate,
    pub dataset1_value: i32,
    pub dataset2_value: i32,
    pub dataset3_value: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthPoint {
    pub month: &'static str,
    pub dataset1_value: i32,
    pub dataset2_value: i32,
}

const COMBO_ANCHOR: (i32, u32, u32) = (2025, 9, 8);

const COMBO_VALUES: [[i32; 3]; 7] = [
    [48, 27, 53],
    [86, 82, 70],
    [19, 69, 67],
    [23, 30, 87],
    [57, 62, 85],
    [79, 10, 66],
    [19, 97, 96],
];

const MONTHS: [&str; 7] = [
    "January", "February", "March", "April", "May", "June", "July",
];

const VERTICAL_BAR_VALUES: [[i32; 2]; 7] = [
    [58, 24],
    [-32, 42],
    [95, -2],
    [-28, 18],
    [-35, 10],
    [90, 42],
    [-3, 6],
];

const LINE_VALUES: [[i32; 2]; 7] = [
    [-82, 95],
    [-70, -65],
    [8, 40],
    [-84, 5],
    [22, 62],
    [6, 100],
    [68, 28],
];

/// Seven consecutive days starting at the anchor date.
pub fn combo_series() -> Vec<ComboPoint> {
    let (year, month, day) = COMBO_ANCHOR;
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|anchor| {
            anchor
                .iter_days()
                .zip(COMBO_VALUES)
                .map(|(date, [dataset1_value, dataset2_value, dataset3_value])| ComboPoint {
                    date,
                    dataset1_value,
                    dataset2_value,
                    dataset3_value,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn month_series(values: [[i32; 2]; 7]) -> Vec<MonthPoint> {
    MONTHS
        .into_iter()
        .zip(values)
        .map(|(month, [dataset1_value, dataset2_value])| MonthPoint {
            month,
            dataset1_value,
            dataset2_value,
        })
        .collect()
}

pub fn vertical_bar_series() -> Vec<MonthPoint> {
    month_series(VERTICAL_BAR_VALUES)
}

pub fn line_series() -> Vec<MonthPoint> {
    month_series(LINE_VALUES)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DummyData {
    pub combo_chart: Vec<ComboPoint>,
    pub vertical_bar_chart: Vec<MonthPoint>,
    pub line_chart: Vec<MonthPoint>,
}

impl DummyData {
    pub fn generate() -> Self {
        Self {
            combo_chart: combo_series(),
            vertical_bar_chart: vertical_bar_series(),
            line_chart: line_series(),
        }
    }
}
