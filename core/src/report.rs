//! Presentation helpers: narrative text for insight events and a plain
//! text table for year records.
//!
//! Nothing in here feeds back into the projection.

use crate::{black_swan::BlackSwanKind, event::InsightEvent, projection::YearRecord, types::Year};

/// Separator placed between rendered insights.
pub const INSIGHT_SEPARATOR: &str = "\n\n";

const SUMMARY_INDENT: &str = "      ";

/// Group digits in threes with commas: `1234567` -> `"1,234,567"`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn render_insight(event: &InsightEvent) -> String {
    match event {
        InsightEvent::LongevityBreakthrough { year, life_expectancy_gain } => format!(
            "Year {year}: Major longevity breakthrough occurred, increasing life expectancy by {life_expectancy_gain} years."
        ),
        InsightEvent::BlackSwan {
            year,
            event_type,
            population_decrease_pct,
            life_expectancy_impact,
            economic_decrease_pct,
        } => render_black_swan(
            *year,
            *event_type,
            *population_decrease_pct,
            *life_expectancy_impact,
            *economic_decrease_pct,
        ),
        InsightEvent::YearSummary { year, record } => render_summary(*year, record),
    }
}

/// All insights, in order, separated by blank lines.
pub fn render_insights(events: &[InsightEvent]) -> String {
    events
        .iter()
        .map(render_insight)
        .collect::<Vec<_>>()
        .join(INSIGHT_SEPARATOR)
}

fn render_black_swan(
    year: Year,
    kind: BlackSwanKind,
    population_decrease_pct: f64,
    life_expectancy_impact: f64,
    economic_decrease_pct: f64,
) -> String {
    format!(
        "Year {year}: {} occurred. Population impact: {population_decrease_pct:.2}% decrease. \
         Life expectancy impact: {life_expectancy_impact} years. \
         Economic impact: {economic_decrease_pct:.2}% decrease in growth rate.",
        kind.event().name
    )
}

fn render_summary(year: Year, r: &YearRecord) -> String {
    let lines = [
        format!("Population: {}", format_thousands(r.population)),
        format!("Life Expectancy: {}", r.life_expectancy),
        format!("Retirement Age: {}", r.retirement_age),
        format!("Workforce: {}", format_thousands(r.workforce)),
        format!("Healthcare Expenditure: ${}", format_thousands(r.healthcare_expenditure)),
        format!("Economic Growth Rate: {:.2}%", r.economic_growth_rate),
        format!("Centenarians: {}", format_thousands(r.centenarians)),
        format!("Supercentenarians: {}", format_thousands(r.supercentenarians)),
        format!(
            "Cancer Incidence in Centenarians: {}",
            format_thousands(r.cancer_incidence_in_centenarians)
        ),
    ];

    let mut out = format!("Year {year}:");
    for line in lines {
        out.push('\n');
        out.push_str(SUMMARY_INDENT);
        out.push_str(&line);
    }
    out
}

const TABLE_HEADERS: [&str; 10] = [
    "Year",
    "Population",
    "LifeExp",
    "RetireAge",
    "Healthcare",
    "Workforce",
    "Growth%",
    "Centenarians",
    "Supercent.",
    "Cancer",
];

/// Right-aligned fixed-width table, one row per record.
pub fn render_table(records: &[YearRecord]) -> String {
    let rows: Vec<[String; 10]> = records
        .iter()
        .map(|r| {
            [
                r.year.to_string(),
                format_thousands(r.population),
                r.life_expectancy.to_string(),
                r.retirement_age.to_string(),
                format_thousands(r.healthcare_expenditure),
                format_thousands(r.workforce),
                format!("{:.2}", r.economic_growth_rate),
                format_thousands(r.centenarians),
                format_thousands(r.supercentenarians),
                format_thousands(r.cancer_incidence_in_centenarians),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, TABLE_HEADERS.iter().copied(), &widths);
    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    for (i, (cell, &width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{cell:>width$}"));
    }
    out.push('\n');
}
