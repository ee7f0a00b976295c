use crate::filter::YearRange;
use crate::types::{
    CategoryRankingRow, CategoryTivRow, CountryRankingRow, DashboardMetrics, ImporterRank,
    RegisterRow, TradeRecord,
};
use crate::util::{format_int, format_number};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Countries ranked by total delivered weapons, ascending, keeping only the
/// `top_n` largest. Ascending order puts the biggest bar at the top of a
/// horizontal bar chart listing categories bottom-to-top.
pub fn rank_countries_by_delivered(data: &[TradeRecord], top_n: usize) -> Vec<(String, u64)> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for r in data {
        *totals.entry(r.supplier.as_str()).or_insert(0) += r.delivery_number;
    }
    let mut pairs: Vec<(String, u64)> = totals
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    pairs.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    let cut = pairs.len().saturating_sub(top_n);
    pairs.split_off(cut)
}

/// Weapon categories ranked by total delivered weapons, ascending, no
/// truncation.
pub fn rank_categories_by_delivered(data: &[TradeRecord]) -> Vec<(String, u64)> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for r in data {
        *totals.entry(r.weapon_category.as_str()).or_insert(0) += r.delivery_number;
    }
    let mut pairs: Vec<(String, u64)> = totals
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    pairs.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    pairs
}

/// Weapon categories ranked by summed SIPRI TIV, ascending, no truncation.
pub fn rank_categories_by_tiv(data: &[TradeRecord]) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for r in data {
        *totals.entry(r.weapon_category.as_str()).or_insert(0.0) += r.tiv;
    }
    let mut pairs: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    pairs.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    pairs
}

/// Scalar summaries for the metric tiles. Rank and share are looked up in
/// the importer rank table by the selected period label; a missing row (or
/// the `All` selector) leaves them out rather than failing.
pub fn compute_metrics(
    data: &[TradeRecord],
    ranks: &[ImporterRank],
    range: YearRange,
) -> DashboardMetrics {
    let suppliers: HashSet<&str> = data.iter().map(|r| r.supplier.as_str()).collect();
    let total_delivered: u64 = data.iter().map(|r| r.delivery_number).sum();

    let period = match range {
        YearRange::All => None,
        _ => ranks.iter().find(|p| p.period == range.label()),
    };

    DashboardMetrics {
        supplier_count: suppliers.len(),
        total_delivered,
        importer_rank: period.map(|p| p.rank),
        import_share: period.map(|p| p.share),
    }
}

/// The eight-column projection of the filtered register shown as the data
/// table, in filtered order.
pub fn project_register(data: &[TradeRecord]) -> Vec<RegisterRow> {
    data.iter()
        .map(|r| RegisterRow {
            supplier: r.supplier.clone(),
            delivery_year_start: r.delivery_year_start,
            delivery_year_end: r.delivery_year_end,
            weapon_designation: r.weapon_designation.clone(),
            weapon_category: r.weapon_category.clone(),
            company: r.company.clone(),
            country_of_origin: r.country_of_origin.clone(),
            tiv: format_number(r.tiv, 2),
        })
        .collect()
}

pub fn country_rows(pairs: &[(String, u64)]) -> Vec<CountryRankingRow> {
    pairs
        .iter()
        .map(|(country, total)| CountryRankingRow {
            country: country.clone(),
            delivered: format_int(*total),
        })
        .collect()
}

pub fn category_rows(pairs: &[(String, u64)]) -> Vec<CategoryRankingRow> {
    pairs
        .iter()
        .map(|(category, total)| CategoryRankingRow {
            category: category.clone(),
            delivered: format_int(*total),
        })
        .collect()
}

pub fn category_tiv_rows(pairs: &[(String, f64)]) -> Vec<CategoryTivRow> {
    pairs
        .iter()
        .map(|(category, total)| CategoryTivRow {
            category: category.clone(),
            tiv: format_number(*total, 2),
        })
        .collect()
}
