use crate::types::TradeRecord;

/// Delivery-year ranges selectable in the dashboard. Bounds are inclusive
/// on the delivery year start column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearRange {
    All,
    Y2014To2021,
    Y2022To2024,
}

impl YearRange {
    pub fn bounds(self) -> Option<(i32, i32)> {
        match self {
            YearRange::All => None,
            YearRange::Y2014To2021 => Some((2014, 2021)),
            YearRange::Y2022To2024 => Some((2022, 2024)),
        }
    }

    /// The period label shown in the UI and used to key the importer rank
    /// table.
    pub fn label(self) -> &'static str {
        match self {
            YearRange::All => "All",
            YearRange::Y2014To2021 => "2014-2021",
            YearRange::Y2022To2024 => "2022-2024",
        }
    }

    /// Parse a selector label. Anything unrecognized falls closed to `All`,
    /// which leaves the data unfiltered.
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "2014-2021" => YearRange::Y2014To2021,
            "2022-2024" => YearRange::Y2022To2024,
            _ => YearRange::All,
        }
    }
}

/// Keep the records whose delivery year start lies within the selected
/// range. `All` returns the input unchanged, in input order.
pub fn filter_by_delivery_year(data: &[TradeRecord], range: YearRange) -> Vec<TradeRecord> {
    match range.bounds() {
        None => data.to_vec(),
        Some((start, end)) => data
            .iter()
            .filter(|r| (start..=end).contains(&r.delivery_year_start))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(supplier: &str, year: i32) -> TradeRecord {
        TradeRecord {
            supplier: supplier.to_string(),
            delivery_year_start: year,
            delivery_year_end: year,
            weapon_designation: "T-72M1".to_string(),
            weapon_category: "Tanks".to_string(),
            company: "Bumar".to_string(),
            country_of_origin: "Soviet Union".to_string(),
            tiv: 1.0,
            delivery_number: 1,
            supplier_capital: "Warsaw".to_string(),
            capital_lat: 52.2297,
            capital_lon: 21.0122,
        }
    }

    #[test]
    fn all_is_the_identity() {
        let data = vec![record("B", 2023), record("A", 2015), record("C", 2010)];
        let out = filter_by_delivery_year(&data, YearRange::All);
        assert_eq!(out, data);
    }

    #[test]
    fn ranges_keep_only_inclusive_bounds() {
        let data = vec![
            record("A", 2013),
            record("B", 2014),
            record("C", 2021),
            record("D", 2022),
            record("E", 2024),
            record("F", 2025),
        ];
        let early = filter_by_delivery_year(&data, YearRange::Y2014To2021);
        assert!(early
            .iter()
            .all(|r| (2014..=2021).contains(&r.delivery_year_start)));
        assert_eq!(early.len(), 2);

        let late = filter_by_delivery_year(&data, YearRange::Y2022To2024);
        assert!(late
            .iter()
            .all(|r| (2022..=2024).contains(&r.delivery_year_start)));
        assert_eq!(late.len(), 2);
    }

    #[test]
    fn filter_preserves_input_order() {
        let data = vec![record("Z", 2020), record("A", 2015), record("M", 2018)];
        let out = filter_by_delivery_year(&data, YearRange::Y2014To2021);
        let suppliers: Vec<&str> = out.iter().map(|r| r.supplier.as_str()).collect();
        assert_eq!(suppliers, vec!["Z", "A", "M"]);
    }

    #[test]
    fn unknown_selector_falls_back_to_all() {
        assert_eq!(YearRange::from_label("2010-2013"), YearRange::All);
        assert_eq!(YearRange::from_label(""), YearRange::All);
        assert_eq!(YearRange::from_label("All"), YearRange::All);
        assert_eq!(YearRange::from_label("2014-2021"), YearRange::Y2014To2021);
        assert_eq!(YearRange::from_label(" 2022-2024 "), YearRange::Y2022To2024);
    }
}
