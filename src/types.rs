use serde::{Deserialize, Serialize};
use tabled::Tabled;

// Column titles come from the upstream processing pipeline and are kept
// verbatim so the same files feed both this binary and the browser shell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradeRecord {
    #[serde(rename = "Supplier")]
    pub supplier: String,
    #[serde(rename = "Delivery year start")]
    pub delivery_year_start: i32,
    #[serde(rename = "Delivery year end")]
    pub delivery_year_end: i32,
    #[serde(rename = "Weapon designation")]
    pub weapon_designation: String,
    #[serde(rename = "Weapon category")]
    pub weapon_category: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Country of origin")]
    pub country_of_origin: String,
    #[serde(rename = "SIPRI TIV of delivered weapons")]
    pub tiv: f64,
    #[serde(rename = "Delivery number")]
    pub delivery_number: u64,
    #[serde(rename = "Supplier capital")]
    pub supplier_capital: String,
    #[serde(rename = "capital_lat")]
    pub capital_lat: f64,
    #[serde(rename = "capital_lon")]
    pub capital_lon: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImporterRank {
    #[serde(rename = "Period")]
    pub period: String,
    #[serde(rename = "Rank")]
    pub rank: u32,
    #[serde(rename = "Share of global arms imports")]
    pub share: f64,
}

// Fixed eight-column projection of the register for tabular display.
#[derive(Debug, Serialize, Tabled, Clone)]
pub struct RegisterRow {
    #[serde(rename = "Supplier")]
    #[tabled(rename = "Supplier")]
    pub supplier: String,
    #[serde(rename = "Delivery year start")]
    #[tabled(rename = "Delivery year start")]
    pub delivery_year_start: i32,
    #[serde(rename = "Delivery year end")]
    #[tabled(rename = "Delivery year end")]
    pub delivery_year_end: i32,
    #[serde(rename = "Weapon designation")]
    #[tabled(rename = "Weapon designation")]
    pub weapon_designation: String,
    #[serde(rename = "Weapon category")]
    #[tabled(rename = "Weapon category")]
    pub weapon_category: String,
    #[serde(rename = "Company")]
    #[tabled(rename = "Company")]
    pub company: String,
    #[serde(rename = "Country of origin")]
    #[tabled(rename = "Country of origin")]
    pub country_of_origin: String,
    #[serde(rename = "SIPRI TIV")]
    #[tabled(rename = "SIPRI TIV")]
    pub tiv: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct CountryRankingRow {
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "DeliveredWeapons")]
    #[tabled(rename = "DeliveredWeapons")]
    pub delivered: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct CategoryRankingRow {
    #[serde(rename = "WeaponCategory")]
    #[tabled(rename = "WeaponCategory")]
    pub category: String,
    #[serde(rename = "DeliveredWeapons")]
    #[tabled(rename = "DeliveredWeapons")]
    pub delivered: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct CategoryTivRow {
    #[serde(rename = "WeaponCategory")]
    #[tabled(rename = "WeaponCategory")]
    pub category: String,
    #[serde(rename = "SipriTiv")]
    #[tabled(rename = "SipriTiv")]
    pub tiv: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub supplier_count: usize,
    pub total_delivered: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importer_rank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_share: Option<f64>,
}
