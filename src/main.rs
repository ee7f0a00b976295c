// Entry point and high-level CLI flow.
//
// Console rendition of the Ukraine arms-transfers dashboard:
// - Option [1] loads the two processed data files, printing diagnostics.
// - Option [2] prompts for a delivery-year range and a map style, then
//   renders the dashboard views: metric lines, three ranked bar-chart
//   tables, the filtered data table, and a flow-map JSON document for the
//   map renderer.
// - After rendering, the user can choose to go back to the selection menu
//   or exit.
use arms_report::filter::{self, YearRange};
use arms_report::flow_map::{self, FlowMapConfig, MapStyle};
use arms_report::loader;
use arms_report::output;
use arms_report::reports;
use arms_report::types::{ImporterRank, TradeRecord};
use arms_report::util::format_int;
use once_cell::sync::Lazy;
use std::io::{self, Write};
use std::sync::Mutex;

const TRADE_REGISTER_PATH: &str = "data/trade_register_processed.csv";
const IMPORTER_RANK_PATH: &str = "data/ukraine_importer_rank_by_period.csv";

const FLOW_MAP_FILE: &str = "flow_map.json";
const METRICS_FILE: &str = "metrics.json";
const COUNTRY_RANKING_FILE: &str = "ranking_by_country.csv";
const CATEGORY_RANKING_FILE: &str = "ranking_by_category.csv";
const CATEGORY_TIV_FILE: &str = "ranking_by_category_tiv.csv";
const FILTERED_REGISTER_FILE: &str = "filtered_register.csv";

const COUNTRY_TOP_N: usize = 10;
const TABLE_PREVIEW_ROWS: usize = 5;

// Simple in-memory app state so we only load the data files once but can
// render the dashboard with different selections in a single run.
static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| Mutex::new(AppState { data: None }));

struct AppState {
    data: Option<LoadedData>,
}

#[derive(Clone)]
struct LoadedData {
    register: Vec<TradeRecord>,
    ranks: Vec<ImporterRank>,
}

/// Read a single line of input after printing the common "Enter choice:" prompt.
///
/// The prompt is reused for the main menu and the render-time selections.
fn read_choice() -> String {
    print!("Enter choice: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

/// Ask the user whether to go back to the selection menu after rendering.
///
/// Returns `true` if the user chose `Y`, `false` if they chose `N`.
fn prompt_back_to_menu() -> bool {
    loop {
        print!("Back to Selection Menu (Y/N): ");
        let _ = io::stdout().flush();
        let mut buf = String::new();
        io::stdin().read_line(&mut buf).ok();
        let resp = buf.trim().to_uppercase();
        match resp.as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

/// Handle option [1]: load both source files.
///
/// On success, we store the tables in `APP_STATE` and print a short textual
/// summary. The files are assumed pre-processed upstream, so any failure is
/// reported and nothing is stored.
fn handle_load() {
    let register = match loader::load_trade_register(TRADE_REGISTER_PATH) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to load {}: {}\n", TRADE_REGISTER_PATH, e);
            return;
        }
    };
    let ranks = match loader::load_importer_ranks(IMPORTER_RANK_PATH) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to load {}: {}\n", IMPORTER_RANK_PATH, e);
            return;
        }
    };
    println!(
        "Loaded trade register ({} rows) and importer ranks ({} periods).\n",
        format_int(register.len() as i64),
        format_int(ranks.len() as i64)
    );
    let mut state = APP_STATE.lock().unwrap();
    state.data = Some(LoadedData { register, ranks });
}

/// Prompt for the delivery-year range. Accepts the menu number or a typed
/// period label; anything unrecognized falls back to All.
fn prompt_year_range() -> YearRange {
    println!("Delivery year range:");
    println!("[1] All");
    println!("[2] 2014-2021");
    println!("[3] 2022-2024");
    match read_choice().as_str() {
        "1" => YearRange::All,
        "2" => YearRange::Y2014To2021,
        "3" => YearRange::Y2022To2024,
        other => YearRange::from_label(other),
    }
}

fn prompt_map_style() -> MapStyle {
    print!("Map style (light/dark) [light]: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    MapStyle::from_name(buf.trim())
}

/// Handle option [2]: render all dashboard views for one selection.
///
/// This function is intentionally side-effectful:
/// - prints the metric lines and Markdown previews of each view,
/// - writes the three ranking CSVs and the filtered register CSV,
/// - writes the flow-map and metrics JSON documents.
fn handle_render() {
    let data = {
        let state = APP_STATE.lock().unwrap();
        state.data.clone()
    };
    let Some(data) = data else {
        println!("Error: No data loaded. Please load the data files first (option 1).\n");
        return;
    };

    let range = prompt_year_range();
    let style = prompt_map_style();
    println!();

    let filtered = filter::filter_by_delivery_year(&data.register, range);
    println!(
        "Weapons Transferred to Ukraine ({}, {} records)\n",
        range.label(),
        format_int(filtered.len() as i64)
    );

    // Metric tiles.
    let metrics = reports::compute_metrics(&filtered, &data.ranks, range);
    println!("Number of Countries: {}", metrics.supplier_count);
    println!(
        "Number of Weapons Delivered: {}",
        format_int(metrics.total_delivered)
    );
    if let Some(rank) = metrics.importer_rank {
        println!("Ukraine's Global Importer Rank: {}", rank);
    }
    if let Some(share) = metrics.import_share {
        println!("Share of Global Weapons Imports: {:.1}%", share);
    }
    println!();
    if let Err(e) = output::write_json(METRICS_FILE, &metrics) {
        eprintln!("Write error: {}", e);
    }

    // Flow map for the arc-layer renderer.
    let config = FlowMapConfig {
        style,
        ..FlowMapConfig::default()
    };
    let map = flow_map::build_flow_map(&filtered, &config);
    if let Err(e) = output::write_json(FLOW_MAP_FILE, &map) {
        eprintln!("Write error: {}", e);
    }
    println!(
        "Flow map: {} arcs, {} style (exported to {})\n",
        format_int(map.arcs.len() as i64),
        map.map_style,
        FLOW_MAP_FILE
    );

    // Ranked bar-chart datasets.
    let by_country = reports::rank_countries_by_delivered(&filtered, COUNTRY_TOP_N);
    let country_rows = reports::country_rows(&by_country);
    if let Err(e) = output::write_csv(COUNTRY_RANKING_FILE, &country_rows) {
        eprintln!("Write error: {}", e);
    }
    output::preview_table(
        &format!("Delivered Weapons by Country (Top {})", COUNTRY_TOP_N),
        &country_rows,
        COUNTRY_TOP_N,
    );

    let by_category = reports::rank_categories_by_delivered(&filtered);
    let category_rows = reports::category_rows(&by_category);
    if let Err(e) = output::write_csv(CATEGORY_RANKING_FILE, &category_rows) {
        eprintln!("Write error: {}", e);
    }
    output::preview_table("Delivered Weapons by Category", &category_rows, TABLE_PREVIEW_ROWS);

    let by_category_tiv = reports::rank_categories_by_tiv(&filtered);
    let category_tiv_rows = reports::category_tiv_rows(&by_category_tiv);
    if let Err(e) = output::write_csv(CATEGORY_TIV_FILE, &category_tiv_rows) {
        eprintln!("Write error: {}", e);
    }
    output::preview_table(
        "SIPRI TIV of Delivered Weapons",
        &category_tiv_rows,
        TABLE_PREVIEW_ROWS,
    );

    // Filtered data table (fixed eight-column projection).
    let table = reports::project_register(&filtered);
    if let Err(e) = output::write_csv(FILTERED_REGISTER_FILE, &table) {
        eprintln!("Write error: {}", e);
    }
    output::preview_table("Trade Register (filtered)", &table, TABLE_PREVIEW_ROWS);
    println!("(Full table exported to {})\n", FILTERED_REGISTER_FILE);
}

fn main() {
    loop {
        println!("Select an option:");
        println!("[1] Load the data files");
        println!("[2] Render dashboard views\n");
        match read_choice().as_str() {
            "1" => {
                handle_load();
            }
            "2" => {
                println!();
                handle_render();
                if !prompt_back_to_menu() {
                    println!("Exiting the program.");
                    break;
                }
            }
            _ => {
                println!("Invalid choice. Please enter 1 or 2.\n");
            }
        }
    }
}
