use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table,
};

use crate::engine::ResolvedSpecies;
use crate::models::{ForecastResult, SpeciesInfo};

/// Format the year-by-year forecast as a table string.
pub fn format_forecast_table(result: &ForecastResult) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Growth & Carbon Forecast".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Year",
            "Age",
            "DBH (cm)",
            "Height (m)",
            "Stored (kg CO2e)",
            "Annual (kg CO2e)",
        ]);

    for point in &result.series {
        table.add_row(vec![
            Cell::new(format!("{}", point.year_offset)),
            Cell::new(format!("{:.1}", point.age)),
            Cell::new(format!("{:.2}", point.dbh)),
            Cell::new(format!("{:.2}", point.height)),
            Cell::new(format!("{:.2}", point.carbon_storage)),
            Cell::new(format!("{:.2}", point.annual_sequestration)),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the forecast table to stdout.
pub fn print_forecast_table(result: &ForecastResult) {
    println!("{}", format_forecast_table(result));
}

/// Format the headline numbers of a forecast: species resolution, inferred
/// age, current carbon, and the end-of-horizon totals.
pub fn format_forecast_summary(
    species_name: &str,
    resolved: &ResolvedSpecies,
    result: &ForecastResult,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Forecast Summary".bold().cyan()));
    output.push_str(&format!("{}\n", "=".repeat(40)));
    output.push_str(&format!("  Species:          {species_name}\n"));
    if resolved.used_proxy {
        output.push_str(&format!(
            "  {} no growth equations for this species; using proxy coefficients\n",
            "Note:".yellow()
        ));
    }
    output.push_str(&format!(
        "  Wood density:     {:.0} kg/m3\n",
        resolved.density
    ));
    if let Some(first) = result.series.first() {
        output.push_str(&format!("  Inferred age:     {:.1} years\n", first.age));
    }
    output.push_str(&format!(
        "  Current carbon:   {:.2} kg CO2e\n",
        result.current_carbon
    ));
    if let Some(last) = result.series.last() {
        output.push_str(&format!(
            "  In {} years:      {:.2} kg CO2e stored\n",
            last.year_offset, last.carbon_storage
        ));
    }
    output
}

/// Print the forecast summary to stdout.
pub fn print_forecast_summary(
    species_name: &str,
    resolved: &ResolvedSpecies,
    result: &ForecastResult,
) {
    println!(
        "{}",
        format_forecast_summary(species_name, resolved, result)
    );
}

/// Format the species catalog as a table string.
pub fn format_catalog_table(catalog: &[SpeciesInfo]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{} ({} species)\n",
        "Species Catalog".bold().green(),
        catalog.len()
    ));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Scientific Name", "Common Name", "Image"]);

    for species in catalog {
        table.add_row(vec![
            Cell::new(&species.scientific_name),
            Cell::new(&species.common_name),
            Cell::new(&species.image_url),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the species catalog table to stdout.
pub fn print_catalog_table(catalog: &[SpeciesInfo]) {
    println!("{}", format_catalog_table(catalog));
}
