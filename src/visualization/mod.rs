mod tables;

pub use tables::{
    format_catalog_table, format_forecast_summary, format_forecast_table, print_catalog_table,
    print_forecast_summary, print_forecast_table,
};
