use std::io::Read;
use std::path::Path;

use crate::error::CarbonError;
use crate::models::{BiomassDensity, EquationForm, ForecastResult, GrowthCoefficient};

// Fixed column positions of the growth-coefficient source table. The table
// carries columns this engine does not consume (units, curve-fit metadata)
// at the skipped offsets.
const COEFF_REGION: usize = 0;
const COEFF_SCIENTIFIC_NAME: usize = 1;
const COEFF_SPECIES_CODE: usize = 2;
const COEFF_INDEPENDENT_VAR: usize = 3;
const COEFF_DEPENDENT_VAR: usize = 4;
const COEFF_EQUATION_FORM: usize = 7;
const COEFF_A: usize = 8;
const COEFF_B: usize = 9;
const COEFF_C: usize = 10;
const COEFF_D: usize = 11;
const COEFF_E: usize = 12;
const COEFF_MSE: usize = 15;

// Fixed column positions of the biomass density source table.
const DENSITY_SPECIES_CODE: usize = 0;
const DENSITY_SCIENTIFIC_NAME: usize = 1;
const DENSITY_COMMON_NAME: usize = 2;
const DENSITY_VALUE: usize = 3;

fn field<'r>(record: &'r csv::StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("").trim()
}

/// Missing or malformed numeric fields parse to 0, never to a failure.
fn numeric(record: &csv::StringRecord, index: usize) -> f64 {
    field(record, index).parse().unwrap_or(0.0)
}

/// Blank fields are absent; present but malformed fields parse to 0.
fn optional_numeric(record: &csv::StringRecord, index: usize) -> Option<f64> {
    let raw = field(record, index);
    if raw.is_empty() {
        None
    } else {
        Some(raw.parse().unwrap_or(0.0))
    }
}

fn reader_from<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source)
}

fn parse_growth_records<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> Result<Vec<GrowthCoefficient>, CarbonError> {
    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        records.push(GrowthCoefficient {
            region: field(&row, COEFF_REGION).to_string(),
            scientific_name: field(&row, COEFF_SCIENTIFIC_NAME).to_string(),
            species_code: field(&row, COEFF_SPECIES_CODE).to_string(),
            independent_var: field(&row, COEFF_INDEPENDENT_VAR).to_string(),
            dependent_var: field(&row, COEFF_DEPENDENT_VAR).to_string(),
            equation_form: EquationForm::parse(field(&row, COEFF_EQUATION_FORM)),
            a: numeric(&row, COEFF_A),
            b: numeric(&row, COEFF_B),
            c: optional_numeric(&row, COEFF_C),
            d: optional_numeric(&row, COEFF_D),
            e: optional_numeric(&row, COEFF_E),
            mse: numeric(&row, COEFF_MSE),
        });
    }
    Ok(records)
}

fn parse_density_records<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> Result<Vec<BiomassDensity>, CarbonError> {
    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        records.push(BiomassDensity {
            species_code: field(&row, DENSITY_SPECIES_CODE).to_string(),
            scientific_name: field(&row, DENSITY_SCIENTIFIC_NAME).to_string(),
            common_name: field(&row, DENSITY_COMMON_NAME).to_string(),
            density: numeric(&row, DENSITY_VALUE),
        });
    }
    Ok(records)
}

/// Read the growth-coefficient reference table from a CSV file.
pub fn read_growth_coefficients(
    path: impl AsRef<Path>,
) -> Result<Vec<GrowthCoefficient>, CarbonError> {
    let file = std::fs::File::open(path.as_ref())?;
    parse_growth_records(&mut reader_from(file))
}

/// Read the growth-coefficient reference table from CSV bytes.
pub fn read_growth_coefficients_from_bytes(
    data: &[u8],
) -> Result<Vec<GrowthCoefficient>, CarbonError> {
    parse_growth_records(&mut reader_from(data))
}

/// Read the biomass density reference table from a CSV file.
pub fn read_biomass_densities(path: impl AsRef<Path>) -> Result<Vec<BiomassDensity>, CarbonError> {
    let file = std::fs::File::open(path.as_ref())?;
    parse_density_records(&mut reader_from(file))
}

/// Read the biomass density reference table from CSV bytes.
pub fn read_biomass_densities_from_bytes(data: &[u8]) -> Result<Vec<BiomassDensity>, CarbonError> {
    parse_density_records(&mut reader_from(data))
}

/// Write a forecast series to a CSV file, one row per simulated year.
pub fn write_forecast_csv(
    result: &ForecastResult,
    path: impl AsRef<Path>,
) -> Result<(), CarbonError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for point in &result.series {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnnualGrowthPoint;

    const GROWTH_HEADER: &str =
        "Region,Scientific Name,SpCode,Independent variable,Predicts component ,EqName abbr,Units of predicted components,EqName,a,b,c,d,e,Appl min,Appl max,mse\n";

    const DENSITY_HEADER: &str = "SpCode,Scientific Name,Common Name,Density\n";

    #[test]
    fn test_parse_growth_row() {
        let csv = format!(
            "{GROWTH_HEADER}PacfNW,Acer rubrum,ACRU,age,dbh,d,cm,quad,1.5,0.8,-0.002,,,1,100,0.03\n"
        );
        let records = read_growth_coefficients_from_bytes(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.region, "PacfNW");
        assert_eq!(rec.scientific_name, "Acer rubrum");
        assert_eq!(rec.species_code, "ACRU");
        assert_eq!(rec.independent_var, "age");
        assert_eq!(rec.dependent_var, "dbh");
        assert_eq!(rec.equation_form, EquationForm::Quadratic);
        assert!((rec.a - 1.5).abs() < 1e-9);
        assert!((rec.b - 0.8).abs() < 1e-9);
        assert_eq!(rec.c, Some(-0.002));
        assert_eq!(rec.d, None);
        assert_eq!(rec.e, None);
        assert!((rec.mse - 0.03).abs() < 1e-9);
    }

    #[test]
    fn test_parse_growth_quoted_name_with_comma() {
        let csv = format!(
            "{GROWTH_HEADER}PacfNW,\"Prunus cerasifera, hybrid\",PRCE,dbh,age,d,yr,lin,2.0,1.1,,,,1,100,0\n"
        );
        let records = read_growth_coefficients_from_bytes(csv.as_bytes()).unwrap();
        assert_eq!(records[0].scientific_name, "Prunus cerasifera, hybrid");
        assert_eq!(records[0].equation_form, EquationForm::Linear);
    }

    #[test]
    fn test_parse_growth_malformed_numbers_become_zero() {
        let csv = format!(
            "{GROWTH_HEADER}PacfNW,Acer rubrum,ACRU,age,dbh,d,cm,lin,notanumber,0.8,bad,,,1,100,\n"
        );
        let records = read_growth_coefficients_from_bytes(csv.as_bytes()).unwrap();
        let rec = &records[0];
        assert_eq!(rec.a, 0.0);
        assert_eq!(rec.c, Some(0.0));
        assert_eq!(rec.mse, 0.0);
    }

    #[test]
    fn test_parse_growth_short_row_pads_with_defaults() {
        let csv = format!("{GROWTH_HEADER}PacfNW,Acer rubrum,ACRU,age,dbh\n");
        let records = read_growth_coefficients_from_bytes(csv.as_bytes()).unwrap();
        let rec = &records[0];
        assert_eq!(rec.equation_form, EquationForm::Unknown(String::new()));
        assert_eq!(rec.a, 0.0);
        assert_eq!(rec.b, 0.0);
        assert_eq!(rec.mse, 0.0);
    }

    #[test]
    fn test_parse_growth_skips_header() {
        let csv = GROWTH_HEADER.to_string();
        let records = read_growth_coefficients_from_bytes(csv.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_density_rows() {
        let csv = format!(
            "{DENSITY_HEADER}ACRU,Acer rubrum,Red maple,490\nQUAL,Quercus alba,White oak,600.5\n"
        );
        let records = read_biomass_densities_from_bytes(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].common_name, "Red maple");
        assert!((records[0].density - 490.0).abs() < 1e-9);
        assert!((records[1].density - 600.5).abs() < 1e-9);
    }

    #[test]
    fn test_parse_density_malformed_density_becomes_zero() {
        let csv = format!("{DENSITY_HEADER}ACRU,Acer rubrum,Red maple,n/a\n");
        let records = read_biomass_densities_from_bytes(csv.as_bytes()).unwrap();
        assert_eq!(records[0].density, 0.0);
    }

    #[test]
    fn test_write_forecast_csv_roundtrip_shape() {
        let result = ForecastResult {
            series: vec![
                AnnualGrowthPoint {
                    year_offset: 0,
                    age: 20.0,
                    dbh: 30.0,
                    height: 13.5,
                    carbon_storage: 540.12,
                    annual_sequestration: 0.0,
                },
                AnnualGrowthPoint {
                    year_offset: 1,
                    age: 21.0,
                    dbh: 31.0,
                    height: 13.9,
                    carbon_storage: 580.4,
                    annual_sequestration: 40.28,
                },
            ],
            current_carbon: 540.12,
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forecast.csv");
        write_forecast_csv(&result, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "year_offset,age,dbh,height,carbon_storage,annual_sequestration"
        );
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_growth_coefficients("/nonexistent/coeffs.csv").unwrap_err();
        assert!(matches!(err, CarbonError::Io(_)));
    }
}
