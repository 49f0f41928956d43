use serde::{Deserialize, Serialize};

/// Parametric form of an allometric growth equation.
///
/// The reference tables tag each coefficient row with a short form name
/// (`lin`, `quad`, `loglogw1`, ...). Unrecognized tags are preserved and
/// evaluated with the linear formula.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EquationForm {
    /// y = a + b*x
    #[default]
    Linear,
    /// y = a + b*x + c*x^2
    Quadratic,
    /// y = a + b*x + c*x^2 + d*x^3
    Cubic,
    /// y = exp(a + b*ln(ln(x+1)) + mse/2)
    LogLogW1,
    /// y = exp(a + b*ln(ln(x+1)) + sqrt(x)*(mse/2))
    LogLogW2,
    /// y = exp(a + b*ln(ln(x+1)) + x*(mse/2))
    LogLogW3,
    /// y = exp(a + b*x + mse/2)
    ExpoW1,
    /// Unrecognized tag, evaluated as linear
    Unknown(String),
}

impl EquationForm {
    /// Parse a form tag as it appears in the coefficient table.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "lin" => EquationForm::Linear,
            "quad" => EquationForm::Quadratic,
            "cub" => EquationForm::Cubic,
            "loglogw1" => EquationForm::LogLogW1,
            "loglogw2" => EquationForm::LogLogW2,
            "loglogw3" => EquationForm::LogLogW3,
            "expow1" => EquationForm::ExpoW1,
            _ => EquationForm::Unknown(tag.trim().to_string()),
        }
    }

    /// The canonical tag for this form.
    pub fn tag(&self) -> &str {
        match self {
            EquationForm::Linear => "lin",
            EquationForm::Quadratic => "quad",
            EquationForm::Cubic => "cub",
            EquationForm::LogLogW1 => "loglogw1",
            EquationForm::LogLogW2 => "loglogw2",
            EquationForm::LogLogW3 => "loglogw3",
            EquationForm::ExpoW1 => "expow1",
            EquationForm::Unknown(tag) => tag,
        }
    }
}

impl From<String> for EquationForm {
    fn from(s: String) -> Self {
        EquationForm::parse(&s)
    }
}

impl From<EquationForm> for String {
    fn from(form: EquationForm) -> Self {
        form.tag().to_string()
    }
}

impl std::fmt::Display for EquationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One row of the growth-coefficient reference table.
///
/// Each row relates an independent variable (e.g. `dbh`) to a dependent one
/// (e.g. `age`) for a single species and region. Many rows share a scientific
/// name but play different prediction roles; the role helpers below are what
/// the simulator uses to pick records, never the species name alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrowthCoefficient {
    /// Sampling region code
    pub region: String,
    /// Scientific name (e.g. "Acer rubrum")
    pub scientific_name: String,
    /// Species code
    pub species_code: String,
    /// Independent variable of the equation (e.g. "dbh", "age")
    pub independent_var: String,
    /// Dependent (predicted) variable (e.g. "age", "dbh", "tree ht")
    pub dependent_var: String,
    /// Equation form tag
    pub equation_form: EquationForm,
    pub a: f64,
    pub b: f64,
    pub c: Option<f64>,
    pub d: Option<f64>,
    pub e: Option<f64>,
    /// Mean squared error, used for bias correction in log-form equations
    pub mse: f64,
}

impl GrowthCoefficient {
    fn role_is(&self, dependent: &str, independent: &str) -> bool {
        self.dependent_var.trim().eq_ignore_ascii_case(dependent)
            && self.independent_var.trim().eq_ignore_ascii_case(independent)
    }

    /// True for records that predict age from a measured diameter.
    pub fn predicts_age_from_dbh(&self) -> bool {
        self.role_is("age", "dbh")
    }

    /// True for records that predict diameter from age.
    pub fn predicts_dbh_from_age(&self) -> bool {
        self.role_is("dbh", "age")
    }

    /// True for records that predict total height from diameter.
    /// The source tables use both "tree ht" and "height" as labels.
    pub fn predicts_height_from_dbh(&self) -> bool {
        self.role_is("tree ht", "dbh") || self.role_is("height", "dbh")
    }
}
