use serde_json::Value;
use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoStaticStr)]
pub enum Variant {
    #[default]
    #[strum(serialize = "STD")]
    Std,
    #[strum(serialize = "DX")]
    Dx,
}

impl Variant {
    /// Resolve the variant from a record's `dx` flag.
    ///
    /// Only a number equal to 1 selects DX; anything else (0, other numbers,
    /// strings, null) is STD.
    pub fn from_flag(flag: &Value) -> Self {
        match flag.as_f64() {
            Some(v) if v == 1.0 => Self::Dx,
            _ => Self::Std,
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
