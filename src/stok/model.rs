use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// Unit of measure for a record. The set is closed; order is display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Metre,
    Adet,
    Kilo,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Metre, Unit::Adet, Unit::Kilo];

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Metre => "Metre",
            Unit::Adet => "Adet",
            Unit::Kilo => "Kilo",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .iter()
            .find(|u| u.label().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                let valid: Vec<_> = Unit::ALL.iter().map(|u| u.label()).collect();
                format!("Unknown unit '{}' (expected one of: {})", s, valid.join(", "))
            })
    }
}

/// One inventory line item.
///
/// On disk a record is a bare `[name, quantity, unit]` array; it has no id, its
/// identity is its position in the stored sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordRow", into = "RecordRow")]
pub struct InventoryRecord {
    pub name: String,
    /// Digits only, kept as text exactly as entered.
    pub quantity: String,
    pub unit: Unit,
}

impl InventoryRecord {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, unit: Unit) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RecordRow(String, String, Unit);

impl From<RecordRow> for InventoryRecord {
    fn from(RecordRow(name, quantity, unit): RecordRow) -> Self {
        Self {
            name,
            quantity,
            unit,
        }
    }
}

impl From<InventoryRecord> for RecordRow {
    fn from(record: InventoryRecord) -> Self {
        RecordRow(record.name, record.quantity, record.unit)
    }
}

/// Current values of the entry form's three fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    pub name: String,
    pub quantity: String,
    pub unit: Unit,
}

impl RecordForm {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, unit: Unit) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit,
        }
    }

    /// Both free-text fields are filled in. The unit always has a value.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.quantity.is_empty()
    }

    pub fn to_record(&self) -> InventoryRecord {
        InventoryRecord::new(self.name.clone(), self.quantity.clone(), self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_as_triple() {
        let record = InventoryRecord::new("Civata", "100", Unit::Adet);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"["Civata","100","Adet"]"#);
    }

    #[test]
    fn record_rejects_unknown_unit() {
        let parsed: Result<InventoryRecord, _> = serde_json::from_str(r#"["A","1","Litre"]"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn record_rejects_wrong_arity() {
        let parsed: Result<InventoryRecord, _> = serde_json::from_str(r#"["A","1"]"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn unit_parses_case_insensitively() {
        assert_eq!("kilo".parse::<Unit>().unwrap(), Unit::Kilo);
        assert_eq!(" ADET ".parse::<Unit>().unwrap(), Unit::Adet);
        assert!("gram".parse::<Unit>().is_err());
    }

    #[test]
    fn form_requires_name_and_quantity() {
        assert!(RecordForm::new("Kablo", "5", Unit::Metre).is_complete());
        assert!(!RecordForm::new("", "5", Unit::Metre).is_complete());
        assert!(!RecordForm::new("Kablo", "", Unit::Metre).is_complete());
    }
}
