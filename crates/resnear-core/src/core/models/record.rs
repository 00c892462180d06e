use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
}

/// One interacting pair: a target group, a partner group, and the shortest
/// atom-to-atom distance between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    #[serde(rename = "Res1")]
    pub target: String,
    #[serde(rename = "Res2")]
    pub partner: String,
    #[serde(rename = "Dist")]
    pub distance: f64,
}

impl InteractionRecord {
    /// Column layout of the record when written as a table.
    pub const SCHEMA: [FieldSpec; 3] = [
        FieldSpec {
            name: "Res1",
            field_type: FieldType::String,
        },
        FieldSpec {
            name: "Res2",
            field_type: FieldType::String,
        },
        FieldSpec {
            name: "Dist",
            field_type: FieldType::Double,
        },
    ];

    pub fn new(target: &str, partner: &str, distance: f64) -> Self {
        Self {
            target: target.to_string(),
            partner: partner.to_string(),
            distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_lists_columns_in_output_order() {
        let names: Vec<_> = InteractionRecord::SCHEMA.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Res1", "Res2", "Dist"]);
        assert_eq!(InteractionRecord::SCHEMA[2].field_type, FieldType::Double);
    }
}
