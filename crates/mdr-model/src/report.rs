use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A repository item required in one build form instance.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequiredPair {
    /// Build-side form instance identifier (`AE001_1`).
    pub form_id: String,
    /// Canonical repository item identifier.
    pub item_name: String,
    pub guidance: Option<String>,
    pub conditionally_required: bool,
}

impl RequiredPair {
    pub fn key(&self) -> (&str, &str) {
        (&self.form_id, &self.item_name)
    }
}

/// How strictly a missing item is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MissingKind {
    Mandatory,
    #[serde(rename = "Optionally Required")]
    OptionallyRequired,
}

impl MissingKind {
    pub fn from_conditional(conditionally_required: bool) -> Self {
        if conditionally_required {
            Self::OptionallyRequired
        } else {
            Self::Mandatory
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mandatory => "Mandatory",
            Self::OptionallyRequired => "Optionally Required",
        }
    }
}

impl fmt::Display for MissingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingKind {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Mandatory" => Ok(Self::Mandatory),
            "Optionally Required" => Ok(Self::OptionallyRequired),
            other => Err(ModelError::UnknownKind {
                value: other.to_string(),
            }),
        }
    }
}

/// One row of the missing-items report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingField {
    /// Build-side form instance (`form_id`), shown as "Form Name".
    pub form_name: String,
    #[serde(rename = "item")]
    pub item_name: String,
    pub kind: MissingKind,
    pub description: String,
    /// Collection guidance from the repository.
    pub context: Option<String>,
}

impl MissingField {
    pub fn new(pair: RequiredPair) -> Self {
        let kind = MissingKind::from_conditional(pair.conditionally_required);
        let description = describe(&pair.item_name, kind, &pair.form_id);
        Self {
            form_name: pair.form_id,
            item_name: pair.item_name,
            kind,
            description,
            context: pair.guidance,
        }
    }
}

fn describe(item_name: &str, kind: MissingKind, form_id: &str) -> String {
    format!(
        "{item_name} is marked as {kind} in the MDR Repository; however, it is not being collected in {form_id}."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_display() {
        for kind in [MissingKind::Mandatory, MissingKind::OptionallyRequired] {
            assert_eq!(kind.to_string().parse::<MissingKind>(), Ok(kind));
        }
        assert!("Required".parse::<MissingKind>().is_err());
    }

    #[test]
    fn optionally_required_description() {
        let field = MissingField::new(RequiredPair {
            form_id: "VS001".to_string(),
            item_name: "VSPOS".to_string(),
            guidance: None,
            conditionally_required: true,
        });
        assert_eq!(field.kind, MissingKind::OptionallyRequired);
        assert_eq!(
            field.description,
            "VSPOS is marked as Optionally Required in the MDR Repository; however, it is not being collected in VS001."
        );
        assert_eq!(field.context, None);
    }
}
