use std::fmt;

/// A compatibility rule broken by a selection map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// `choice` is selected but `required` is not.
    MissingRequirement { choice: String, required: String },
    /// `choice` and `conflicting` are both selected.
    Incompatible { choice: String, conflicting: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingRequirement { choice, required } => {
                write!(f, "Choice {} requires {}", choice, required)
            }
            Violation::Incompatible {
                choice,
                conflicting,
            } => write!(f, "Choice {} is incompatible with {}", choice, conflicting),
        }
    }
}
