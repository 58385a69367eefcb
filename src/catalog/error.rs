use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
    TemplateNotFound(String),
    CategoryNotFound(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::TemplateNotFound(_) | StoreError::CategoryNotFound(_)
        )
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "catalog lock poisoned during {}", operation)
            }
            StoreError::TemplateNotFound(id) => write!(f, "Template {} not found", id),
            StoreError::CategoryNotFound(id) => write!(f, "Category {} not found", id),
        }
    }
}

impl std::error::Error for StoreError {}
