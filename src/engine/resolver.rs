use crate::catalog::{CatalogStore, OptionChoice, StoreError};

/// Resolves a (category, choice) pair to a priced choice.
///
/// Every [`CatalogStore`] is a resolver.
pub trait ChoiceResolver {
    type Error;

    fn resolve(&self, category_id: &str, choice_id: &str)
        -> Result<Option<OptionChoice>, Self::Error>;
}

impl<S: CatalogStore + ?Sized> ChoiceResolver for S {
    type Error = StoreError;

    fn resolve(
        &self,
        category_id: &str,
        choice_id: &str,
    ) -> Result<Option<OptionChoice>, StoreError> {
        self.resolve_choice(category_id, choice_id)
    }
}
