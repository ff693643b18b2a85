//! Data access layer: the [DataProvider] collaborator injected into business services.

use beanwire_di::instance_provider::{ComponentInstancePtr, ErrorPtr};
#[cfg(test)]
use mockall::automock;

/// Value returned by [DaoDataProvider].
pub const DAO_DATA: &str = "Data from DAO implementation";

/// Shared pointer to a [DataProvider], as injected into components.
pub type DataProviderPtr = ComponentInstancePtr<dyn DataProvider + Send + Sync>;

/// Source of data for business logic.
#[cfg_attr(test, automock)]
pub trait DataProvider {
    fn get_data(&self) -> String;
}

/// Stateless [DataProvider] returning a fixed value.
#[derive(Default, Copy, Clone, Eq, PartialEq, Debug)]
pub struct DaoDataProvider;

impl DataProvider for DaoDataProvider {
    #[inline]
    fn get_data(&self) -> String {
        DAO_DATA.to_string()
    }
}

/// Creates a new [DaoDataProvider] for injection.
pub fn create_data_provider() -> Result<DataProviderPtr, ErrorPtr> {
    Ok(ComponentInstancePtr::new(DaoDataProvider) as DataProviderPtr)
}
