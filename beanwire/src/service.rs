//! Business logic delegating to an injected [DataProvider](crate::dao::DataProvider).

use crate::dao::DataProviderPtr;
use beanwire_di::component;
use std::io;
use std::io::Write;
use thiserror::Error;
use tracing::debug;

/// Line written before the provided data.
pub const START_MARKER: &str = "Calculation started";

/// Line written after the provided data.
pub const FINISH_MARKER: &str = "Calculation finished";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Missing dependency {dependency} in service: {service}")]
    MissingDependency {
        service: &'static str,
        dependency: &'static str,
    },
    #[error("Error writing service output: {0}")]
    Output(#[from] io::Error),
}

/// Business operation which depends on a data provider.
pub trait BusinessService {
    /// Performs the operation, writing the result to given output.
    fn perform_with(&self, output: &mut dyn Write) -> Result<(), ServiceError>;

    /// Performs the operation, writing the result to standard output.
    fn perform(&self) -> Result<(), ServiceError> {
        self.perform_with(&mut io::stdout().lock())
    }
}

/// [BusinessService] printing data retrieved from its [DataProvider](crate::dao::DataProvider).
/// Can be created without a provider, in which case [BusinessService::perform] fails.
pub struct DefaultBusinessService {
    data_provider: Option<DataProviderPtr>,
}

#[component]
impl DefaultBusinessService {
    pub fn new() -> Self {
        Self {
            data_provider: None,
        }
    }

    pub fn with_data_provider(data_provider: DataProviderPtr) -> Self {
        Self {
            data_provider: Some(data_provider),
        }
    }

    pub fn has_data_provider(&self) -> bool {
        self.data_provider.is_some()
    }
}

impl Default for DefaultBusinessService {
    fn default() -> Self {
        Self::new()
    }
}

impl BusinessService for DefaultBusinessService {
    fn perform_with(&self, output: &mut dyn Write) -> Result<(), ServiceError> {
        let data_provider = self
            .data_provider
            .as_ref()
            .ok_or(ServiceError::MissingDependency {
                service: "DefaultBusinessService",
                dependency: "DataProvider",
            })?;

        debug!("Performing business operation.");

        writeln!(output, "{START_MARKER}")?;
        writeln!(output, "{}", data_provider.get_data())?;
        writeln!(output, "{FINISH_MARKER}")?;

        Ok(())
    }
}
