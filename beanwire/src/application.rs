//! Core application functionality.

use crate::config::ApplicationConfig;
use crate::dao::{create_data_provider, DataProviderPtr};
use crate::service::{BusinessService, DefaultBusinessService, ServiceError};
use beanwire_di::component::Component;
use beanwire_di::factory::ComponentFactory;
use beanwire_di::ConstructionError;
use config::ConfigError;
use derive_more::Constructor;
use std::any::type_name;
use std::io;
use std::io::Write;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Factory injecting a fresh [DataProvider](crate::dao::DataProvider) into created beans.
pub type BeanFactory = ComponentFactory<DataProviderPtr>;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Error reading configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Error creating service: {0}")]
    Construction(#[from] ConstructionError),
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
}

/// Creates a [BeanFactory] which injects [DaoDataProvider](crate::dao::DaoDataProvider)
/// instances.
pub fn bean_factory() -> BeanFactory {
    ComponentFactory::new(create_data_provider)
}

/// Installs a tracing logger writing to standard error, so that standard output only contains
/// service results. `RUST_LOG` takes precedence over the configured filter.
pub fn install_tracing_logger(config: &ApplicationConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    // a logger might have been installed by the host already
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Main entrypoint for the application. Creates the business service with the [BeanFactory] and
/// performs its operation.
#[derive(Constructor)]
pub struct Application {
    factory: BeanFactory,
}

impl Application {
    /// Runs [DefaultBusinessService], writing to standard output.
    pub fn run(&self) -> Result<(), ApplicationError> {
        self.run_with::<DefaultBusinessService>(&mut io::stdout().lock())
    }

    /// Runs given business service, writing to given output.
    pub fn run_with<S: Component + BusinessService>(
        &self,
        output: &mut dyn Write,
    ) -> Result<(), ApplicationError> {
        info!(service = type_name::<S>(), "Creating business service...");

        let service = self.factory.create::<S>()?;

        info!("Performing business operation...");

        service.perform_with(output)?;
        Ok(())
    }
}
