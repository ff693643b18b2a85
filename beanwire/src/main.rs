use beanwire::application::{bean_factory, install_tracing_logger, Application, ApplicationError};
use beanwire::config::ApplicationConfig;

fn main() -> Result<(), ApplicationError> {
    let config = ApplicationConfig::init_from_environment()?;
    if config.install_tracing_logger {
        install_tracing_logger(&config);
    }

    Application::new(bean_factory()).run()
}
