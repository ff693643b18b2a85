//! Constructor-based dependency injection with a single autowired collaborator.
//!
//! A [ComponentFactory](factory::ComponentFactory) creates instances of any type implementing
//! [Component](component::Component). Components describe their constructors, and the factory
//! picks the first one accepting exactly one collaborator it knows how to build, falling back to
//! the zero-argument constructor otherwise.
//!
//! ```
//! use beanwire_di::component;
//! use beanwire_di::factory::ComponentFactory;
//! use beanwire_di::instance_provider::{ComponentInstancePtr, ErrorPtr};
//!
//! struct Repository;
//!
//! struct Service {
//!     repository: Option<ComponentInstancePtr<Repository>>,
//! }
//!
//! #[component]
//! impl Service {
//!     fn new() -> Self {
//!         Self { repository: None }
//!     }
//!
//!     fn with_repository(repository: ComponentInstancePtr<Repository>) -> Self {
//!         Self {
//!             repository: Some(repository),
//!         }
//!     }
//! }
//!
//! fn create_repository() -> Result<ComponentInstancePtr<Repository>, ErrorPtr> {
//!     Ok(ComponentInstancePtr::new(Repository))
//! }
//!
//! let factory = ComponentFactory::new(create_repository);
//! let service = factory.create::<Service>().unwrap();
//! assert!(service.repository.is_some());
//! ```
//!
//! ### Features
//!
//! * `threadsafe` - use threadsafe pointers and `Send + Sync` trait bounds
//! * `derive` - enable the `#[component]` attribute for automatic constructor discovery

pub mod component;
pub mod factory;
pub mod instance_provider;
mod error;

pub use error::{ArgumentError, ConstructionError};

#[cfg(feature = "derive")]
pub use beanwire_di_derive::component;
