//! Pointer types shared between components and their collaborators.

use std::any::Any;
use std::error::Error;
#[cfg(not(feature = "threadsafe"))]
use std::rc::Rc;
#[cfg(feature = "threadsafe")]
use std::sync::Arc;

#[cfg(not(feature = "threadsafe"))]
pub type ComponentInstancePtr<T> = Rc<T>;
#[cfg(feature = "threadsafe")]
pub type ComponentInstancePtr<T> = Arc<T>;

#[cfg(not(feature = "threadsafe"))]
pub type ErrorPtr = Rc<dyn Error>;
#[cfg(feature = "threadsafe")]
pub type ErrorPtr = Arc<dyn Error + Send + Sync>;

/// Type-erased constructor argument. Arguments are boxed by the
/// [ComponentFactory](crate::factory::ComponentFactory) and downcast back to the declared
/// parameter type by the [Constructor](crate::component::Constructor).
pub type InjectedInstance = Box<dyn Any>;

/// Wraps any error in an [ErrorPtr].
#[cfg(feature = "threadsafe")]
pub fn convert_error<E: Error + Send + Sync + 'static>(error: E) -> ErrorPtr {
    Arc::new(error) as ErrorPtr
}

/// Wraps any error in an [ErrorPtr].
#[cfg(not(feature = "threadsafe"))]
pub fn convert_error<E: Error + 'static>(error: E) -> ErrorPtr {
    Rc::new(error) as ErrorPtr
}
