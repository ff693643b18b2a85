use crate::component::ParameterType;
use crate::instance_provider::ErrorPtr;
use thiserror::Error;

/// Errors related to creating components.
#[derive(Error, Clone, Debug)]
pub enum ConstructionError {
    #[error("Cannot find a no-argument constructor or a constructor accepting a single {collaborator} for component: {component}")]
    NoSuitableConstructor {
        component: &'static str,
        collaborator: &'static str,
    },
    #[error("Error creating collaborator {collaborator} for component {component}: {error}")]
    CollaboratorFailed {
        component: &'static str,
        collaborator: &'static str,
        error: ErrorPtr,
    },
    #[error("Constructor of component {component} failed: {error}")]
    ConstructorFailed {
        component: &'static str,
        error: ErrorPtr,
    },
}

/// Errors related to passing type-erased arguments to constructors.
#[derive(Error, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ArgumentError {
    #[error("Missing constructor argument of type: {0}")]
    MissingArgument(ParameterType),
    #[error("Tried to pass an incompatible argument as: {0}")]
    IncompatibleArgument(ParameterType),
}
