//! Core functionality for creating [Component] instances.

use crate::component::{Component, Constructor, ParameterType};
use crate::error::ConstructionError;
use crate::instance_provider::{ErrorPtr, InjectedInstance};
use derivative::Derivative;
use std::any::type_name;
use tracing::debug;

/// Function creating a fresh collaborator instance.
pub type CollaboratorConstructor<P> = fn() -> Result<P, ErrorPtr>;

/// Generic factory for [Component] instances, able to autowire a single collaborator of type `P`.
///
/// When asked for a component, the factory inspects its constructors in declaration order and
/// picks the first one accepting exactly one parameter of type `P`. A new collaborator is then
/// created and passed to that constructor. If no such constructor exists, the zero-argument
/// constructor is used instead. Collaborators are never reused between components.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Copy(bound = ""), Debug(bound = ""))]
pub struct ComponentFactory<P: 'static> {
    #[derivative(Debug = "ignore")]
    collaborator: CollaboratorConstructor<P>,
}

impl<P: 'static> ComponentFactory<P> {
    /// Creates a new factory which will use given function to create collaborators.
    pub fn new(collaborator: CollaboratorConstructor<P>) -> Self {
        Self { collaborator }
    }

    /// Returns the type of collaborators injected by this factory.
    #[inline]
    pub fn collaborator_type(&self) -> ParameterType {
        ParameterType::of::<P>()
    }

    /// Creates a new instance of given component, injecting a fresh collaborator if the component
    /// has a constructor accepting one.
    pub fn create<T: Component>(&self) -> Result<T, ConstructionError> {
        let component = type_name::<T>();
        let collaborator_type = self.collaborator_type();
        let constructors = T::constructors();

        debug!(
            component,
            constructors = constructors.len(),
            "Resolving component constructor..."
        );

        if let Some(constructor) = constructors
            .iter()
            .filter(|constructor| constructor.parameter_count() > 0)
            .find(|constructor| {
                matches!(constructor.parameters(), [parameter] if *parameter == collaborator_type)
            })
        {
            debug!(
                component,
                collaborator = collaborator_type.type_name(),
                "Injecting collaborator."
            );

            let collaborator =
                (self.collaborator)().map_err(|error| ConstructionError::CollaboratorFailed {
                    component,
                    collaborator: collaborator_type.type_name(),
                    error,
                })?;

            return Self::invoke(
                component,
                constructor,
                vec![Box::new(collaborator) as InjectedInstance],
            );
        }

        let constructor = constructors
            .iter()
            .find(|constructor| constructor.parameter_count() == 0)
            .ok_or(ConstructionError::NoSuitableConstructor {
                component,
                collaborator: collaborator_type.type_name(),
            })?;

        debug!(component, "Using no-argument constructor.");

        Self::invoke(component, constructor, vec![])
    }

    fn invoke<T: Component>(
        component: &'static str,
        constructor: &Constructor<T>,
        arguments: Vec<InjectedInstance>,
    ) -> Result<T, ConstructionError> {
        constructor
            .invoke(arguments)
            .map_err(|error| ConstructionError::ConstructorFailed { component, error })
    }
}
