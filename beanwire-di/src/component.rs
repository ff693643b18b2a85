//! One of the basic blocks of dependency injection is a [Component]. Components are types the
//! [ComponentFactory](crate::factory::ComponentFactory) knows how to create, since they describe
//! their own constructors.
//!
//! ## Describing constructors
//!
//! For convenience, the trait can be automatically implemented with the `#[component]` attribute
//! if the `derive` feature is enabled. The attribute is placed on an inherent `impl` block and
//! treats every associated function returning `Self` or `Result<Self, E>` as a constructor:
//!
//! ```
//! use beanwire_di::component;
//! use beanwire_di::component::Component;
//! use beanwire_di::instance_provider::ComponentInstancePtr;
//!
//! struct TestDependency;
//!
//! struct TestComponent {
//!     dependency: Option<ComponentInstancePtr<TestDependency>>,
//! }
//!
//! #[component]
//! impl TestComponent {
//!     fn new() -> Self {
//!         Self { dependency: None }
//!     }
//!
//!     fn with_dependency(dependency: ComponentInstancePtr<TestDependency>) -> Self {
//!         Self {
//!             dependency: Some(dependency),
//!         }
//!     }
//!
//!     // not a constructor candidate
//!     #[component(ignore)]
//!     fn unused() -> Self {
//!         Self::new()
//!     }
//! }
//!
//! assert_eq!(TestComponent::constructors().len(), 2);
//! ```
//!
//! Constructors are listed in declaration order, which is also the order the factory inspects
//! them in.
//!
//! ### Supported `#[component]` function configuration
//!
//! * `ignore` - don't treat given function as a constructor

use crate::error::ArgumentError;
use crate::instance_provider::{convert_error, ErrorPtr, InjectedInstance};
use derivative::Derivative;
use std::any::{type_name, TypeId};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Type-erased constructor body. Receives arguments in parameter order.
pub type ConstructorFunction<T> = Box<dyn Fn(Vec<InjectedInstance>) -> Result<T, ErrorPtr>>;

/// Base trait for components created by the [ComponentFactory](crate::factory::ComponentFactory).
/// Please see the module-level documentation for more information.
pub trait Component: Sized + 'static {
    /// Returns all constructors of this component in declaration order.
    fn constructors() -> Vec<Constructor<Self>>;
}

/// Type of a single constructor parameter.
#[derive(Clone, Copy, Debug)]
pub struct ParameterType {
    type_id: TypeId,
    type_name: &'static str,
}

impl ParameterType {
    pub fn of<P: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<P>(),
            type_name: type_name::<P>(),
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for ParameterType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ParameterType {}

impl Hash for ParameterType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl Display for ParameterType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}

/// Description of a single way to construct a component: the parameter types it accepts and a
/// function which builds the component from type-erased arguments.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Constructor<T> {
    parameters: Vec<ParameterType>,
    #[derivative(Debug = "ignore")]
    function: ConstructorFunction<T>,
}

impl<T: 'static> Constructor<T> {
    /// Creates a constructor with arbitrary parameters. The function will receive exactly as many
    /// arguments as there are parameters, in the same order.
    pub fn new<F>(parameters: Vec<ParameterType>, function: F) -> Self
    where
        F: Fn(Vec<InjectedInstance>) -> Result<T, ErrorPtr> + 'static,
    {
        Self {
            parameters,
            function: Box::new(function),
        }
    }

    /// Creates a constructor without parameters.
    pub fn no_args(function: fn() -> Result<T, ErrorPtr>) -> Self {
        Self::new(vec![], move |_| function())
    }

    /// Creates a constructor with a single parameter of type `P`.
    pub fn injected<P: 'static>(function: fn(P) -> Result<T, ErrorPtr>) -> Self {
        Self::new(vec![ParameterType::of::<P>()], move |arguments| {
            let mut arguments = arguments.into_iter();
            function(take_argument::<P>(&mut arguments)?)
        })
    }

    #[inline]
    pub fn parameters(&self) -> &[ParameterType] {
        &self.parameters
    }

    #[inline]
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Invokes the constructor with given arguments.
    pub fn invoke(&self, arguments: Vec<InjectedInstance>) -> Result<T, ErrorPtr> {
        (self.function)(arguments)
    }
}

/// Takes the next type-erased argument and downcasts it to `P`.
pub fn take_argument<P: 'static>(
    arguments: &mut impl Iterator<Item = InjectedInstance>,
) -> Result<P, ErrorPtr> {
    arguments
        .next()
        .ok_or_else(|| convert_error(ArgumentError::MissingArgument(ParameterType::of::<P>())))?
        .downcast::<P>()
        .map(|argument| *argument)
        .map_err(|_| convert_error(ArgumentError::IncompatibleArgument(ParameterType::of::<P>())))
}

#[cfg(test)]
mod tests {
    use crate::component::{take_argument, Constructor, ParameterType};
    use crate::instance_provider::{ErrorPtr, InjectedInstance};

    #[derive(Debug, Eq, PartialEq)]
    struct TestComponent(u16);

    fn create_empty() -> Result<TestComponent, ErrorPtr> {
        Ok(TestComponent(0))
    }

    fn create_from_u16(value: u16) -> Result<TestComponent, ErrorPtr> {
        Ok(TestComponent(value))
    }

    #[test]
    fn should_compare_parameters_by_type() {
        assert_eq!(ParameterType::of::<u8>(), ParameterType::of::<u8>());
        assert_ne!(ParameterType::of::<u8>(), ParameterType::of::<i8>());
        assert_eq!(ParameterType::of::<u8>().to_string(), "u8");
    }

    #[test]
    fn should_invoke_no_args_constructor() {
        let constructor = Constructor::no_args(create_empty);

        assert_eq!(constructor.parameter_count(), 0);
        assert_eq!(constructor.invoke(vec![]).unwrap(), TestComponent(0));
    }

    #[test]
    fn should_invoke_injected_constructor() {
        let constructor = Constructor::injected(create_from_u16);

        assert_eq!(constructor.parameters(), &[ParameterType::of::<u16>()]);
        assert_eq!(
            constructor
                .invoke(vec![Box::new(7u16) as InjectedInstance])
                .unwrap(),
            TestComponent(7)
        );
    }

    #[test]
    fn should_reject_incompatible_argument() {
        let constructor = Constructor::injected(create_from_u16);

        let error = constructor
            .invoke(vec![Box::new(7u8) as InjectedInstance])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Tried to pass an incompatible argument as: u16"
        );
    }

    #[test]
    fn should_reject_missing_argument() {
        let constructor = Constructor::injected(create_from_u16);

        let error = constructor.invoke(vec![]).unwrap_err();
        assert_eq!(error.to_string(), "Missing constructor argument of type: u16");
    }

    #[test]
    fn should_take_arguments_in_order() {
        let arguments: Vec<InjectedInstance> = vec![Box::new(1u8), Box::new("two")];
        let mut arguments = arguments.into_iter();

        assert_eq!(take_argument::<u8>(&mut arguments).unwrap(), 1);
        assert_eq!(take_argument::<&str>(&mut arguments).unwrap(), "two");
        assert!(take_argument::<u8>(&mut arguments).is_err());
    }
}
