#[cfg(feature = "derive")]
mod factory_test {
    use beanwire_di::component;
    use beanwire_di::factory::ComponentFactory;
    use beanwire_di::instance_provider::{ComponentInstancePtr, ErrorPtr};
    use beanwire_di::ConstructionError;

    trait TestTrait {
        fn name(&self) -> &'static str;
    }

    struct TestDependency;

    impl TestTrait for TestDependency {
        fn name(&self) -> &'static str {
            "test dependency"
        }
    }

    #[cfg(feature = "threadsafe")]
    type TestTraitPtr = ComponentInstancePtr<dyn TestTrait + Send + Sync>;
    #[cfg(not(feature = "threadsafe"))]
    type TestTraitPtr = ComponentInstancePtr<dyn TestTrait>;

    fn create_dependency() -> Result<TestTraitPtr, ErrorPtr> {
        Ok(ComponentInstancePtr::new(TestDependency) as TestTraitPtr)
    }

    struct TestComponent1 {
        dependency: Option<TestTraitPtr>,
    }

    #[component]
    impl TestComponent1 {
        fn new() -> Self {
            Self { dependency: None }
        }

        fn with_dependency(dependency: TestTraitPtr) -> Self {
            Self {
                dependency: Some(dependency),
            }
        }
    }

    struct TestComponent2 {
        dependency: Option<TestTraitPtr>,
    }

    #[component]
    impl TestComponent2 {
        fn new() -> Self {
            Self { dependency: None }
        }
    }

    struct TestComponent3;

    #[component]
    impl TestComponent3 {
        fn with_other(_value: u8) -> Self {
            Self
        }

        fn with_many(_dependency: TestTraitPtr, _value: u8) -> Self {
            Self
        }
    }

    #[test]
    fn should_inject_dependency() {
        let factory = ComponentFactory::new(create_dependency);

        let component = factory.create::<TestComponent1>().unwrap();
        assert_eq!(
            component.dependency.map(|dependency| dependency.name()),
            Some("test dependency")
        );
    }

    #[test]
    fn should_use_default_constructor() {
        let factory = ComponentFactory::new(create_dependency);

        let component = factory.create::<TestComponent2>().unwrap();
        assert!(component.dependency.is_none());
    }

    #[test]
    fn should_reject_component_without_suitable_constructor() {
        let factory = ComponentFactory::new(create_dependency);

        assert!(matches!(
            factory.create::<TestComponent3>(),
            Err(ConstructionError::NoSuitableConstructor { .. })
        ));
    }
}
