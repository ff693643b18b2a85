use beanwire::application::{bean_factory, Application};
use beanwire::dao::DAO_DATA;
use beanwire::service::{
    BusinessService, DefaultBusinessService, ServiceError, FINISH_MARKER, START_MARKER,
};
use std::process::Command;

#[test]
fn should_print_dao_data_between_markers() {
    let output = Command::new(env!("CARGO_BIN_EXE_beanwire"))
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap().lines().collect::<Vec<_>>(),
        vec![START_MARKER, DAO_DATA, FINISH_MARKER]
    );
}

#[test]
fn should_inject_data_provider() {
    let service = bean_factory().create::<DefaultBusinessService>().unwrap();
    assert!(service.has_data_provider());

    let mut output: Vec<u8> = Vec::new();
    service.perform_with(&mut output).unwrap();
    assert!(String::from_utf8(output).unwrap().contains(DAO_DATA));
}

#[test]
fn should_fail_for_default_constructed_service() {
    assert!(matches!(
        DefaultBusinessService::new().perform(),
        Err(ServiceError::MissingDependency { .. })
    ));
}

#[test]
fn should_repeat_identical_output() {
    let application = Application::new(bean_factory());

    let mut first: Vec<u8> = Vec::new();
    let mut second: Vec<u8> = Vec::new();
    application
        .run_with::<DefaultBusinessService>(&mut first)
        .unwrap();
    application
        .run_with::<DefaultBusinessService>(&mut second)
        .unwrap();

    assert_eq!(first, second);
}
