//! Bean factory demo application built on [beanwire_di].
//!
//! A [DefaultBusinessService](service::DefaultBusinessService) is created by a
//! [BeanFactory](application::BeanFactory), which notices the service has a constructor accepting
//! a [DataProvider](dao::DataProvider) and injects a fresh
//! [DaoDataProvider](dao::DaoDataProvider). The service then prints the provided data between
//! start and finish markers.

pub mod application;
pub mod bean_config;
pub mod config;
pub mod dao;
pub mod service;
