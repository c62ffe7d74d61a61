// Domain layer: validated value objects. No I/O.

pub(crate) mod input;
pub mod employee;
pub mod person;

pub use employee::{Employee, EmployeeRecord};
pub use person::Person;
