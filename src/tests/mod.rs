pub mod support;

mod enrollment_persistence;
