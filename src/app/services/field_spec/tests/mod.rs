//! Tests for the ADIF field specification tables and predicates

pub mod predicate_tests;
pub mod table_tests;
