//! Unit coverage for the event surface, organized by operation.

mod execute_tests;
