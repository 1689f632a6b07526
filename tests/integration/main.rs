//! Integration test modules.

mod goal_store_test;
