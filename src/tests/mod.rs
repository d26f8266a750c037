mod traversal_tests;
mod utils;
