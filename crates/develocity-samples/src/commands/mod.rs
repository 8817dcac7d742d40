pub mod builds;
pub mod spec;

#[cfg(test)]
mod tests_tests;
