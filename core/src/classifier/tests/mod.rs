#[cfg(test)]
mod validation_tests;
