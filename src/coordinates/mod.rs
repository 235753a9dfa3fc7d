pub mod models;
pub mod validation;
#[cfg(test)]
mod tests;
