pub mod life_grid;
pub mod summary;
pub mod year_overview;

#[cfg(test)]
mod overview_test;
