#[cfg(test)]
pub mod common;

#[cfg(test)]
mod refresh_and_persistence;
