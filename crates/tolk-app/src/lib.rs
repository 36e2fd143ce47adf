pub mod controller;
pub mod events;
pub mod ui;

#[cfg(test)]
mod tests;
