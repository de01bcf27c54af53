mod common;

mod actions;
mod decisions;
mod items;
