//! Armiger - Console Duel Simulation

pub mod battle;
pub mod character;
pub mod core;
pub mod items;
