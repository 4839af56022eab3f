//! TETRS Reserve - next-piece queue and reserve stack
//!
//! A bounded queue of upcoming pieces and a small reserve stack. The
//! [`manager::ActionManager`] owns both and exposes the five menu actions;
//! the terminal front end lives in `main.rs`.

pub mod error;
pub mod factory;
pub mod input;
pub mod manager;
pub mod piece;
pub mod queue;
pub mod settings;
pub mod stack;
pub mod tetromino;
pub mod ui;
