pub mod app;
pub mod cli;
pub mod components;
pub mod consts;
pub mod keybinds;
pub mod logging;
