//! Handler methods for the App struct.
//!
//! Each submodule adds an `impl App` block for one area of the window.

mod browse;
mod listing;
