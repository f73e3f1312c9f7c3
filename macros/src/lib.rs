//! Procedural macros for drone-memusage.
//!
//! See `drone-memusage` documentation for details.

#![warn(clippy::pedantic)]

extern crate proc_macro;

mod config_override;
mod ram_bounds;

use proc_macro::TokenStream;

#[proc_macro]
pub fn config_override(input: TokenStream) -> TokenStream {
    config_override::proc_macro(input)
}

#[proc_macro]
pub fn ram_bounds(input: TokenStream) -> TokenStream {
    ram_bounds::proc_macro(input)
}
