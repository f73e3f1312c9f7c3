use drone_memusage_config::{Config, CONFIG_NAME};
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream, Result},
    parse_macro_input, LitInt,
};

struct Input {}

impl Parse for Input {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        if !input.is_empty() {
            return Err(input.error("`ram_bounds!` takes no arguments"));
        }
        Ok(Self {})
    }
}

pub fn proc_macro(input: TokenStream) -> TokenStream {
    let Input {} = parse_macro_input!(input as Input);
    let bounds =
        Config::read_from_cargo_manifest_dir().and_then(|config| config.memory.ram.bounds());
    let (first, last) = match bounds {
        Ok(bounds) => bounds,
        Err(err) => {
            return syn::Error::new(Span::call_site(), format!("{CONFIG_NAME}: {err:#}"))
                .to_compile_error()
                .into();
        }
    };
    let first = LitInt::new(&format!("{first:#X}_usize"), Span::call_site());
    let last = LitInt::new(&format!("{last:#X}_usize"), Span::call_site());
    quote!((#first, #last)).into()
}
