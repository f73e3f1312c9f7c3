use drone_memusage_config::{Config, CONFIG_NAME};
use proc_macro::TokenStream;
use syn::{parse_macro_input, LitStr};

pub fn proc_macro(input: TokenStream) -> TokenStream {
    let contents = parse_macro_input!(input as LitStr);
    match Config::set_override(&contents.value()) {
        Ok(_) => TokenStream::new(),
        Err(err) => syn::Error::new(contents.span(), format!("{CONFIG_NAME} override: {err:#}"))
            .to_compile_error()
            .into(),
    }
}
