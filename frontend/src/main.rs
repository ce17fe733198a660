//! Entry point for the WASM application

pub fn main() {
    medlist_frontend::mount();
}
