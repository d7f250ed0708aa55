#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Binds the Duotone light/dark toggle to the page it is loaded into.
//! Native builds only print where the wasm bundle is meant to run.

#[cfg(target_arch = "wasm32")]
fn main() {
    duotone_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_NOTICE: &str = "duotone-ui runs in the browser: build it for wasm32-unknown-unknown (e.g. `trunk build`) and load it from a page carrying #theme-toggle.\n";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    std::io::stderr().lock().write_all(NATIVE_NOTICE.as_bytes())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_stub_names_the_wasm_target_and_markup() -> std::io::Result<()> {
        assert!(NATIVE_NOTICE.contains("wasm32-unknown-unknown"));
        assert!(NATIVE_NOTICE.contains("#theme-toggle"));
        main()
    }
}
