#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Write one line to the browser console, or stderr when running natively
/// (imported JS functions panic outside of wasm32, e.g. under `cargo test`).
pub fn write_line(line: &str) {
    #[cfg(target_arch = "wasm32")]
    log(line);

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{line}");
}

// Macro for console.log debugging
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::console::write_line(&format_args!($($t)*).to_string())
    };
}
