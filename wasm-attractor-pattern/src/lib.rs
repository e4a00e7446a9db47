//! # Attractor pattern generator
//!
//! Chaotic-attractor art (Clifford, DeJong and Fujii maps) accumulated onto
//! an RGBA canvas a batch at a time. The host drives it once per animation
//! frame:
//!
//! ```js
//! const canvas = new AttractorCanvas(width, height);
//! canvas.new_pattern();
//! function frame() {
//!   status.textContent = canvas.frame();
//!   imageData.data.set(canvas.pixels());
//!   ctx.putImageData(imageData, 0, 0);
//!   requestAnimationFrame(frame);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`rng`] - seeded random stream
//! - [`attractor`] - families, coefficients, stepping
//! - [`bounds`] - running extrema and pixel projection
//! - [`color`] - palette and additive blending
//! - [`surface`] - accumulation buffer
//! - [`session`] - pattern lifecycle

use wasm_bindgen::prelude::*;

pub mod attractor;
pub mod bounds;
pub mod color;
pub mod config;
pub mod console;
pub mod error;
pub mod rng;
pub mod session;
pub mod surface;

pub use attractor::{Coefficients, Family, SimulationState};
pub use bounds::Bounds;
pub use color::{hsv_to_rgb, Color, Palette, Rgba};
pub use config::{default_iteration_budget, GenerationMode, PanelSettings, PatternConfig};
pub use error::{PatternError, PatternResult};
pub use rng::PatternRng;
pub use session::{Lifecycle, PatternSession, Progress};
pub use surface::{AccumulationBuffer, Surface};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Canvas-sized pattern session exposed to JavaScript.
#[wasm_bindgen]
pub struct AttractorCanvas {
    session: PatternSession<AccumulationBuffer>,
}

#[wasm_bindgen]
impl AttractorCanvas {
    /// Create a canvas session and start a default pattern.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<AttractorCanvas, JsValue> {
        let surface = AccumulationBuffer::new(width, height)?;
        let session = PatternSession::new(surface, PatternConfig::default_for_width(width))?;
        Ok(AttractorCanvas { session })
    }

    /// Start a random Fujii pattern that cycles when finished.
    pub fn new_pattern(&mut self) -> Result<(), JsValue> {
        let (width, _) = self.session.surface().dimensions();
        self.session
            .reset_pattern(PatternConfig::default_for_width(width))?;
        Ok(())
    }

    /// Start a pattern from the settings panel; it stays on screen when done.
    ///
    /// @param settings - `{family, seed, saturation, brightness, iterations}`
    pub fn new_custom_pattern(&mut self, settings: JsValue) -> Result<(), JsValue> {
        let settings: PanelSettings = serde_wasm_bindgen::from_value(settings)
            .map_err(|err| PatternError::InvalidSettings(err.to_string()))?;
        self.session.reset_pattern(settings.into_config()?)?;
        Ok(())
    }

    /// Advance one animation frame and return the status line.
    pub fn frame(&mut self) -> Result<String, JsValue> {
        self.session.advance_frame(config::BATCH_SIZE)?;
        Ok(self.session.status_label())
    }

    /// Run a batch of `batch_size` steps and return the percent complete.
    pub fn run_batch(&mut self, batch_size: u32) -> u8 {
        self.session.run_batch(batch_size as u64).percent()
    }

    /// RGBA image data (width * height * 4 bytes)
    pub fn pixels(&self) -> Vec<u8> {
        self.session.surface().to_rgba8()
    }

    /// Returns true when the session is paused afterwards.
    pub fn toggle_pause(&mut self) -> bool {
        self.session.toggle_pause()
    }

    pub fn pause(&mut self) {
        self.session.pause();
    }

    pub fn resume(&mut self) {
        self.session.resume();
    }

    pub fn is_paused(&self) -> bool {
        self.session.is_suspended()
    }

    pub fn is_generating(&self) -> bool {
        self.session.is_generating()
    }

    pub fn progress(&self) -> u8 {
        self.session.progress().percent()
    }

    pub fn status_label(&self) -> String {
        self.session.status_label()
    }

    pub fn pause_label(&self) -> String {
        self.session.pause_label().to_string()
    }

    pub fn seed_label(&self) -> String {
        self.session.seed_label()
    }

    /// Seed as a JS number; seeds stay below 10^12.
    pub fn seed(&self) -> f64 {
        self.session.seed() as f64
    }

    pub fn coefficients(&self) -> Vec<f64> {
        self.session.coefficients().values()
    }

    pub fn palette(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.session.palette())?)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.session.surface().dimensions().0
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.session.surface().dimensions().1
    }
}

/// Values the settings panel shows after "reset to defaults".
#[wasm_bindgen]
pub fn get_default_settings(width: u32) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&PanelSettings::defaults_for_width(width))?)
}

/// Iteration budget used by default patterns on a canvas `width` pixels wide.
#[wasm_bindgen(js_name = default_iteration_budget)]
pub fn default_iteration_budget_js(width: u32) -> f64 {
    default_iteration_budget(width) as f64
}
