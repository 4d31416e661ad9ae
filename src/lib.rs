//! Text adventure interpreter: rooms joined by passages, some of them
//! locked behind key objects, explored one command at a time.

pub mod engine;
pub mod world;

pub use engine::{ConsolePort, EngineError, IoPort, Output, OutputBlock, Session, SessionState};
pub use world::{World, WorldError, load_world_from_file, load_world_from_str};

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<OutputBlock>,
        quit: bool,
    }

    fn js_error(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    /// Browser front end: the page owns the input box and feeds lines in.
    #[wasm_bindgen]
    pub struct WasmGame {
        session: Session,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from a TOML world string. Call `init()` to get the initial render.
        #[wasm_bindgen(constructor)]
        pub fn new(world_toml: &str) -> Result<WasmGame, JsValue> {
            let world = load_world_from_str(world_toml).map_err(js_error)?;
            Ok(WasmGame {
                session: Session::new(world),
            })
        }

        /// Describe the starting room.
        #[wasm_bindgen]
        pub fn init(&mut self) -> Result<JsValue, JsValue> {
            let out = self.session.start().map_err(js_error)?;
            self.result(out)
        }

        /// Process a player command and return the resulting output blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> Result<JsValue, JsValue> {
            let out = self.session.step(input).map_err(js_error)?;
            self.result(out)
        }
    }

    impl WasmGame {
        fn result(&self, out: Output) -> Result<JsValue, JsValue> {
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit: self.session.is_terminated(),
            })
            .map_err(js_error)
        }
    }
}
