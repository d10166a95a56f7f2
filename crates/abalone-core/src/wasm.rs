//! WebAssembly bindings for the Abalone engine.
//!
//! This module exposes the game to JavaScript through wasm-bindgen. Data
//! crosses the boundary as JSON strings.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::color::Color;
#[cfg(feature = "wasm")]
use crate::game::{GameConfig, GameState};
#[cfg(feature = "wasm")]
use crate::layout::HexLayout;
#[cfg(feature = "wasm")]
use crate::moves::Move;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "wasm")]
fn parse_color(color: &str) -> Result<Color, JsValue> {
    serde_json::from_str(&format!("\"{}\"", color))
        .map_err(|_| JsValue::from_str(&format!("Unknown color: {}", color)))
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
    layout: HexLayout,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Create a new game; `config_json` may be empty for the default rules
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: &str,
        hex_size: f64,
        origin_x: f64,
        origin_y: f64,
    ) -> Result<WasmGame, JsValue> {
        let config: GameConfig = if config_json.trim().is_empty() {
            GameConfig::default()
        } else {
            serde_json::from_str(config_json)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };

        Ok(WasmGame {
            state: GameState::with_config(config),
            layout: HexLayout::new(hex_size, origin_x, origin_y),
        })
    }

    /// Get the current game state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get board state as JSON (for rendering)
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        let board_json = self.state.board.to_json_friendly();
        serde_json::to_string(&board_json).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the side to move ("Black" or "White")
    #[wasm_bindgen(js_name = getCurrentPlayer)]
    pub fn get_current_player(&self) -> String {
        self.state.current_player.to_string()
    }

    /// Get legal moves for the side to move as JSON array
    #[wasm_bindgen(js_name = getValidMoves)]
    pub fn get_valid_moves(&self) -> String {
        serde_json::to_string(&self.state.valid_moves()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Apply a move from JSON, returns events JSON or error
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, player: &str, move_json: &str) -> Result<String, JsValue> {
        let player = parse_color(player)?;
        let mv: Move = serde_json::from_str(move_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid move JSON: {}", e)))?;

        match self.state.apply_move(player, &mv) {
            Ok(events) => Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())),
            Err(e) => Err(JsValue::from_str(&format!("Move failed: {}", e))),
        }
    }

    /// Check if the game is finished
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Get the winner (if game is finished)
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<String> {
        self.state.winner().map(|c| c.to_string())
    }

    /// Marbles of a colour pushed off the board
    #[wasm_bindgen(js_name = getEjected)]
    pub fn get_ejected(&self, color: &str) -> Result<u32, JsValue> {
        Ok(self.state.board.ejected_count(parse_color(color)?))
    }

    /// Board cell under a pixel as `[q, r]`, or nothing when off the board
    #[wasm_bindgen(js_name = hexAtPixel)]
    pub fn hex_at_pixel(&self, x: f64, y: f64) -> Option<Vec<i32>> {
        let hex = self.layout.pixel_to_hex(x, y);
        hex.is_on_board().then(|| vec![hex.q, hex.r])
    }
}
