// Input handling system
//
// Raw keyboard events are routed through binding tables into:
//
// - `player`: held/edge state per player slot (fighter controls)
// - a global `PlayerInput` for menu and flow controls
// - a text buffer for free-text answers
//
// `config` holds the binding tables (overridable from a JSON bindings file)
// and `manager` ties it together.
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // After each simulation frame
// input.end_frame();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::{BindingScope, BindingsFile, InputConfig, InputConfigManager};
pub use manager::InputManager;
pub use player::PlayerInput;
