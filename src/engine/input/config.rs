// Key binding configuration and remapping

use super::action::{self, Action, InputSource};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use winit::keyboard::KeyCode;

/// Which binding table a config belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingScope {
    /// Fighter controls for a player slot (0 or 1)
    Player(usize),
    /// Menu and flow controls shared by everyone
    Global,
}

impl BindingScope {
    fn default_bindings(self) -> Vec<(InputSource, Action)> {
        match self {
            Self::Player(0) => action::default_p1_bindings(),
            Self::Player(1) => action::default_p2_bindings(),
            Self::Player(_) => Vec::new(),
            Self::Global => action::global_bindings(),
        }
    }
}

/// Replacement keys for some actions of one table
pub type KeyOverrides = BTreeMap<Action, Vec<KeyCode>>;

/// Binding overrides read from a JSON file
///
/// ```json
/// { "player1": { "Jump": ["Space"] }, "global": { "Pause": ["KeyP"] } }
/// ```
///
/// Every action listed loses its default keys; actions left out keep them.
/// An empty key list unbinds the action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindingsFile {
    pub player1: KeyOverrides,
    pub player2: KeyOverrides,
    pub global: KeyOverrides,
}

/// One binding table: input source -> action
///
/// A source maps to at most one action inside a table. The same key may
/// appear in several tables (W is both P1 jump and menu up).
#[derive(Debug, Clone)]
pub struct InputConfig {
    scope: BindingScope,
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Create an empty table
    pub fn new(scope: BindingScope) -> Self {
        Self {
            scope,
            bindings: HashMap::new(),
        }
    }

    /// Create a table pre-filled with the default bindings for `scope`
    pub fn with_defaults(scope: BindingScope) -> Self {
        let mut config = Self::new(scope);
        config.reset_to_defaults();
        config
    }

    /// Bind an input source to an action, replacing whatever it did before
    pub fn bind(&mut self, source: InputSource, action: Action) {
        if let Some(previous) = self.bindings.insert(source, action) {
            if previous != action {
                log::debug!("{:?}: {:?} rebound from {:?} to {:?}", self.scope, source, previous, action);
            }
        }
    }

    /// Unbind all sources for an action
    pub fn unbind_action(&mut self, action: Action) {
        self.bindings.retain(|_, bound| *bound != action);
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Restore the default bindings for this table's scope
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (source, action) in self.scope.default_bindings() {
            self.bind(source, action);
        }
    }

    /// Swap in the keys listed for each action in `overrides`
    pub fn apply_overrides(&mut self, overrides: &KeyOverrides) {
        for (action, keys) in overrides {
            self.unbind_action(*action);
            for key in keys {
                self.bind(InputSource::key(*key), *action);
            }
            if keys.is_empty() {
                log::warn!("{:?}: {:?} has no keys left", self.scope, action);
            }
        }
    }
}

/// All binding tables: one per player slot plus the global table
#[derive(Debug)]
pub struct InputConfigManager {
    players: Vec<InputConfig>,
    global: InputConfig,
}

impl InputConfigManager {
    pub fn new(num_players: usize) -> Self {
        Self {
            players: (0..num_players)
                .map(|slot| InputConfig::with_defaults(BindingScope::Player(slot)))
                .collect(),
            global: InputConfig::with_defaults(BindingScope::Global),
        }
    }

    pub fn get_config(&self, player_id: usize) -> Option<&InputConfig> {
        self.players.get(player_id)
    }

    pub fn get_config_mut(&mut self, player_id: usize) -> Option<&mut InputConfig> {
        self.players.get_mut(player_id)
    }

    pub fn global_config_mut(&mut self) -> &mut InputConfig {
        &mut self.global
    }

    /// Fighter action a source triggers for one player
    pub fn player_action(&self, player_id: usize, source: InputSource) -> Option<Action> {
        self.get_config(player_id)?.get_action(source)
    }

    /// Menu/flow action a source triggers
    pub fn global_action(&self, source: InputSource) -> Option<Action> {
        self.global.get_action(source)
    }

    /// Layer a bindings file over the current tables
    pub fn apply(&mut self, file: &BindingsFile) {
        for (player_id, overrides) in [&file.player1, &file.player2].into_iter().enumerate() {
            match self.get_config_mut(player_id) {
                Some(config) => config.apply_overrides(overrides),
                None if !overrides.is_empty() => {
                    log::warn!("No player {} to rebind; ignoring its bindings", player_id + 1);
                }
                None => {}
            }
        }
        self.global_config_mut().apply_overrides(&file.global);
    }
}

impl Default for InputConfigManager {
    fn default() -> Self {
        Self::new(2)
    }
}
