// Main menu and character select cursors

use crate::core::math::wrap_index;
use crate::game::characters::{character, CharacterProfile, PlayerSlot, ROSTER};

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    VsAi,
    Versus,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [MenuOption::VsAi, MenuOption::Versus, MenuOption::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            Self::VsAi => "1 PLAYER (VS AI)",
            Self::Versus => "2 PLAYER (PVP)",
            Self::Exit => "EXIT",
        }
    }
}

/// Cursor over `MenuOption::ALL`, wrapping at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MainMenu {
    index: usize,
}

impl MainMenu {
    pub fn up(&mut self) {
        self.index = wrap_index(self.index, -1, MenuOption::ALL.len());
    }

    pub fn down(&mut self) {
        self.index = wrap_index(self.index, 1, MenuOption::ALL.len());
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn selected(&self) -> MenuOption {
        MenuOption::ALL[self.index]
    }

    pub fn labels() -> [&'static str; 3] {
        MenuOption::ALL.map(|option| option.label())
    }
}

/// Both players' roster cursors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterSelect {
    picks: [usize; 2],
}

impl Default for CharacterSelect {
    /// Each player starts on their own default character
    fn default() -> Self {
        Self { picks: [0, 1] }
    }
}

impl CharacterSelect {
    /// Move `slot`'s cursor by `delta`, wrapping around the roster
    pub fn cycle(&mut self, slot: PlayerSlot, delta: isize) {
        let pick = &mut self.picks[slot.index()];
        *pick = wrap_index(*pick, delta, ROSTER.len());
    }

    pub fn pick(&self, slot: PlayerSlot) -> usize {
        self.picks[slot.index()]
    }

    pub fn profile(&self, slot: PlayerSlot) -> &'static CharacterProfile {
        character(self.pick(slot))
    }
}
