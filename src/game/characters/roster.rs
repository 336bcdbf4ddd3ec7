// Selectable characters

/// Display data for a selectable character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterProfile {
    pub name: &'static str,
    pub bio: &'static str,
    /// Sprite folder under the renderer's asset root
    pub sprite_folder: &'static str,
}

pub const ROSTER: [CharacterProfile; 2] = [
    CharacterProfile {
        name: "The Procrastinator",
        bio: "Master of 'I'll do it tomorrow'. Hits hard when he finally moves.",
        sprite_folder: "player1",
    },
    CharacterProfile {
        name: "Caffeine Demon",
        bio: "Runs on 12 espressos. Fast but crashes hard.",
        sprite_folder: "player2",
    },
];

/// Character at `index`, wrapping past the end of the roster
pub fn character(index: usize) -> &'static CharacterProfile {
    &ROSTER[index % ROSTER.len()]
}
