// Frame-driven sprite animation state
//
// Only the bookkeeping lives here: which clip is playing, which frame of it
// is showing and whether the sprite is mirrored. Drawing is up to the
// renderer.

use std::collections::HashMap;

/// Simulation frames each animation frame stays on screen
pub const TICKS_PER_FRAME: u32 = 8;

/// A single animation clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationClip {
    pub name: &'static str,
    pub frame_count: usize,
    pub ticks_per_frame: u32,
}

impl AnimationClip {
    pub fn new(name: &'static str, frame_count: usize) -> Self {
        Self {
            name,
            frame_count: frame_count.max(1),
            ticks_per_frame: TICKS_PER_FRAME,
        }
    }
}

/// Data needed to render the current animation frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationFrameData {
    pub animation_name: &'static str,
    pub frame_index: usize,
    pub flip_horizontal: bool,
}

/// Looping clip playback for one fighter
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    clips: HashMap<&'static str, AnimationClip>,
    current: &'static str,
    frame: usize,
    tick: u32,
    flip_horizontal: bool,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            clips: HashMap::new(),
            current: "",
            frame: 0,
            tick: 0,
            flip_horizontal: false,
        }
    }

    /// Player with the fighter clip set: idle, a three-frame walk cycle,
    /// punch and kick
    pub fn with_fighter_clips() -> Self {
        let mut player = Self::new();
        player.add_clip(AnimationClip::new("idle", 1));
        player.add_clip(AnimationClip::new("walk", 3));
        player.add_clip(AnimationClip::new("punch", 1));
        player.add_clip(AnimationClip::new("kick", 1));
        player.play("idle");
        player
    }

    pub fn add_clip(&mut self, clip: AnimationClip) {
        self.clips.insert(clip.name, clip);
    }

    /// Switch clips; keeps the current frame if `name` is already playing
    pub fn play(&mut self, name: &'static str) {
        if self.current != name {
            self.play_from_start(name);
        }
    }

    /// Play a clip from its first frame, even if it's the same
    pub fn play_from_start(&mut self, name: &'static str) {
        self.current = name;
        self.frame = 0;
        self.tick = 0;
    }

    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    /// Advance one simulation frame
    pub fn update(&mut self) {
        let Some(clip) = self.clips.get(self.current) else {
            return;
        };

        self.tick += 1;
        if self.tick >= clip.ticks_per_frame {
            self.tick = 0;
            self.frame = (self.frame + 1) % clip.frame_count;
        }
    }

    pub fn get_frame_data(&self) -> AnimationFrameData {
        AnimationFrameData {
            animation_name: self.current,
            frame_index: self.frame,
            flip_horizontal: self.flip_horizontal,
        }
    }
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}
