// Transient visual effects owned by the match

use glam::Vec2;

/// Frames a damage popup stays alive
pub const POPUP_LIFETIME: u32 = 40;

/// Upward drift per frame
const POPUP_RISE: f32 = -3.0;

/// Floating damage number spawned where a hit landed
#[derive(Debug, Clone, PartialEq)]
pub struct DamagePopup {
    /// Centre of the text
    pub position: Vec2,
    pub amount: i32,
    pub frames_left: u32,
}

impl DamagePopup {
    pub fn new(position: Vec2, amount: i32) -> Self {
        Self {
            position,
            amount,
            frames_left: POPUP_LIFETIME,
        }
    }

    /// Text a renderer should draw
    pub fn label(&self) -> String {
        format!("-{}", self.amount)
    }

    pub fn is_expired(&self) -> bool {
        self.frames_left == 0
    }

    fn update(&mut self) {
        self.position.y += POPUP_RISE;
        self.frames_left = self.frames_left.saturating_sub(1);
    }
}

/// All live popups
#[derive(Debug, Clone, Default)]
pub struct Effects {
    popups: Vec<DamagePopup>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_popup(&mut self, position: Vec2, amount: i32) {
        self.popups.push(DamagePopup::new(position, amount));
    }

    /// Age every popup one frame and drop the expired ones
    pub fn update(&mut self) {
        for popup in &mut self.popups {
            popup.update();
        }
        self.popups.retain(|popup| !popup.is_expired());
    }

    pub fn popups(&self) -> &[DamagePopup] {
        &self.popups
    }

    pub fn clear(&mut self) {
        self.popups.clear();
    }
}
