/// Lower bound of the boat's horizontal offset, also the wrap target.
pub const BOAT_MIN_OFFSET: f32 = -1.2;
/// Upper bound; exceeding it resets the offset to the lower bound.
pub const BOAT_MAX_OFFSET: f32 = 1.2;
/// Horizontal distance the boat travels per animation tick.
pub const BOAT_STEP: f32 = 0.005;

pub struct AppState {
    pub boat_offset: f32,
    pub is_night: bool,
    pub needs_redraw: bool,
    pub cached_hud: String,
    pub hud_needs_update: bool,
}

impl AppState {
    pub fn new(night: bool) -> Self {
        Self {
            boat_offset: BOAT_MIN_OFFSET,
            is_night: night,
            needs_redraw: true,
            cached_hud: String::new(),
            hud_needs_update: true,
        }
    }

    /// One animation tick. The wrap is a hard reset, so the boat visibly
    /// jumps back to the left edge instead of sliding in.
    pub fn advance_boat(&mut self) {
        self.boat_offset += BOAT_STEP;
        if self.boat_offset > BOAT_MAX_OFFSET {
            self.boat_offset = BOAT_MIN_OFFSET;
        }
        self.needs_redraw = true;
    }

    /// Handles a scene key. Keys other than 'n'/'N' change nothing but
    /// still request a repaint.
    pub fn handle_key(&mut self, key: char) {
        if matches!(key, 'n' | 'N') {
            self.is_night = !self.is_night;
            self.hud_needs_update = true;
        }
        self.needs_redraw = true;
    }

    pub fn update_cached_hud(&mut self) {
        if !self.hud_needs_update {
            return;
        }

        let mode = if self.is_night { "Night" } else { "Day" };
        self.cached_hud = format!("{} | Press 'n' to toggle day/night, 'q' to quit", mode);
        self.hud_needs_update = false;
    }
}
