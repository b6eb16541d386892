use crate::app_state::AppState;
use crate::config::Config;
use crate::render::TerminalRenderer;
use crate::scene::WorldScene;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::style::Color;
use std::io;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

pub struct App {
    state: AppState,
    scene: WorldScene,
    tick: Duration,
    hide_hud: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            state: AppState::new(config.scene.night),
            scene: WorldScene::new(),
            tick: Duration::from_millis(config.animation.tick_ms),
            hide_hud: config.hide_hud,
        }
    }

    pub async fn run(&mut self, renderer: &mut TerminalRenderer) -> io::Result<()> {
        let mut ticker = time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            if self.state.needs_redraw {
                renderer.clear()?;

                let shapes = self.scene.compose(&self.state);
                renderer.draw_shapes(&shapes);

                if !self.hide_hud {
                    self.state.update_cached_hud();
                    renderer.render_line_colored(2, 1, &self.state.cached_hud, Color::Cyan)?;
                }

                renderer.flush()?;
                self.state.needs_redraw = false;
            }

            // Drain whatever input arrived since the last tick.
            while event::poll(Duration::ZERO)? {
                match event::read()? {
                    Event::Resize(width, height) => {
                        renderer.manual_resize(width, height)?;
                        self.state.needs_redraw = true;
                    }
                    Event::Key(key_event) => match key_event.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                        KeyCode::Char('c')
                            if key_event.modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            return Ok(());
                        }
                        KeyCode::Char(c) => self.state.handle_key(c),
                        _ => self.state.needs_redraw = true,
                    },
                    _ => {}
                }
            }

            ticker.tick().await;
            self.state.advance_boat();
        }
    }
}
