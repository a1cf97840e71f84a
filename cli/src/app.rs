use anyhow::Context;
use demineur_core::*;
use std::io::Write;
use std::thread;

use crate::command::{Command, HELP};
use crate::render;

/// Terminal frontend state: the preset list and the session being played.
pub(crate) struct App {
    presets: Vec<Preset>,
    label: String,
    config: GameConfig,
    session: Session,
    seed: Option<u64>,
    animate: bool,
}

impl App {
    pub(crate) fn new(
        presets: Vec<Preset>,
        label: String,
        config: GameConfig,
        seed: Option<u64>,
        animate: bool,
    ) -> Self {
        let session = Session::new_game(config, seed.unwrap_or_else(rand::random));
        Self {
            presets,
            label,
            config,
            session,
            seed,
            animate,
        }
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    /// Board and status line.
    pub(crate) fn render(&self, out: &mut impl Write) -> anyhow::Result<()> {
        write!(out, "{}", render::board(&self.session))?;
        writeln!(out, "{}", render::status(&self.label, &self.session))?;
        Ok(())
    }

    /// Applies one command, returns `false` when the player quits.
    pub(crate) fn handle(&mut self, command: Command, out: &mut impl Write) -> anyhow::Result<bool> {
        match command {
            Command::Reveal(coords) => {
                if self.check_coords(coords, out)? {
                    self.reveal(coords, out)?;
                }
            }
            Command::Flag(coords) => {
                if self.check_coords(coords, out)? && self.session.toggle_flag(coords)? {
                    self.render(out)?;
                }
            }
            Command::NewGame(name) => {
                if let Some(name) = name {
                    let Some(preset) = Preset::find(&self.presets, &name) else {
                        writeln!(out, "No preset named {name:?}")?;
                        return Ok(true);
                    };
                    self.config = preset
                        .config()
                        .with_context(|| format!("Preset {:?}", preset.name))?;
                    self.label = preset.to_string();
                }
                self.new_game();
                self.render(out)?;
            }
            Command::Presets => {
                for preset in &self.presets {
                    writeln!(out, "{preset} p={}", preset.mine_probability)?;
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn new_game(&mut self) {
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("New game {} with seed {}", self.label, seed);
        self.session = Session::new_game(self.config, seed);
    }

    /// The core treats stray coordinates as a bug, so player input is checked here first.
    fn check_coords(&self, coords: Coord2, out: &mut impl Write) -> anyhow::Result<bool> {
        if self.session.grid().validate_coords(coords).is_ok() {
            return Ok(true);
        }
        let (width, height) = self.session.grid().size();
        writeln!(out, "{coords:?} is outside the {width}x{height} grid")?;
        Ok(false)
    }

    fn reveal(&mut self, coords: Coord2, out: &mut impl Write) -> anyhow::Result<()> {
        let mut outcome = self.session.reveal(coords)?;
        if !outcome.has_update() {
            return Ok(());
        }

        while !self.session.is_settled() {
            if self.animate {
                thread::sleep(CASCADE_STEP_DELAY);
            }
            outcome = outcome.then(self.session.step());
        }

        self.render(out)?;
        match outcome {
            RevealOutcome::Ended(Outcome::Lost) => writeln!(out, "Boom! Type `n` to play again.")?,
            RevealOutcome::Ended(Outcome::Won) => writeln!(
                out,
                "Cleared in {}! Type `n` to play again.",
                format_clock(self.session.elapsed())
            )?,
            _ => {}
        }
        Ok(())
    }
}
