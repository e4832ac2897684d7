//! Console renderer
//!
//! Draws the dog, its props and the owner's standing as colored text.
//! Write failures cannot be returned through [`Display`], so the first one
//! is kept and handed back by [`ConsoleDisplay::finish`].

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};
use wd_core::{Display, Dog, LossReason, Owner, SceneView, Stage};

use crate::theme::Theme;

const RULE: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";
const BAND_WIDTH: usize = 40;
/// Shown where a scene slot has no prop
const NO_PROP: &str = "  ";

pub struct ConsoleDisplay<W: Write> {
    out: W,
    theme: Theme,
    color: bool,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            theme: Theme::default(),
            color,
            error: None,
        }
    }

    /// Flush and give back the writer, or the first write error
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn fg(&mut self, color: Color) -> io::Result<()> {
        if self.color {
            queue!(self.out, SetForegroundColor(color))?;
        }
        Ok(())
    }

    fn bg(&mut self, color: Color) -> io::Result<()> {
        if self.color {
            queue!(self.out, SetBackgroundColor(color))?;
        }
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        if self.color {
            queue!(self.out, ResetColor)?;
        }
        Ok(())
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result.and_then(|()| self.out.flush()) {
            tracing::error!(%err, "console write failed");
            if self.error.is_none() {
                self.error = Some(err);
            }
        }
    }

    fn draw_header(&mut self) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, " __________________________________________________________________")?;
        writeln!(out, "|                       Walk Your Dog Simulator                    |")?;
        writeln!(out, "|          By Erin Paranal, Maureen VonHassel, Yuna Ukawa          |")?;
        writeln!(out, "|__________________________________________________________________|\n\n")?;
        writeln!(out, "🎉Welcome to Walk-Your-Dog Simulator🎉\n")?;
        writeln!(out, "Experience what it's like to have a dog in this Simulator.")?;
        writeln!(out, "• Name your dog!")?;
        writeln!(out, "• Walk your dog across five different environments!")?;
        writeln!(out, "• Encounter different scenarios and experience different outcomes!")?;
        writeln!(out, "• Pick up poop.")?;
        writeln!(out, "====================================================================\n\n")
    }

    fn draw_scene(&mut self, view: SceneView<'_>) -> io::Result<()> {
        let SceneView {
            stage,
            dog,
            owner,
            scene,
        } = view;
        let fur = self.theme.fur(dog.fur);
        let text = self.theme.text;

        self.bg(self.theme.backdrop(stage.sky()))?;
        self.fg(text)?;
        writeln!(self.out, " {}", stage.name())?;

        self.fg(fur)?;
        write!(self.out, "           __        ")?;
        self.fg(text)?;
        writeln!(self.out, "{} is {}...", dog.name, dog.action)?;

        self.fg(fur)?;
        write!(self.out, "      (___()'`;{}", scene.food.unwrap_or(NO_PROP))?;
        self.fg(text)?;
        writeln!(self.out, "    Hunger: {}  Thirst: {}", dog.hunger, dog.thirst)?;

        self.fg(fur)?;
        write!(self.out, "      /,   / `       ")?;
        self.fg(text)?;
        writeln!(self.out, "{}'s Reputation: {}", owner.name, owner.reputation)?;

        write!(self.out, "   {} ", scene.trash.unwrap_or(NO_PROP))?;
        self.fg(fur)?;
        write!(self.out, "\\\\\"--\\\\  　　")?;
        writeln!(self.out, "{}", scene.distraction.unwrap_or(NO_PROP))?;

        self.bg(self.theme.backdrop(stage.ground()))?;
        writeln!(self.out, "{:BAND_WIDTH$}", "")?;
        self.reset()
    }

    fn draw_stats(&mut self, dog: &Dog, owner: &Owner) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "\t _______________________________")?;
        writeln!(out, "\t|\tHunger: {}  Thirst: {}\t\t|", dog.hunger, dog.thirst)?;
        writeln!(out, "\t|\tReputation: {}\t\t\t\t|", owner.reputation)?;
        writeln!(out, "\t|_______________________________|\n")?;
        self.reset()
    }

    fn draw_banner(&mut self, bg: Color, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        self.bg(bg)?;
        self.fg(self.theme.banner)?;
        writeln!(self.out, "\n\t{title}")
    }
}

impl<W: Write> Display for ConsoleDisplay<W> {
    fn header(&mut self) {
        let result = self.draw_header();
        self.record(result);
    }

    fn stage_banner(&mut self, stage: Stage) {
        let result = writeln!(self.out, "\n\n{RULE}\n{stage}\n");
        self.record(result);
    }

    fn scene(&mut self, view: SceneView<'_>) {
        let result = self.draw_scene(view);
        self.record(result);
    }

    fn message(&mut self, text: &str) {
        let result = writeln!(self.out, "{text}");
        self.record(result);
    }

    fn stats(&mut self, dog: &Dog, owner: &Owner) {
        let result = self.draw_stats(dog, owner);
        self.record(result);
    }

    fn stage_clear(&mut self, _stage: Stage, dog: &Dog, owner: &Owner) {
        let result = self
            .draw_banner(self.theme.clear_bg, "🎉STAGE CLEAR🎉")
            .and_then(|()| self.draw_stats(dog, owner));
        self.record(result);
    }

    fn game_over(&mut self, reason: LossReason, dog: &Dog, owner: &Owner) {
        let result = self
            .draw_banner(self.theme.danger_bg, "GAME OVER...")
            .and_then(|()| writeln!(self.out, "\t{}", reason.description()))
            .and_then(|()| self.draw_stats(dog, owner));
        self.record(result);
    }
}
