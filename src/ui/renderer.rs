use crate::app::game::GameOutcome;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use tribes_data::{Grid, Tribe};

/// Output surface of a running game.
pub trait Renderer {
    /// Shows `grid` as generation `generation`.
    fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()>;

    /// Reports how the game ended.
    fn announce(&mut self, outcome: &GameOutcome) -> io::Result<()>;
}

pub fn tribe_color(tribe: Tribe) -> Color {
    match tribe {
        Tribe::Vikings => Color::Red,
        Tribe::Warriors => Color::Green,
        Tribe::Mages => Color::Magenta,
        Tribe::None => Color::DarkGrey,
    }
}

/// Draws the board as coloured sigils with row numbers.
pub struct TerminalRenderer<W: Write> {
    out: W,
    clear_screen: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), true)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        let width = grid.rows().saturating_sub(1).to_string().len();
        for r in 0..grid.rows() {
            queue!(self.out, Print(format!("{r:>width$} ")))?;
            for &tribe in grid.row(r) {
                let sigil = if tribe.is_alive() { tribe.sigil() } else { '.' };
                queue!(
                    self.out,
                    SetForegroundColor(tribe_color(tribe)),
                    Print(sigil),
                    Print(' ')
                )?;
            }
            queue!(self.out, ResetColor, Print("\r\n"))?;
        }

        let [vikings, warriors, mages] = grid.population();
        queue!(
            self.out,
            Print(format!(
                "Generation {generation} | {}: {vikings}  {}: {warriors}  {}: {mages} | p pause, e exit\r\n",
                Tribe::Vikings.name(),
                Tribe::Warriors.name(),
                Tribe::Mages.name(),
            ))
        )?;
        self.out.flush()
    }

    fn announce(&mut self, outcome: &GameOutcome) -> io::Result<()> {
        let color = match outcome {
            GameOutcome::Victory(tribe) => tribe_color(*tribe),
            GameOutcome::Interrupted { .. } => Color::Yellow,
            _ => Color::Blue,
        };
        queue!(
            self.out,
            SetForegroundColor(color),
            Print(outcome.to_string()),
            ResetColor,
            Print("\r\n")
        )?;
        self.out.flush()
    }
}

/// Renderer for runs without a terminal; everything goes to `tracing`.
pub struct HeadlessRenderer {
    log_every: u64,
    frames: u64,
}

impl HeadlessRenderer {
    /// Logs one in every `log_every` generations (at least every one).
    pub fn new(log_every: u64) -> Self {
        Self {
            log_every: log_every.max(1),
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        self.frames += 1;
        if generation % self.log_every == 0 {
            let [vikings, warriors, mages] = grid.population();
            tracing::info!(generation, vikings, warriors, mages, "Generation");
        }
        Ok(())
    }

    fn announce(&mut self, outcome: &GameOutcome) -> io::Result<()> {
        tracing::info!(outcome = ?outcome, "{outcome}");
        Ok(())
    }
}
