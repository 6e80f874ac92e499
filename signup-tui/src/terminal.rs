use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal,
};

use crate::draw::{Line, Tone};

/// Raw-mode alternate-screen terminal. Restores the terminal on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        queue!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        stdout.flush()?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Block until the next terminal event.
    pub fn read(&self) -> io::Result<CrosstermEvent> {
        event::read()
    }

    /// Replace the screen contents with `lines`.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;

        for (y, line) in lines.iter().enumerate() {
            let Ok(y) = u16::try_from(y) else { break };
            queue!(self.stdout, cursor::MoveTo(0, y))?;
            for span in line {
                self.apply_tone(span.tone)?;
                queue!(self.stdout, Print(&span.text))?;
                queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }

        self.stdout.flush()
    }

    fn apply_tone(&mut self, tone: Tone) -> io::Result<()> {
        match tone {
            Tone::Normal | Tone::Input | Tone::Button => {}
            Tone::Title => queue!(
                self.stdout,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(Color::Cyan)
            )?,
            Tone::Muted => queue!(self.stdout, SetForegroundColor(Color::DarkGrey))?,
            Tone::Label => queue!(self.stdout, SetAttribute(Attribute::Bold))?,
            Tone::InvalidInput | Tone::Error => {
                queue!(self.stdout, SetForegroundColor(Color::Red))?
            }
            Tone::Cursor => queue!(self.stdout, SetAttribute(Attribute::Reverse))?,
            Tone::FocusedButton => queue!(
                self.stdout,
                SetAttribute(Attribute::Bold),
                SetAttribute(Attribute::Reverse)
            )?,
            Tone::Success => queue!(self.stdout, SetForegroundColor(Color::Green))?,
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = queue!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = self.stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}
