use crate::terminal::{KeyCode, KeyEvent, KeyModifiers, TerminalEvent};
use crate::ui::frame::{Frame, Line};
use crate::ui::style::Color;
use crossterm::event::{Event, KeyEventKind, poll, read};
use crossterm::style::{ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, execute, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

/// Thin wrapper over crossterm so the engines only ever see
/// crate-local key and event types.
pub struct Terminal {
    stdout: Stdout,
    size: Size,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let stdout = io::stdout();
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            size: Size { width, height },
        })
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        poll(timeout)
    }

    pub fn read_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            match read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    return Ok(TerminalEvent::Key(map_key_event(key)));
                }
                Event::Resize(width, height) => {
                    self.size = Size { width, height };
                    return Ok(TerminalEvent::Resize { width, height });
                }
                _ => continue,
            }
        }
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Hide)?;
        Ok(())
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Show)?;
        Ok(())
    }

    pub fn move_to_column_start(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::MoveToColumn(0))?;
        Ok(())
    }

    pub fn move_up(&mut self, rows: u16) -> io::Result<()> {
        if rows > 0 {
            execute!(self.stdout, cursor::MoveUp(rows))?;
        }
        Ok(())
    }

    pub fn clear_from_cursor_down(&mut self) -> io::Result<()> {
        execute!(
            self.stdout,
            terminal::Clear(terminal::ClearType::FromCursorDown)
        )?;
        Ok(())
    }

    pub fn render_line(&mut self, line: &Line) -> io::Result<()> {
        for span in line.spans() {
            let styled = span.style.color.is_some() || span.style.bold;

            if let Some(fg) = span.style.color {
                write!(self.stdout, "{}", SetForegroundColor(map_color(fg)))?;
            }
            if span.style.bold {
                write!(
                    self.stdout,
                    "{}",
                    SetAttribute(crossterm::style::Attribute::Bold)
                )?;
            }

            write!(self.stdout, "{}", span.text)?;

            if styled {
                write!(
                    self.stdout,
                    "{}",
                    SetAttribute(crossterm::style::Attribute::Reset)
                )?;
                write!(self.stdout, "{}", ResetColor)?;
            }
        }
        Ok(())
    }

    pub fn render_frame(&mut self, frame: &Frame) -> io::Result<u16> {
        for line in frame.lines() {
            self.render_line(line)?;
            write!(self.stdout, "\r\n")?;
        }
        self.flush()?;
        Ok(frame.lines().len() as u16)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

fn map_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::Red => crossterm::style::Color::Red,
        Color::Green => crossterm::style::Color::Green,
        Color::Yellow => crossterm::style::Color::Yellow,
        Color::Cyan => crossterm::style::Color::Cyan,
        Color::DarkGrey => crossterm::style::Color::DarkGrey,
        Color::White => crossterm::style::Color::White,
    }
}

fn map_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(event.code),
        modifiers: map_key_modifiers(event.modifiers),
    }
}

fn map_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Left => KeyCode::Left,
        crossterm::event::KeyCode::Right => KeyCode::Right,
        crossterm::event::KeyCode::Up => KeyCode::Up,
        crossterm::event::KeyCode::Down => KeyCode::Down,
        crossterm::event::KeyCode::Home => KeyCode::Home,
        crossterm::event::KeyCode::End => KeyCode::End,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::BackTab => KeyCode::BackTab,
        crossterm::event::KeyCode::Delete => KeyCode::Delete,
        crossterm::event::KeyCode::PageUp => KeyCode::PageUp,
        crossterm::event::KeyCode::PageDown => KeyCode::PageDown,
        _ => KeyCode::Other,
    }
}

fn map_key_modifiers(modifiers: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut mapped = KeyModifiers::NONE;
    if modifiers.contains(crossterm::event::KeyModifiers::SHIFT) {
        mapped |= KeyModifiers::SHIFT;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::CONTROL) {
        mapped |= KeyModifiers::CONTROL;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::ALT) {
        mapped |= KeyModifiers::ALT;
    }
    mapped
}
