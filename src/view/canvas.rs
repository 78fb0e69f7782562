use std::{fmt::Write as _, io};

use crate::{pos, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    Bold,
    Faint,
    Inverted,
}

impl Style {
    fn escape(self) -> String {
        use termion::style;
        match self {
            Style::Plain => format!("{}", style::Reset),
            Style::Bold => format!("{}{}", style::Reset, style::Bold),
            Style::Faint => format!("{}{}", style::Reset, style::Faint),
            Style::Inverted => format!("{}{}", style::Reset, style::Invert),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Glyph {
    char: char,
    style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            char: ' ',
            style: Style::Plain,
        }
    }
}

/// An in-memory screen, composed then flushed in one write.
pub struct Canvas {
    lines: Vec<Vec<Glyph>>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        let lines = vec![vec![Glyph::default(); width]; height];
        Self {
            height,
            lines,
            width,
        }
    }

    /// writes one char; positions off the canvas are dropped.
    pub fn put(&mut self, Pos { x, y }: Pos, char: char, style: Style) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.lines[y as usize][x as usize] = Glyph { char, style };
    }

    pub fn text(&mut self, pos: Pos, text: &str, style: Style) {
        for (offset, char) in text.chars().enumerate() {
            self.put(pos + pos!(offset as i32, 0), char, style);
        }
    }

    /// draws a box whose corners are `from` and `to`, leaving the inside alone.
    pub fn frame(&mut self, from: Pos, to: Pos) {
        for x in from.x + 1..to.x {
            self.put(pos!(x, from.y), '─', Style::Plain);
            self.put(pos!(x, to.y), '─', Style::Plain);
        }
        for y in from.y + 1..to.y {
            self.put(pos!(from.x, y), '│', Style::Plain);
            self.put(pos!(to.x, y), '│', Style::Plain);
        }
        self.put(from, '┌', Style::Plain);
        self.put(pos!(to.x, from.y), '┐', Style::Plain);
        self.put(pos!(from.x, to.y), '└', Style::Plain);
        self.put(to, '┘', Style::Plain);
    }

    /// blanks the rectangle between `from` and `to`, both included.
    pub fn fill(&mut self, from: Pos, to: Pos) {
        for y in from.y..=to.y {
            for x in from.x..=to.x {
                self.put(pos!(x, y), ' ', Style::Plain);
            }
        }
    }

    #[cfg(test)]
    pub fn line(&self, y: usize) -> String {
        self.lines[y].iter().map(|glyph| glyph.char).collect()
    }

    pub fn display(&self, out: &mut impl io::Write) -> io::Result<()> {
        let mut result = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            let goto = termion::cursor::Goto(1, index as u16 + 1);
            let _ = write!(result, "{goto}");
            let mut current = None;
            for glyph in line {
                if current != Some(glyph.style) {
                    result += &glyph.style.escape();
                    current = Some(glyph.style);
                }
                result.push(glyph.char);
            }
        }
        result += &Style::Plain.escape();
        out.write_all(result.as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_draws_corners_and_edges() {
        let mut canvas = Canvas::new(5, 3);
        canvas.frame(pos!(0, 0), pos!(4, 2));
        assert_eq!(canvas.line(0), "┌───┐");
        assert_eq!(canvas.line(1), "│   │");
        assert_eq!(canvas.line(2), "└───┘");
    }

    #[test]
    fn writes_off_the_canvas_are_clipped() {
        let mut canvas = Canvas::new(4, 1);
        canvas.text(pos!(2, 0), "abcdef", Style::Bold);
        canvas.text(pos!(-1, 0), "xy", Style::Plain);
        canvas.put(pos!(0, 5), 'z', Style::Plain);
        assert_eq!(canvas.line(0), "y ab");
    }

    #[test]
    fn display_moves_to_each_line_and_styles_runs() {
        let mut canvas = Canvas::new(3, 2);
        canvas.text(pos!(0, 1), "ab", Style::Inverted);
        let mut out = Vec::new();
        canvas.display(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with(&format!("{}", termion::cursor::Goto(1, 1))));
        assert!(out.contains(&format!("{}", termion::cursor::Goto(1, 2))));
        assert!(out.contains(&format!("{}ab", termion::style::Invert)));
        assert!(out.ends_with(&format!("{}", termion::style::Reset)));
    }
}
