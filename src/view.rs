use std::{
    io::{self, stdin, stdout, Stdout, Write},
    sync::mpsc::{self, TryRecvError},
    thread,
};

use log::debug;
use termion::{
    event::Key,
    input::TermRead,
    raw::{IntoRawMode, RawTerminal},
    screen::AlternateScreen,
};

use crate::{
    controller::{Frame, Frontend, Mode, PromptKind},
    pos, Pos, Size, World,
};

pub use canvas::{Canvas, Style};
mod canvas;

const PANEL_WIDTH: i32 = 22;
const PROMPT_ROW: i32 = 10;

const HELP: &[(&str, &str)] = &[
    ("  . <dot> :", " iterate once   "),
    (" 1/2/../9 :", " iterate n times"),
    ("  w/a/s/d :", " move pointer   "),
    ("  <space> :", " toggle cell    "),
    ("  W/A/S/D :", " move screen    "),
    ("        p :", " play / pause   "),
    ("        C :", " clear and reset"),
    ("        R :", " randomize cells"),
    ("        V :", " save to file   "),
    ("        L :", " load from file "),
    ("        q :", " quit           "),
];
const HELP_WIDTH: i32 = 28;

/// column where the side panel starts, right of the board.
fn panel_x(size: Size) -> i32 {
    size.width * 2 + 3
}

/// Composes the whole screen for `frame`.
pub fn draw<W>(frame: &Frame<W>) -> Canvas
where
    W: World,
{
    let size = frame.world.size();
    let canvas_width = panel_x(size) + PANEL_WIDTH;
    let canvas_height = (size.height + 2).max(PROMPT_ROW + 5);
    let mut canvas = Canvas::new(canvas_width as usize, canvas_height as usize);

    draw_world(&mut canvas, frame);
    draw_panel(&mut canvas, frame);
    if frame.mode == Mode::HelpOverlay {
        draw_help(&mut canvas, size);
    }
    canvas
}

fn draw_world<W>(canvas: &mut Canvas, frame: &Frame<W>)
where
    W: World,
{
    let world = frame.world;
    for pos in world.size().positions() {
        let screen = cell_origin(pos);
        if world.get(pos).is_active() {
            canvas.text(screen, "██", Style::Bold);
        }
    }
    let Size { width, height } = world.size();
    canvas.frame(pos!(0, 0), pos!(2 * width + 1, height + 1));

    let cursor = world.size().wrap(frame.cursor);
    let style = if world.get(cursor).is_active() {
        Style::Inverted
    } else {
        Style::Faint
    };
    canvas.text(cell_origin(cursor), "┤├", style);
}

fn cell_origin(Pos { x, y }: Pos) -> Pos {
    pos!(2 * x + 1, y + 1)
}

fn draw_panel<W>(canvas: &mut Canvas, frame: &Frame<W>)
where
    W: World,
{
    let x = panel_x(frame.world.size());
    canvas.text(pos!(x, 2), "Iteration:", Style::Plain);
    canvas.text(pos!(x, 3), &frame.generation.to_string(), Style::Plain);
    if frame.autoplay.enabled {
        let playing = format!("Playing x{}", frame.autoplay.speed);
        canvas.text(pos!(x, 4), &playing, Style::Bold);
    }
    canvas.text(pos!(x, 5), "? for help", Style::Faint);

    if let Mode::TextPrompt(kind) = frame.mode {
        canvas.text(pos!(x, 7), "Filename", Style::Bold);
        let label = match kind {
            PromptKind::Load => "(load):",
            PromptKind::Save => "(save):",
        };
        canvas.text(pos!(x, 8), label, Style::Bold);
    }

    if let Some(message) = frame.message {
        canvas.text(pos!(x, PROMPT_ROW + 2), "Error!", Style::Bold);
        canvas.text(pos!(x, PROMPT_ROW + 3), message, Style::Plain);
    }
}

fn draw_help(canvas: &mut Canvas, size: Size) {
    let x = ((2 * size.width - HELP_WIDTH) / 2).max(0);
    let y = ((size.height - HELP.len() as i32) / 2).max(0);
    let bottom = y + HELP.len() as i32 + 1;
    canvas.fill(pos!(x, y), pos!(x + HELP_WIDTH, bottom));
    for (row, (keys, action)) in HELP.iter().enumerate() {
        let line = y + 1 + row as i32;
        canvas.text(pos!(x + 1, line), keys, Style::Bold);
        canvas.text(pos!(x + 12, line), action, Style::Plain);
    }
    canvas.frame(pos!(x, y), pos!(x + HELP_WIDTH, bottom));
}

/// Terminal frontend: raw mode on the alternate screen, keys read on a
/// separate thread so the controller can poll them.
pub struct TermView {
    out: AlternateScreen<RawTerminal<Stdout>>,
    keys: mpsc::Receiver<Key>,
    prompt_at: Pos,
}

impl TermView {
    pub fn open() -> io::Result<Self> {
        let mut out = AlternateScreen::from(stdout().into_raw_mode()?);
        write!(out, "{}{}", termion::clear::All, termion::cursor::Hide)?;
        out.flush()?;

        let (sender, keys) = mpsc::channel();
        thread::spawn(|| input_loop(sender));

        Ok(Self {
            out,
            keys,
            prompt_at: pos!(0, PROMPT_ROW),
        })
    }

    fn next_key(&mut self) -> io::Result<Key> {
        self.keys
            .recv()
            .map_err(|_| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    }

    fn echo(&mut self, line: &str) -> io::Result<()> {
        let Pos { x, y } = self.prompt_at;
        let goto = termion::cursor::Goto(x as u16 + 1, y as u16 + 1);
        let clear = termion::clear::UntilNewline;
        write!(self.out, "{goto}{clear}{line}")?;
        self.out.flush()
    }
}

fn input_loop(sender: mpsc::Sender<Key>) {
    for key in stdin().keys() {
        let Ok(key) = key else { break };
        if sender.send(key).is_err() {
            break;
        }
    }
    debug!("input thread done");
}

impl Frontend for TermView {
    fn render<W>(&mut self, frame: &Frame<W>) -> io::Result<()>
    where
        W: World,
    {
        self.prompt_at = pos!(panel_x(frame.world.size()), PROMPT_ROW);
        draw(frame).display(&mut self.out)
    }

    fn read_key(&mut self, blocking: bool) -> io::Result<Option<Key>> {
        if blocking {
            return self.next_key().map(Some);
        }
        match self.keys.try_recv() {
            Ok(key) => Ok(Some(key)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )),
        }
    }

    fn read_line(&mut self, kind: PromptKind) -> io::Result<Option<String>> {
        debug!("prompting for {kind:?}");
        write!(self.out, "{}", termion::cursor::Show)?;
        let mut line = String::new();
        let result = loop {
            self.echo(&line)?;
            match self.next_key()? {
                Key::Char('\n') => break Some(line),
                Key::Esc => break None,
                Key::Backspace => {
                    line.pop();
                }
                Key::Char(c) if !c.is_control() => line.push(c),
                _ => {}
            }
        };
        write!(self.out, "{}", termion::cursor::Hide)?;
        Ok(result)
    }
}

impl Drop for TermView {
    fn drop(&mut self) {
        let _ = write!(self.out, "{}{}", termion::style::Reset, termion::cursor::Show);
        let _ = self.out.flush();
    }
}
