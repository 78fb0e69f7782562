use std::{io, thread, time::Duration};

use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};
use termion::event::Key;

use crate::{
    config::Config,
    pattern, pos,
    sim::{next_generation, randomize, translate},
    Pos, World,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub fn offset(self) -> Pos {
        match self {
            Dir::Up => pos!(0, -1),
            Dir::Down => pos!(0, 1),
            Dir::Left => pos!(-1, 0),
            Dir::Right => pos!(1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Step,
    Digit(u8),
    Help,
    Move(Dir),
    Toggle,
    Pan(Dir),
    Clear,
    Randomize,
    Save,
    Load,
    ToggleAutoplay,
    Quit,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        let command = match key {
            Key::Char('.') => Command::Step,
            Key::Char(c @ '1'..='9') => Command::Digit(c as u8 - b'0'),
            Key::Char('?') => Command::Help,
            Key::Char('w') | Key::Up => Command::Move(Dir::Up),
            Key::Char('s') | Key::Down => Command::Move(Dir::Down),
            Key::Char('a') | Key::Left => Command::Move(Dir::Left),
            Key::Char('d') | Key::Right => Command::Move(Dir::Right),
            Key::Char(' ') => Command::Toggle,
            Key::Char('W') => Command::Pan(Dir::Up),
            Key::Char('S') => Command::Pan(Dir::Down),
            Key::Char('A') => Command::Pan(Dir::Left),
            Key::Char('D') => Command::Pan(Dir::Right),
            Key::Char('C') => Command::Clear,
            Key::Char('R') => Command::Randomize,
            Key::Char('V') => Command::Save,
            Key::Char('L') => Command::Load,
            Key::Char('p') => Command::ToggleAutoplay,
            Key::Char('q') => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Load,
    Save,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Editing,
    AutoPlaying,
    HelpOverlay,
    TextPrompt(PromptKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autoplay {
    pub enabled: bool,
    pub speed: u8,
}

impl Autoplay {
    /// Steps taken per cycle on top of the implicit one.
    ///
    /// Speeds below 6 slow down by pausing instead, see [`Autoplay::pause`].
    pub fn extra_steps(&self) -> u32 {
        if self.speed >= 6 {
            2 * (self.speed as u32 - 6)
        } else {
            0
        }
    }

    pub fn pause(&self) -> Duration {
        if self.speed < 6 {
            Duration::from_secs(1) / (self.speed.max(1) as u32 * 5)
        } else {
            Duration::ZERO
        }
    }
}

/// What a frontend needs to draw one screen.
pub struct Frame<'a, W> {
    pub world: &'a W,
    pub cursor: Pos,
    pub generation: u64,
    pub autoplay: Autoplay,
    pub mode: Mode,
    pub message: Option<&'a str>,
}

/// The display adapter and input source the controller drives.
pub trait Frontend {
    fn render<W>(&mut self, frame: &Frame<W>) -> io::Result<()>
    where
        W: World;

    /// `Ok(None)` means no key was pending, only possible when not blocking.
    fn read_key(&mut self, blocking: bool) -> io::Result<Option<Key>>;

    /// `Ok(None)` means the prompt was cancelled.
    fn read_line(&mut self, kind: PromptKind) -> io::Result<Option<String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue(Duration),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlay {
    Help,
    Prompt(PromptKind),
}

pub struct Controller<W>
where
    W: World,
{
    world: W,
    cursor: Pos,
    generation: u64,
    autoplay: Autoplay,
    overlay: Option<Overlay>,
    message: Option<String>,
    rng: StdRng,
}

impl<W> Controller<W>
where
    W: World,
{
    pub fn new(config: &Config) -> Self {
        let world = match &config.load {
            Some(path) => pattern::load_file(path, config.size).unwrap_or_else(|err| {
                warn!("could not load {}: {err}, starting empty", path.display());
                W::empty(config.size)
            }),
            None => W::empty(config.size),
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            world,
            cursor: pos!(0, 0),
            generation: 0,
            autoplay: Autoplay {
                enabled: config.play,
                speed: config.speed,
            },
            overlay: None,
            message: None,
            rng,
        }
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn autoplay(&self) -> Autoplay {
        self.autoplay
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn mode(&self) -> Mode {
        match self.overlay {
            Some(Overlay::Help) => Mode::HelpOverlay,
            Some(Overlay::Prompt(kind)) => Mode::TextPrompt(kind),
            None if self.autoplay.enabled => Mode::AutoPlaying,
            None => Mode::Editing,
        }
    }

    pub fn frame(&self) -> Frame<'_, W> {
        Frame {
            world: &self.world,
            cursor: self.cursor,
            generation: self.generation,
            autoplay: self.autoplay,
            mode: self.mode(),
            message: self.message(),
        }
    }

    /// One render, read, transition round. The returned pause is for the
    /// caller to sleep before the next round.
    pub fn cycle<F>(&mut self, frontend: &mut F) -> io::Result<Flow>
    where
        F: Frontend,
    {
        frontend.render(&self.frame())?;

        match self.overlay.take() {
            Some(Overlay::Help) => {
                frontend.read_key(true)?;
                return Ok(Flow::Continue(Duration::ZERO));
            }
            Some(Overlay::Prompt(kind)) => {
                if let Some(line) = frontend.read_line(kind)? {
                    self.finish_prompt(kind, line.trim());
                }
                return Ok(Flow::Continue(Duration::ZERO));
            }
            None => {}
        }

        if let Some(key) = frontend.read_key(!self.autoplay.enabled)? {
            self.message = None;
            if let Some(command) = Command::from_key(key) {
                if self.apply(command) == Flow::Quit {
                    return Ok(Flow::Quit);
                }
            }
        }

        if self.autoplay.enabled {
            self.step(1 + self.autoplay.extra_steps());
            return Ok(Flow::Continue(self.autoplay.pause()));
        }
        Ok(Flow::Continue(Duration::ZERO))
    }

    pub fn apply(&mut self, command: Command) -> Flow {
        let size = self.world.size();
        match command {
            Command::Step => self.step(1),
            Command::Digit(n) if self.autoplay.enabled => {
                debug!("autoplay speed {n}");
                self.autoplay.speed = n;
            }
            Command::Digit(n) => self.step(n as u32),
            Command::Help => self.overlay = Some(Overlay::Help),
            Command::Move(dir) => self.cursor = size.wrap(self.cursor + dir.offset()),
            Command::Toggle => {
                let cell = self.world.get(self.cursor);
                self.world.set(self.cursor, cell.toggled());
            }
            Command::Pan(dir) => self.world = translate(&self.world, -dir.offset()),
            Command::Clear => {
                info!("clearing the board");
                self.world = W::empty(size);
                self.generation = 0;
            }
            Command::Randomize => {
                info!("randomizing the board");
                randomize(&mut self.world, &mut self.rng);
                self.generation = 0;
            }
            Command::Save => self.overlay = Some(Overlay::Prompt(PromptKind::Save)),
            Command::Load => self.overlay = Some(Overlay::Prompt(PromptKind::Load)),
            Command::ToggleAutoplay => {
                self.autoplay.enabled = !self.autoplay.enabled;
                info!(
                    "autoplay {} at speed {}",
                    if self.autoplay.enabled { "on" } else { "off" },
                    self.autoplay.speed
                );
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue(Duration::ZERO)
    }

    fn step(&mut self, times: u32) {
        for _ in 0..times {
            self.world = next_generation(&self.world);
            self.generation += 1;
        }
    }

    fn finish_prompt(&mut self, kind: PromptKind, path: &str) {
        let result = match kind {
            PromptKind::Save => pattern::save_file(&self.world, path),
            PromptKind::Load => pattern::load_file(path, self.world.size()).map(|world| {
                self.world = world;
                self.generation = 0;
            }),
        };
        if let Err(err) = result {
            warn!("{kind:?} {path:?} failed: {err}");
            self.message = Some(err.to_string());
        }
    }
}

/// Drives `controller` until it quits.
pub fn run<W, F>(controller: &mut Controller<W>, frontend: &mut F) -> io::Result<()>
where
    W: World,
    F: Frontend,
{
    loop {
        match controller.cycle(frontend)? {
            Flow::Quit => return Ok(()),
            Flow::Continue(pause) if !pause.is_zero() => thread::sleep(pause),
            Flow::Continue(_) => {}
        }
    }
}
