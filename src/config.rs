use std::path::PathBuf;

use clap::Parser;

use crate::{
    error::{Error, Result},
    Size,
};

pub const DEFAULT_ROWS: u16 = 16;
pub const DEFAULT_COLS: u16 = 48;
pub const DEFAULT_SPEED: u8 = 2;

/// columns taken by the side panel, in grid cells.
const PANEL_CELLS: i32 = 10;

#[derive(Parser, Debug, Clone)]
#[command(name = "golterm")]
#[command(
    about = "Conway's game of life on a wrap-around board, in the terminal",
    long_about = None
)]
pub struct Args {
    /// Terminal area to use, in rows and columns
    #[arg(
        long,
        num_args = 2,
        value_names = ["ROWS", "COLS"],
        default_values_t = [DEFAULT_ROWS, DEFAULT_COLS]
    )]
    pub winsize: Vec<u16>,

    /// Start with autoplay enabled
    #[arg(long, default_value_t = false)]
    pub play: bool,

    /// Initial autoplay speed
    #[arg(
        long,
        default_value_t = DEFAULT_SPEED,
        value_parser = clap::value_parser!(u8).range(1..=9)
    )]
    pub speed: u8,

    /// Pattern file to start from
    #[arg(long, value_name = "FILE")]
    pub load: Option<PathBuf>,

    /// Seed for the randomize command
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Everything fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: Size,
    pub play: bool,
    pub speed: u8,
    pub load: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let (rows, cols) = match args.winsize[..] {
            [rows, cols] => (rows, cols),
            _ => return Err(Error::Config("--winsize takes ROWS and COLS".into())),
        };
        let size = board_size(rows, cols)?;
        if !(1..=9).contains(&args.speed) {
            return Err(Error::Config(format!("speed {} is not in 1..=9", args.speed)));
        }
        Ok(Self {
            size,
            play: args.play,
            speed: args.speed,
            load: args.load,
            seed: args.seed,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: Size::new(DEFAULT_COLS as i32 / 2 - PANEL_CELLS, DEFAULT_ROWS as i32 - 2),
            play: false,
            speed: DEFAULT_SPEED,
            load: None,
            seed: None,
        }
    }
}

/// board dimensions that fit a terminal area of `rows` by `cols`.
///
/// Terminal coordinates are `u16`, which keeps every board position and
/// its screen column well inside `i32`.
pub fn board_size(rows: u16, cols: u16) -> Result<Size> {
    let width = cols as i32 / 2 - PANEL_CELLS;
    let height = rows as i32 - 2;
    if width < 1 || height < 1 {
        return Err(Error::Config(format!(
            "a {rows}x{cols} window leaves no room for the board"
        )));
    }
    Ok(Size::new(width, height))
}
