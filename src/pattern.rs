//! Plain text patterns.
//!
//! ```text
//! <width>
//! <height>
//! <height rows of width chars, '#' alive, ' ' dead>
//! ```
//!
//! Decoding is lenient past the header: short or missing rows read as dead
//! cells and anything beyond the declared extent is ignored.

use std::{fs, path::Path};

use log::{debug, info};

use crate::{
    error::{Error, Result},
    pos, Cell, Pos, Size, World,
};

pub const ALIVE: char = '#';
pub const DEAD: char = ' ';

pub fn encode<W>(world: &W) -> String
where
    W: World,
{
    let Size { width, height } = world.size();
    let mut result = format!("{width}\n{height}\n");
    for y in 0..height {
        for x in 0..width {
            result.push(if world.get(pos!(x, y)).is_active() {
                ALIVE
            } else {
                DEAD
            });
        }
        result.push('\n');
    }
    result
}

/// reads `text` into a world of `size`, whatever size the pattern declares.
pub fn decode<W>(text: &str, size: Size) -> Result<W>
where
    W: World,
{
    let mut lines = text.lines();
    let declared_width = parse_dimension(lines.next(), 1)?;
    let declared_height = parse_dimension(lines.next(), 2)?;
    let rows: Vec<Vec<char>> = lines
        .take(declared_height)
        .map(|line| line.chars().take(declared_width).collect())
        .collect();

    Ok(W::from_fn(size, |Pos { x, y }| {
        let alive = rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .is_some_and(|&c| c != DEAD);
        Cell::from(alive)
    }))
}

/// negative dimensions are an empty extent, not an error.
fn parse_dimension(line: Option<&str>, number: usize) -> Result<usize> {
    let line = line.unwrap_or_default();
    let value: i64 = line.trim().parse().map_err(|_| Error::Format {
        line: number,
        found: line.to_string(),
    })?;
    Ok(usize::try_from(value).unwrap_or(0))
}

pub fn save_file<W>(world: &W, path: impl AsRef<Path>) -> Result<()>
where
    W: World,
{
    let path = path.as_ref();
    fs::write(path, encode(world))?;
    info!("saved {} live cells to {}", world.population(), path.display());
    Ok(())
}

pub fn load_file<W>(path: impl AsRef<Path>, size: Size) -> Result<W>
where
    W: World,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let world: W = decode(&text, size)?;
    debug!("decoded {} into {}x{}", path.display(), size.width, size.height);
    info!("loaded {} live cells from {}", world.population(), path.display());
    Ok(world)
}
