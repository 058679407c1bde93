//! Interactive area selection
//!
//! Reads coordinates until they describe a rectangle inside the grid. The
//! simulation core never calls into this module.

use std::io::{self, BufRead, Write};

use crate::analysis::Rect;

/// Prompts for `x1 y1` and `x2 y2`, retrying on bad input. `None` at end of input.
pub fn read_area<R, W>(
    input: &mut R,
    output: &mut W,
    width: usize,
    height: usize,
) -> io::Result<Option<Rect>>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "Enter the coordinates for area analysis (x1, y1) to (x2, y2):"
    )?;
    loop {
        let Some(first) = ask(input, output, "x1, y1: ")? else {
            return Ok(None);
        };
        let Some(second) = ask(input, output, "x2, y2: ")? else {
            return Ok(None);
        };

        if let (Some((x1, y1)), Some((x2, y2))) = (parse_pair(&first), parse_pair(&second)) {
            let rect = Rect::new(x1, y1, x2, y2);
            if rect.fits(width, height) {
                return Ok(Some(rect));
            }
        }
        writeln!(
            output,
            "Invalid input. Please enter valid coordinates within the grid dimensions."
        )?;
    }
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn parse_pair(line: &str) -> Option<(usize, usize)> {
    let mut values = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse::<usize>);
    let a = values.next()?.ok()?;
    let b = values.next()?.ok()?;
    if values.next().is_some() {
        return None;
    }
    Some((a, b))
}
