//! Parser for the fixed-width text digit format.
//!
//! A record is a `side x side` bitmap, one text line per image row with one
//! character per pixel, followed by a label line holding the class index:
//!
//! ```text
//! 00000000000001111000000000000000
//! 00000000000011111110000000000000
//! ...                               (side lines in total)
//!  3
//! ```
//!
//! Pixels are decimal digits read as their value. Characters past `side` on
//! a bitmap line are ignored. Blank lines between records are skipped.

use std::path::Path;

use anyhow::{bail, Context, Result};
use log::debug;

use crate::data::dataset::{one_hot, Sample};

/// Parses every record in `text` into samples with `side * side` inputs and
/// one-hot targets of length `classes`.
pub fn parse_digits(text: &str, side: usize, classes: usize) -> Result<Vec<Sample>> {
    if side == 0 || classes == 0 {
        bail!("side and classes must be positive, got side={} classes={}", side, classes);
    }

    let mut lines = text.lines().enumerate().peekable();
    let mut samples = Vec::new();

    loop {
        while matches!(lines.peek(), Some((_, l)) if l.trim().is_empty()) {
            lines.next();
        }
        if lines.peek().is_none() {
            break;
        }

        let mut input = Vec::with_capacity(side * side);
        for _ in 0..side {
            let (idx, line) = lines
                .next()
                .with_context(|| format!("record {} ends before its {} bitmap rows", samples.len() + 1, side))?;
            let row: Vec<char> = line.chars().take(side).collect();
            if row.len() < side {
                bail!("line {}: expected {} pixels, found {}", idx + 1, side, row.len());
            }
            for (col, c) in row.into_iter().enumerate() {
                let value = c
                    .to_digit(10)
                    .with_context(|| format!("line {}, column {}: invalid pixel {:?}", idx + 1, col + 1, c))?;
                input.push(value as f64);
            }
        }

        let (idx, line) = lines
            .next()
            .with_context(|| format!("record {} is missing its label line", samples.len() + 1))?;
        let class: usize = line
            .trim()
            .parse()
            .with_context(|| format!("line {}: invalid label {:?}", idx + 1, line.trim()))?;
        if class >= classes {
            bail!("line {}: label {} out of range for {} classes", idx + 1, class, classes);
        }

        samples.push(Sample::new(input, one_hot(class, classes)));
    }

    debug!("parsed {} digit samples ({}x{} pixels)", samples.len(), side, side);
    Ok(samples)
}

/// Reads and parses a digit file from disk.
pub fn load_digits(path: &Path, side: usize, classes: usize) -> Result<Vec<Sample>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read dataset file '{}'", path.display()))?;
    parse_digits(&text, side, classes)
        .with_context(|| format!("malformed dataset file '{}'", path.display()))
}
