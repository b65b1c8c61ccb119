//! Interactive and generated sources of augmented matrices.
use std::io::{BufRead, Write};

use gauss::{parse::parse_row, AugmentedMatrix};
use log::debug;
use nalgebra::DMatrix;
use rand::{distributions::Uniform, Rng};

use crate::config::Config;

/// Writes `message` and reads one line, without its line ending. `None` at end of input.
pub fn prompt<R, W>(input: &mut R, out: &mut W, message: &str) -> anyhow::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_owned()))
}

/// Asks for the number of unknowns until a value within the configured bound is given.
pub fn read_size<R, W>(input: &mut R, out: &mut W, config: &Config) -> anyhow::Result<Option<usize>>
where
    R: BufRead,
    W: Write,
{
    loop {
        let message = format!("Number of unknowns (1-{}): ", config.max_size);
        let Some(line) = prompt(input, out, &message)? else {
            return Ok(None);
        };

        match line.trim().parse::<usize>() {
            Ok(size) => match config.check_size(size) {
                Ok(size) => return Ok(Some(size)),
                Err(e) => writeln!(out, "{}", e)?,
            },
            Err(_) => writeln!(out, "'{}' is not a number", line.trim())?,
        }
    }
}

/// Reads a system row by row. Rows are tokenised like matrix files; a malformed row is reported
/// and asked for again.
pub fn read_manual<R, W>(
    input: &mut R,
    out: &mut W,
    config: &Config,
) -> anyhow::Result<Option<AugmentedMatrix<f64>>>
where
    R: BufRead,
    W: Write,
{
    let Some(n) = read_size(input, out, config)? else {
        return Ok(None);
    };

    writeln!(
        out,
        "Enter {} rows of {} values: coefficients, then the right-hand side",
        n,
        n + 1
    )?;
    let mut rows = Vec::with_capacity(n);
    while rows.len() < n {
        let Some(line) = prompt(input, out, &format!("Row {}: ", rows.len() + 1))? else {
            return Ok(None);
        };

        match parse_row(&line, rows.len()) {
            Ok(values) if values.len() == n + 1 => rows.push(values),
            Ok(values) => writeln!(out, "Expected {} values, got {}", n + 1, values.len())?,
            Err(e) => writeln!(out, "{:#}", anyhow::Error::from(e))?,
        }
    }

    Ok(Some(AugmentedMatrix::from_rows(&rows)?))
}

/// A `size`×`size+1` system of integer-valued entries drawn uniformly from [0, 10).
pub fn random_system<G: Rng>(rng: &mut G, size: usize) -> Result<AugmentedMatrix<f64>, gauss::Error> {
    let dist = Uniform::new(0u8, 10);
    let matrix = DMatrix::from_fn(size, size + 1, |_, _| f64::from(rng.sample(dist)));
    debug!("random_system: generated {}x{}", size, size + 1);
    AugmentedMatrix::new(matrix)
}
