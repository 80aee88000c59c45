//! Interactive beam entry.
//!
//! Reads the span, a name and any number of loads line by line. Every load
//! is handed to the core as soon as it is entered, so a load that lies off
//! the span is reported and re-asked instead of aborting the session.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use beam_core::{Beam, PointLoadInput, UdlInput, DEFAULT_BEAM_NAME};
use tracing::debug;

/// Line-oriented prompt over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Ask until the answer parses as a valid span length.
    fn ask_beam(&mut self) -> Result<Beam> {
        loop {
            let Some(line) = self.ask("Beam length: ")? else {
                bail!("input ended before a beam length was entered");
            };
            let length = match parse_numbers::<1>(&line) {
                Ok([length]) => length,
                Err(msg) => {
                    self.say(&msg)?;
                    continue;
                }
            };

            let name = self
                .ask(&format!("Beam name [{DEFAULT_BEAM_NAME}]: "))?
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_BEAM_NAME.to_string());

            match Beam::new(length, name) {
                Ok(beam) => return Ok(beam),
                Err(err) => self.say(&format!("Error: {err}"))?,
            }
        }
    }

    /// Collect point loads until a blank line or end of input.
    fn ask_point_loads(&mut self, beam: &mut Beam) -> Result<()> {
        self.say("Point loads as `position magnitude`, blank line to finish:")?;
        while let Some(line) = self.ask("  point> ")? {
            if line.is_empty() {
                break;
            }
            match parse_numbers::<2>(&line) {
                Ok([position, magnitude]) => {
                    let input = PointLoadInput { position, magnitude };
                    if let Err(err) = beam.add_point_load_input(input) {
                        self.say(&format!("Error: {err}"))?;
                    }
                }
                Err(msg) => self.say(&msg)?,
            }
        }
        Ok(())
    }

    /// Collect UDLs until a blank line or end of input.
    fn ask_udls(&mut self, beam: &mut Beam) -> Result<()> {
        self.say("UDLs as `start end intensity`, blank line to finish:")?;
        while let Some(line) = self.ask("  udl> ")? {
            if line.is_empty() {
                break;
            }
            match parse_numbers::<3>(&line) {
                Ok([start, end, intensity]) => {
                    let input = UdlInput { start, end, intensity };
                    if let Err(err) = beam.add_udl_input(input) {
                        self.say(&format!("Error: {err}"))?;
                    }
                }
                Err(msg) => self.say(&msg)?,
            }
        }
        Ok(())
    }

    /// Run the whole dialogue and return the populated beam.
    pub fn read_beam(&mut self) -> Result<Beam> {
        let mut beam = self.ask_beam()?;
        self.ask_point_loads(&mut beam)?;
        self.ask_udls(&mut beam)?;
        debug!(
            name = beam.name(),
            point_loads = beam.point_loads().len(),
            udls = beam.udls().len(),
            "interactive beam entered"
        );
        Ok(beam)
    }
}

/// Split a line into exactly `N` numbers separated by whitespace or commas.
fn parse_numbers<const N: usize>(line: &str) -> Result<[f64; N], String> {
    let fields: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    if fields.len() != N {
        return Err(format!("Expected {N} number(s), got {}", fields.len()));
    }

    let mut values = [0.0; N];
    for (slot, field) in values.iter_mut().zip(&fields) {
        *slot = field
            .parse()
            .map_err(|_| format!("Not a number: '{field}'"))?;
    }
    Ok(values)
}
