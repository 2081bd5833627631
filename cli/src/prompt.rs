// Interactive prompts for the `add` mode.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use meterlog_kernel::log::{parse_date, parse_kwh, Reading};

pub const DATE_PROMPT: &str = "Enter date (DD-MM-YYYY): ";
pub const KWH_PROMPT: &str = "Enter kWh reading: ";

/// Print `label`, then read one line of input without its line ending.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("no answer to `{}`", label.trim_end())
        ));
    }
    Ok(line.trim().to_string())
}

/// Ask for a date and a reading. Each answer is decoded as soon as it is
/// given, so a bad date aborts before the reading is asked for.
pub fn read_reading<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Reading> {
    let date = ask(input, output, DATE_PROMPT)?;
    let date = parse_date(&date).context("could not read the date")?;

    let value = ask(input, output, KWH_PROMPT)?;
    let value = parse_kwh(&value).context("could not read the kWh reading")?;

    Ok(Reading::new(date, value))
}
