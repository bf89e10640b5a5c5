use anyhow::Result;
use std::io::{BufRead, Write};

use crate::trip::{Budget, TripDuration, TripRequest};

use super::args::PlanArgs;

/// Build a trip request from flags, prompting for whatever is missing when `interactive`.
///
/// Non-interactive runs leave missing text fields empty so validation can report them.
pub(crate) fn collect_request<R, W>(
    args: PlanArgs,
    interactive: bool,
    input: &mut R,
    output: &mut W,
) -> Result<TripRequest>
where
    R: BufRead,
    W: Write,
{
    let origin = text_field(args.origin, interactive, input, output, "📍 Starting Location")?;
    let destination = text_field(args.destination, interactive, input, output, "🗺️  Destination")?;

    let budget = match args.budget {
        Some(budget) => budget,
        None if interactive => prompt_budget(input, output)?,
        None => Budget::default(),
    };

    let duration = match args.duration {
        Some(days) => TripDuration::new(days)?,
        None if interactive => prompt_duration(input, output)?,
        None => TripDuration::default(),
    };

    let purpose = text_field(args.purpose, interactive, input, output, "🎯 Purpose of Trip")?;
    let preferences = text_field(
        args.preferences,
        interactive,
        input,
        output,
        "❤️  Your Preferences (e.g., adventure, food, history)",
    )?;

    Ok(TripRequest {
        origin,
        destination,
        budget,
        duration,
        purpose,
        preferences,
    })
}

fn text_field<R: BufRead, W: Write>(
    value: Option<String>,
    interactive: bool,
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None if interactive => prompt_line(input, output, label),
        None => Ok(String::new()),
    }
}

/// `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{label}: ")?;
    output.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}

fn prompt_budget<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Budget> {
    writeln!(output, "\n💰 Select Budget:")?;
    for (idx, budget) in Budget::ALL.iter().enumerate() {
        writeln!(output, "  {}. {}", idx + 1, budget)?;
    }

    loop {
        write!(output, "Choose 1-{} (default: {}): ", Budget::ALL.len(), Budget::default())?;
        output.flush()?;

        let Some(choice) = read_line(input)? else {
            return Ok(Budget::default());
        };
        if choice.is_empty() {
            return Ok(Budget::default());
        }

        match choice.parse::<usize>() {
            Ok(num) if (1..=Budget::ALL.len()).contains(&num) => return Ok(Budget::ALL[num - 1]),
            _ => match choice.parse::<Budget>() {
                Ok(budget) => return Ok(budget),
                Err(err) => writeln!(output, "❌ {err}")?,
            },
        }
    }
}

fn prompt_duration<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<TripDuration> {
    let default = TripDuration::default();
    loop {
        write!(output, "📅 Trip Duration in days, 1-30 (default: {default}): ")?;
        output.flush()?;

        let Some(raw) = read_line(input)? else {
            return Ok(default);
        };
        if raw.is_empty() {
            return Ok(default);
        }

        match raw.parse::<TripDuration>() {
            Ok(duration) => return Ok(duration),
            Err(err) => writeln!(output, "❌ {err}")?,
        }
    }
}
