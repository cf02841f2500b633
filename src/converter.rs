use std::fmt;
use std::io::{self, BufRead, Write};
use std::num::ParseFloatError;

use tracing::debug;

/// Result of one conversion: the value read and the value derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub celsius: f64,
    pub fahrenheit: f64,
}

#[derive(Debug)]
pub enum ConvertError {
    /// Reading from the input stream failed.
    Input(io::Error),
    /// The stream ended before a temperature was supplied.
    MissingToken,
    /// The token read is not a floating-point number.
    Parse {
        token: String,
        source: ParseFloatError,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Input(e) => write!(f, "failed to read from input: {e}"),
            ConvertError::MissingToken => {
                write!(f, "input ended before a temperature was supplied")
            }
            ConvertError::Parse { token, .. } => {
                write!(f, "'{token}' is not a valid temperature")
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Input(e) => Some(e),
            ConvertError::MissingToken => None,
            ConvertError::Parse { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for ConvertError {
    fn from(e: io::Error) -> Self {
        ConvertError::Input(e)
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Reads the first whitespace-delimited token from `input` and parses it
/// as a Celsius temperature.
/// # Arguments
/// * `input` - The stream to read the token from
/// # Returns
/// The parsed value, or a ConvertError if the stream ends first or the
/// token is not a number
pub fn read_celsius<R: BufRead>(input: &mut R) -> Result<f64, ConvertError> {
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(ConvertError::MissingToken);
        }

        // Blank lines count as leading whitespace, keep reading
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };

        return token.parse().map_err(|source| ConvertError::Parse {
            token: token.to_string(),
            source,
        });
    }
}

/// Prompts for a Celsius temperature on `output`, reads it from `input`,
/// prints the Fahrenheit equivalent and returns both values.
///
/// No range check is applied: values below absolute zero are converted
/// and printed like any other.
pub fn run<R, W>(input: &mut R, output: &mut W) -> Result<Conversion, ConvertError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "\nEnter the temperature in Celsius: ")?;
    output.flush()?;

    let celsius = read_celsius(input)?;
    let fahrenheit = celsius_to_fahrenheit(celsius);
    debug!("converted {celsius} Celsius to {fahrenheit} Fahrenheit");

    writeln!(output, "\n{celsius:.2} Celsius = {fahrenheit:.2} Fahrenheit\n")?;
    output.flush()?;

    Ok(Conversion {
        celsius,
        fahrenheit,
    })
}
