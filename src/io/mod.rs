/*!
# IO

Utilities for reading and writing route networks from and to files.

## Formats

Currently supported:
- **RouteList**: the vertex count, one display name per node and one line per logical route
  `from to weight cost` with 1-based indices. See [`route_list`] for details.

## Traits

To generalize over reading/writing:
- [`NetworkReader`] and [`NetworkWriter`] are implemented by configurable readers and writers
  for a specific format.
- Shorthand traits such as [`RouteListRead`] and [`RouteListWrite`] read/write a
  [`RouteNetwork`](crate::network::RouteNetwork) with default settings.
*/

pub mod route_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Result, Write},
    path::Path,
};

use crate::network::RouteNetwork;

pub use route_list::*;

/// Trait for types that can read route networks in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait NetworkReader {
    /// Reads a network from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a network in the expected format.
    fn try_read_network<R>(&self, reader: R) -> Result<RouteNetwork>
    where
        R: BufRead;

    /// Reads a network from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a network in the expected format.
    fn try_read_network_file<P>(&self, path: P) -> Result<RouteNetwork>
    where
        P: AsRef<Path>,
    {
        self.try_read_network(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write route networks in a specific format.
pub trait NetworkWriter {
    /// Writes the given network to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_network<W>(&self, network: &RouteNetwork, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given network to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_network_file<P>(&self, network: &RouteNetwork, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_network(network, &mut writer)?;
        writer.flush()
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr, $line : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(io_error!(
                std::io::ErrorKind::InvalidData,
                format!("Premature end of line {} when parsing {}.", $line, $name)
            ));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    std::io::ErrorKind::InvalidData,
                    format!("Invalid value {next:?} in line {}. Cannot parse {}.", $line, $name)
                ));
            }
        }
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
