#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use ant_vrp_core::prelude::GenericError;
use std::io::prelude::*;
use std::io::{BufReader, Read};

/// Reads a single line into the buffer, returns amount of bytes read (zero on end of input).
pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> Result<usize, GenericError> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| err.to_string().into())
}

/// Reads the next line which is not blank, fails on end of input.
pub(crate) fn read_non_empty_line<R: Read>(
    reader: &mut BufReader<R>,
    buffer: &mut String,
) -> Result<(), GenericError> {
    loop {
        if read_line(reader, buffer)? == 0 {
            return Err("unexpected end of input".into());
        }

        if !buffer.trim().is_empty() {
            return Ok(());
        }
    }
}

/// Parses a number which might be written as a float (e.g. `28.00000`) and rounds it to an integer.
pub(crate) fn parse_int(data: &str, err_msg: &str) -> Result<i64, GenericError> {
    data.trim()
        .parse::<f64>()
        // NOTE observed that some input files might have coordinates like 28.00000
        .map(|value| value.round() as i64)
        .map_err(|err| format!("{err_msg}: '{err}'").into())
}

/// Parses a float number.
pub(crate) fn parse_float(data: &str, err_msg: &str) -> Result<f64, GenericError> {
    data.trim().parse::<f64>().map_err(|err| format!("{err_msg}: '{err}'").into())
}
