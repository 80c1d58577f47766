use crate::utils::error::{Result, SmokeError};
use std::io::{BufRead, Write};

pub const ADDRESS_PROMPT: &str =
    "Please enter the web address you want to test (e.g.: 192.168.11.23): ";

pub fn prompt_server_address<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String> {
    writeln!(writer, "{}", ADDRESS_PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// 有給位址就直接用，沒有的話詢問使用者
pub fn resolve_server_address<R: BufRead, W: Write>(
    given: Option<&str>,
    reader: &mut R,
    writer: &mut W,
) -> Result<String> {
    if let Some(address) = given.map(str::trim).filter(|a| !a.is_empty()) {
        return Ok(address.to_string());
    }

    let address = prompt_server_address(reader, writer)?;
    if address.is_empty() {
        return Err(SmokeError::MissingConfigError {
            field: "server_address".to_string(),
        });
    }
    Ok(address)
}
