use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::{InsultError, Result};

/// Reads a text file and returns its whitespace-separated tokens.
///
/// - Reads the entire file into memory
/// - Splits on any run of whitespace, newlines included
pub(crate) fn read_tokens<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|e| InsultError::file_access(path, e))?;
	Ok(contents.split_whitespace().map(str::to_owned).collect())
}

/// Writes each item as its own `\n`-terminated line, truncating the file.
///
/// The file is not replaced atomically: a failure mid-write leaves
/// whatever was already written.
pub(crate) fn write_lines<P, I, S>(filename: P, lines: I) -> Result<()>
where
	P: AsRef<Path>,
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let path = filename.as_ref();
	let file = File::create(path).map_err(|e| InsultError::file_access(path, e))?;
	let mut writer = BufWriter::new(file);
	for line in lines {
		writeln!(writer, "{}", line.as_ref()).map_err(|e| InsultError::file_access(path, e))?;
	}
	writer.flush().map_err(|e| InsultError::file_access(path, e))
}
