use std::{
    io::{self, Write},
    path::PathBuf,
};

/// Ask the user for the input CSV file.
///
/// Returns `None` if the selection was left empty. This is the only
/// interactive seam of the program; the pipeline itself never touches
/// stdin.
pub fn select_input_file() -> io::Result<Option<PathBuf>> {
    print!("Input CSV file: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let path = line.trim();
    if path.is_empty() {
        return Ok(None);
    }
    Ok(Some(PathBuf::from(path)))
}
