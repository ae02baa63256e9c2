use std::io::{self, BufRead, Write};

/// Shows `prompt` on stdout and reads the answer from stdin.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    prompted_line(&mut io::stdin().lock(), &mut io::stdout(), prompt)
}

/// `None` once `reader` has nothing left.
fn prompted_line(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(writer, "{prompt}")?;
    writer.flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
