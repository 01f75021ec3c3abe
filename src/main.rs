use itertools::Itertools;
use std::io::{stdin, stdout, BufRead, Write};
use std::process::exit;

#[derive(Debug)]
struct Error(String);

impl<T: ToString> From<T> for Error {
    fn from(error: T) -> Self {
        Error(error.to_string())
    }
}

fn read_number(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<i64, Error> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    // A zero-byte read means the input ended before a line arrived.
    if input.read_line(&mut line)? == 0 {
        return Err(Error("unexpected end of input".to_string()));
    }

    Ok(line.trim().parse()?)
}

fn count_up(input: &mut impl BufRead, output: &mut impl Write) -> Result<(), Error> {
    let n = read_number(input, output, "Enter n: ")?;

    if n > 0 {
        writeln!(output, "{}", (1..=n).join(" "))?;
    }

    Ok(())
}

fn count_down(input: &mut impl BufRead, output: &mut impl Write) -> Result<(), Error> {
    let m = read_number(input, output, "Enter m: ")?;

    if m > 0 {
        writeln!(output, "{}", (1..=m).rev().join(" "))?;
    }

    Ok(())
}

fn echo_until_zero(input: &mut impl BufRead, output: &mut impl Write) -> Result<(), Error> {
    loop {
        let num = read_number(input, output, "Enter a number (0 to stop): ")?;

        if num == 0 {
            break;
        }

        writeln!(output, "You entered: {}", num)?;
    }

    Ok(())
}

fn run(input: &mut impl BufRead, output: &mut impl Write) -> Result<(), Error> {
    count_up(input, output)?;
    writeln!(output)?;

    count_down(input, output)?;
    writeln!(output)?;

    echo_until_zero(input, output)
}

fn main() {
    if let Err(Error(message)) = run(&mut stdin().lock(), &mut stdout()) {
        eprintln!("Input error: {}", message);
        exit(1);
    }
}
