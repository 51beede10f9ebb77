//! Convert HTML on stdin to JSX on stdout.
//!
//! ```text
//! echo '<div class="a" tab-index="0">hi</div>' | cargo run --example convert_stdin
//! ```
//!
//! Pass `--strict` to fail on tokenizer diagnostics.

use html2jsx::ConvertOptions;
use std::io::{self, BufReader, BufWriter, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut options = ConvertOptions::new();
    if std::env::args().skip(1).any(|arg| arg == "--strict") {
        options = options.strict();
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let input = BufReader::new(stdin.lock());
    let mut output = BufWriter::new(stdout.lock());

    if let Err(e) = html2jsx::convert_with_options(input, &mut output, &options) {
        let _ = output.flush();
        eprintln!("\nerror: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = output.flush() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
