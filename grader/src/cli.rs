use clap::Parser;
use std::process;

/// Parses process arguments into `T`.
///
/// Usage errors exit with status 1; `--help` and `--version` exit with 0.
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            process::exit(1);
        }
        Err(err) => err.exit(),
    }
}
