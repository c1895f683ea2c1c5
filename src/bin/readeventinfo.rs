use readinfo::EventInfo;
use std::process::ExitCode;

fn main() -> ExitCode {
    readinfo::cli::main_for::<EventInfo>()
}
