use readinfo::CrashInfo;
use std::process::ExitCode;

fn main() -> ExitCode {
    readinfo::cli::main_for::<CrashInfo>()
}
