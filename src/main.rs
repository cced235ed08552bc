use std::process::ExitCode;

fn main() -> ExitCode {
    checkup_lens::cli::run()
}
