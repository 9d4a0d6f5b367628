use clap::Parser;
use slicesql::cli::{Args, RunStatus, init_logging, run};

#[allow(clippy::print_stderr)]
fn main() {
    let args = Args::parse();
    if let Err(e) = init_logging(&args.log_level, args.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match run(&args, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(RunStatus::Ok) => {}
        Ok(RunStatus::Inexact) => std::process::exit(2),
        Err(e) => {
            tracing::error!("slicing failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
