use clap::Parser;
use stacko::{
    config::{DEFAULT_MAX_CALL_DEPTH, Settings},
    run_file,
};

/// stacko runs programs written in Stacko, a small stack-based scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run. Must end in `.stko` or `.stacko`.
    path: String,

    /// Maximum number of nested function calls before the program is stopped.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Use a headless window that asks to close after this many frames have
    /// been shown, which ends `windowRunning` loops.
    #[arg(long, value_name = "FRAMES")]
    close_after: Option<u64>,

    /// Seed for `random`, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

/// Installs a log subscriber on standard error when `RUST_LOG` is set.
/// Enable with `RUST_LOG=stacko=debug` or `RUST_LOG=stacko=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    let args = Args::parse();
    init_tracing();

    let settings = Settings { max_call_depth:     args.max_call_depth,
                              close_after_frames: args.close_after,
                              seed:               args.seed, };

    let code = match run_file(&args.path, &settings) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError\x1b[0m: \x1b[32m{e}\x1b[0m {}", e.emoji());
            e.exit_code()
        },
    };

    std::process::exit(code);
}
