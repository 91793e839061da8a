use hsh::flags::Flags;
use hsh::shell::Shell;
use std::env;
use std::process::ExitCode;

fn init_logging(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn exit_code(status: i32) -> ExitCode {
    ExitCode::from((status & 0xff) as u8)
}

fn main() -> ExitCode {
    let mut args = env::args();
    let program_name = args.next().unwrap_or_else(|| "hsh".to_string());
    let args: Vec<String> = args.collect();

    let mut flags = Flags::new();
    if let Err(e) = flags.parse(&args) {
        eprintln!("{}", e.diagnostic(&program_name));
        return exit_code(e.exit_status());
    }

    if flags.is_set("help") {
        flags.print_help();
        return ExitCode::SUCCESS;
    }

    if flags.is_set("version") {
        println!("hsh {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_logging(flags.is_set("debug"));

    match Shell::new(&flags, program_name.as_str()).and_then(|mut shell| shell.run()) {
        Ok(status) => exit_code(status),
        Err(e) => {
            eprintln!("{}", e.diagnostic(&program_name));
            exit_code(e.exit_status())
        }
    }
}
