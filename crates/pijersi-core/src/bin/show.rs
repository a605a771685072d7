use std::process::ExitCode;

use pijersi_core::Position;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let position = if args.is_empty() {
        Position::startpos()
    } else {
        match Position::from_fen(&args.join(" ")) {
            Ok(position) => position,
            Err(err) => {
                eprintln!("Invalid position record: {err}");
                return ExitCode::FAILURE;
            }
        }
    };

    println!("{position}");
    println!();
    println!("{}", position.fen());
    ExitCode::SUCCESS
}
