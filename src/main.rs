use std::io::Read;
use std::process::ExitCode;

use formicarium::parse;

fn main() -> ExitCode {
    env_logger::init();

    let mut input = String::new();
    if let Err(error) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("ERROR: {}", error);
        return ExitCode::FAILURE;
    }

    match parse::parse_description(&input).and_then(|colony| colony.solve()) {
        Ok(solution) => {
            // the expected output contract: the description, a blank line,
            // then one line of moves per turn
            println!("{}\n", input.trim_end());
            print!("{}", solution);
            log::info!("finished in {} turns", solution.total_turns());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("ERROR: {}", error);
            ExitCode::FAILURE
        }
    }
}
