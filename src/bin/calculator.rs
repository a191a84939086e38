use llpda::calculator::Engine;
use std::io::Write;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let engine = Engine::new();

    println!("Enter expressions such as '(3+4)*5', '3/4', '3.14*10^4'.");
    println!("Type 'quit' to exit.");

    loop {
        let mut line = String::new();

        print!("=> ");
        std::io::stdout().flush()?;

        if std::io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.to_lowercase() == "quit" {
            break;
        }

        match engine.evaluate(line) {
            Ok(v) => {
                println!("{v}");
            }
            Err(e) => {
                println!("ERROR: {e}");
            }
        }
    }

    println!("So long, and thanks for all the fish!");

    Ok(())
}
