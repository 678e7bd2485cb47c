use std::{env, fs::read_to_string, process, time::Instant};

use minilang::{display_error, parser::parser::parse};

const SAMPLE_PROGRAM: &str = "declare w
declare x
declare y
set w = 5
set x = 10
set y = 15
calc w = x + y + 4
if x = y then
print w
print x
endif";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let (source, file_name) = match args.len() {
        1 => (String::from(SAMPLE_PROGRAM), String::from("sample")),
        2 => {
            let file_path: &str = &args[1];
            let file_name = file_path.rsplit('/').next().unwrap_or(file_path);
            let contents = match read_to_string(file_path) {
                Ok(contents) => contents,
                Err(error) => {
                    eprintln!("Failed to read {}: {}", file_path, error);
                    process::exit(1);
                }
            };
            (contents, String::from(file_name))
        }
        _ => {
            eprintln!("Usage: {} [file]", args[0]);
            process::exit(2);
        }
    };

    let start = Instant::now();
    let (_, parsed) = parse(&source, Some(file_name));

    println!("Parsed in {:?}", start.elapsed());

    match parsed {
        Ok(program) => {
            println!("Abstract Syntax Tree:");
            print!("{}", program);
        }
        Err(error) => {
            display_error(&error, &source);
            process::exit(1);
        }
    }
}
