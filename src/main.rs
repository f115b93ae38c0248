use log::debug;
use recipe_parse::parse_recipe;
use std::env;
use std::fs;
use std::io::{self, Read};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let as_json = args.iter().any(|arg| arg == "--json");
    let path = args.iter().find(|arg| !arg.starts_with("--"));

    let raw_text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    match parse_recipe(&raw_text) {
        Some(recipe) => {
            debug!("{recipe:#?}");
            if as_json {
                println!("{}", serde_json::to_string_pretty(&recipe)?);
            } else {
                print!("{recipe}");
            }
        }
        // No structure to show: echo the generated text unchanged.
        None => print!("{raw_text}"),
    }

    Ok(())
}
