use crate::cli::{
    args::{UnvectorizeArgs, VectorizeArgs},
    config::{join, parse_numbers, read_input},
    global::GlobalArgs,
};
use vec64::{Vec64Config, unvectorize, vectorize_with};

pub fn handle(
    args: VectorizeArgs,
    global: &GlobalArgs,
    config: &Vec64Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_deref(), global)?;
    let pad_with = args.pad_with.unwrap_or(config.vectorize.pad_with);

    let symbols = vectorize_with(&input, pad_with);
    tracing::debug!(bytes = input.len(), symbols = symbols.len(), pad_with, "vectorized");

    if global.json || config.output.json {
        println!("{}", serde_json::to_string(&symbols)?);
    } else {
        println!("{}", join(&symbols));
    }
    Ok(())
}

pub fn handle_unvectorize(
    args: UnvectorizeArgs,
    global: &GlobalArgs,
    config: &Vec64Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_deref(), global)?;
    let symbols: Vec<u8> = parse_numbers(&input)?;
    let text = unvectorize(&symbols)?;
    tracing::debug!(symbols = symbols.len(), "unvectorized");

    if global.json || config.output.json {
        println!("{}", serde_json::to_string(&text)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}
