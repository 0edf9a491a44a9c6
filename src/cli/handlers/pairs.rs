use crate::cli::{
    args::PairsAction,
    config::{join, parse_numbers, read_input},
    global::GlobalArgs,
};
use vec64::{Vec64Config, pair_decode, pair_encode, unvectorize, vectorize_with};

pub fn handle(
    action: PairsAction,
    global: &GlobalArgs,
    config: &Vec64Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = global.json || config.output.json;

    match action {
        PairsAction::Encode {
            file,
            start,
            pad_with,
        } => {
            let input = read_input(file.as_deref(), global)?;
            let start = start.unwrap_or(config.pairs.start);
            let symbols = vectorize_with(&input, pad_with.unwrap_or(config.vectorize.pad_with));
            let codes = pair_encode(&symbols, start)?;
            tracing::debug!(symbols = symbols.len(), codes = codes.len(), start, "pair encoded");

            if json {
                println!("{}", serde_json::to_string(&codes)?);
            } else {
                println!("{}", join(&codes));
            }
        }
        PairsAction::Decode { file, text } => {
            let input = read_input(file.as_deref(), global)?;
            let codes: Vec<u16> = parse_numbers(&input)?;
            let symbols = pair_decode(&codes)?;
            tracing::debug!(codes = codes.len(), symbols = symbols.len(), "pair decoded");

            match (text, json) {
                (true, true) => println!("{}", serde_json::to_string(&unvectorize(&symbols)?)?),
                (true, false) => println!("{}", unvectorize(&symbols)?),
                (false, true) => println!("{}", serde_json::to_string(&symbols)?),
                (false, false) => println!("{}", join(&symbols)),
            }
        }
    }
    Ok(())
}
