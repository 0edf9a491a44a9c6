use crate::cli::{args::LatticeArgs, global::GlobalArgs};
use vec64::{CharType, Vec64Config, exact_probabilities};

pub fn handle(
    args: LatticeArgs,
    global: &GlobalArgs,
    config: &Vec64Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let probabilities = exact_probabilities(args.length);

    if global.json || config.output.json {
        let rows: Vec<serde_json::Value> = CharType::ALL
            .iter()
            .map(|&ctype| {
                let info = ctype.info();
                serde_json::json!({
                    "name": ctype,
                    "symbols": info.symbols(),
                    "size": info.symbols().len(),
                    "exclusions": info.exclusions().iter().collect::<Vec<_>>(),
                    "probability": probabilities[ctype.index()],
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "length": args.length,
                "types": rows,
            }))?
        );
        return Ok(());
    }

    println!("Character types (probabilities for length {}):\n", args.length);
    for ctype in CharType::ALL {
        let info = ctype.info();
        let exclusions: Vec<&str> = info.exclusions().iter().map(CharType::name).collect();
        println!(
            "  {:<15} {:>2}  {:<12.6e}  {}",
            ctype.name(),
            info.symbols().len(),
            probabilities[ctype.index()],
            if exclusions.is_empty() {
                "-".to_string()
            } else {
                exclusions.join(",")
            }
        );
    }
    Ok(())
}
