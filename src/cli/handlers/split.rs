use crate::cli::{
    args::SplitArgs,
    config::read_input,
    global::GlobalArgs,
};
use vec64::{Vec64Config, parse_separator, split_with, unvectorize, vectorize_with};

pub fn handle(
    args: SplitArgs,
    global: &GlobalArgs,
    config: &Vec64Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = config.split.options()?;
    if let Some(sep) = &args.sep {
        options = options.with_sep(parse_separator(sep)?);
    }
    if let Some(maxsplit) = args.maxsplit {
        options = options.with_maxsplit(maxsplit);
    }

    let input = read_input(args.file.as_deref(), global)?;
    let pad_with = args.pad_with.unwrap_or(config.vectorize.pad_with);
    let symbols = vectorize_with(&input, pad_with);
    let spans = split_with(&symbols, &options)?;
    tracing::debug!(
        symbols = symbols.len(),
        spans = spans.len(),
        sep = ?options.sep,
        maxsplit = options.maxsplit,
        "split"
    );

    let show_probability = config.output.probabilities && !args.no_probabilities;

    if global.json || config.output.json {
        let mut rows = Vec::with_capacity(spans.len());
        for span in &spans {
            let mut row = serde_json::json!({
                "start": span.start,
                "limit": span.limit,
                "ctype": span.ctype,
                "text": unvectorize(&symbols[span.start..span.limit])?,
            });
            if show_probability {
                row["probability"] = serde_json::json!(span.probability());
            }
            rows.push(row);
        }
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for span in &spans {
        if show_probability {
            println!(
                "{} {} {} {:e}",
                span.start,
                span.limit,
                span.ctype,
                span.probability()
            );
        } else {
            println!("{} {} {}", span.start, span.limit, span.ctype);
        }
    }
    Ok(())
}
