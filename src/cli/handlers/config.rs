use crate::cli::{args::ConfigAction, global::GlobalArgs};
use vec64::Vec64Config;

pub fn handle(
    action: ConfigAction,
    global: &GlobalArgs,
    config: &Vec64Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = global.json || config.output.json;

    match action {
        ConfigAction::List => handle_list(global, json),
        ConfigAction::Show => handle_show(config, json),
    }
}

fn handle_list(global: &GlobalArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut paths: Vec<String> = Vec64Config::override_paths()
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    if let Some(explicit) = &global.config {
        paths.push(shellexpand::tilde(explicit).into_owned());
    }

    let entries: Vec<(String, bool)> = paths
        .into_iter()
        .map(|path| {
            let exists = std::path::Path::new(&path).exists();
            (path, exists)
        })
        .collect();

    if json {
        let rows: Vec<serde_json::Value> = entries
            .iter()
            .map(|(path, exists)| serde_json::json!({ "path": path, "exists": exists }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "builtin": true,
                "files": rows,
            }))?
        );
        return Ok(());
    }

    println!("Configuration sources, lowest priority first:");
    println!("  (built-in defaults)");
    for (path, exists) in &entries {
        println!("  {}{}", path, if *exists { "" } else { " (not found)" });
    }
    Ok(())
}

fn handle_show(config: &Vec64Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}
