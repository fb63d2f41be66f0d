use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::path::existing_file;
use crate::utils::table::Table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut table = Table::new(&["NAME", "FILE", "DEFAULT"]);

    for (name, file) in &cfg.sounds {
        let file_cell = if file.is_empty() {
            "(terminal bell)".to_string()
        } else if existing_file(file).is_some() {
            file.clone()
        } else {
            format!("{} (missing)", file)
        };
        let default = if *name == cfg.default_sound { "*" } else { "" };
        table.add_row(vec![name.clone(), file_cell, default.to_string()]);
    }

    print!("{}", table.render());
    match &cfg.player {
        Some(p) => println!("\nplayer: {}", p),
        None => println!("\nplayer: none (set `player` in the config to play audio files)"),
    }
    Ok(())
}
