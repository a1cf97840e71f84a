use anyhow::{Context, anyhow, bail};
use demineur_core::{Coord, Coord2};
use std::str::FromStr;

/// One line of player input.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    /// Restart, optionally switching preset.
    NewGame(Option<String>),
    Presets,
    Help,
    Quit,
}

pub(crate) const HELP: &str = "\
r X Y      reveal the cell at column X, row Y
f X Y      flag or unflag the cell at column X, row Y
n [NAME]   new game, optionally with another preset
p          list presets
h          this help
q          quit";

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("Empty command, type `h` for help");
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Command::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Command::Flag(parse_coords(&mut words)?),
            "n" | "new" => {
                let name: Vec<_> = words.by_ref().collect();
                Command::NewGame((!name.is_empty()).then(|| name.join(" ")))
            }
            "p" | "presets" => Command::Presets,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => bail!("Unknown command {other:?}, type `h` for help"),
        };

        if let Some(extra) = words.next() {
            bail!("Unexpected {extra:?} after command");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let mut next = |axis: &str| -> anyhow::Result<Coord> {
        let word = words.next().ok_or_else(|| anyhow!("Missing {axis} coordinate"))?;
        word.parse()
            .with_context(|| format!("Invalid {axis} coordinate {word:?}"))
    };
    let x = next("x")?;
    let y = next("y")?;
    Ok((x, y))
}
