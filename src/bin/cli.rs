use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use gridwalk::{compute, PathRequest, Position};

#[derive(clap::Parser, Debug)]
#[clap(
  version,
  author = "Tibber Developer Test",
  about = "Run the unique-vertex-count engine against a path description, without a server or a database"
)]
struct Cli {
  #[clap(
    index = 1,
    help = "JSON file with {\"start\": {...}, \"commands\": [...]}; reads stdin when omitted"
  )]
  path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
  env_logger::init();
  let cli = Cli::parse();

  let raw = match &cli.path {
    Some(path) => std::fs::read_to_string(path)?,
    None => {
      let mut buf = String::new();
      std::io::stdin().read_to_string(&mut buf)?;
      buf
    }
  };

  let request: PathRequest = serde_json::from_str(&raw)?;
  let start = Position::new(request.start.x, request.start.y);
  let result = compute(start, &request.commands);
  println!("{result}");
  Ok(())
}
