use clap::Args;
use fridgechef_core::{shopping_items, Catalog, Result};

use crate::render;

#[derive(Args)]
pub struct ShoppingArgs {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: ShoppingArgs) -> Result<()> {
    let items = shopping_items(&Catalog::builtin());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print!("{}", render::shopping(&items));
    }
    Ok(())
}
