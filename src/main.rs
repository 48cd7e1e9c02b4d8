use clap::Parser;
use wiki_page_index::{generate, Cli, Mode, Options};

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let mode = if cli.insert { Mode::Insert } else { Mode::Replace };
    let opts = Options {
        dir: cli.dir,
        mode,
        group_by_tags: cli.tags,
        dry_run: cli.dry_run,
        json: cli.json,
    };

    generate::run(&opts)
}
