use anyhow::Result;
use clap::Parser;

use langize::cli::commands::{configure, render, template};
use langize::cli::{Args, Command, exit_code};
use langize::output::{self, OutputConfig};
use langize::translation::print_languages;
use langize::ui::Style;

fn main() {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    if let Err(err) = run(args) {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Template { fingerprint }) => {
            template::print_template(fingerprint)?;
        }
        Some(Command::Config { init, to, force }) => {
            configure::run_configure(&configure::ConfigureOptions { init, to, force })?;
        }
        None => {
            let options = render::RenderOptions {
                to: args.to,
                allow_any: args.allow_any,
                json: args.json,
            };
            render::run_render(&options)?;
        }
    }

    Ok(())
}
