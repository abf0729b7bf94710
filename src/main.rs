//! eqstep main: subcommands, equation shorthand, interactive prompt by default.
use clap::Parser; // trait import enables EqstepCli::parse()

use eqstep::cli::{Command, EqstepCli};
use eqstep::commands;
use eqstep::config::Settings;
use eqstep::core::solver::Solver;
use eqstep::shell;

fn main() -> anyhow::Result<()> {
    let args = EqstepCli::parse();
    // `config --init` creates the file `--config` names, so it may not exist yet.
    let settings = match (&args.cmd, &args.config) {
        (Some(Command::Config { init: true }), Some(path)) if !path.exists() => Settings::default(),
        _ => Settings::load(&args.config)?,
    };

    if args.no_color || !settings.display.color {
        colored::control::set_override(false);
    }
    let json = args.json || settings.display.json;
    let solver = Solver::new(settings.solver.clone());

    let code = match args.cmd {
        Some(Command::Solve { words, out }) => {
            commands::solve::main_with_opts(&solver, &words.join(" "), out, json, args.pretty_errors)?
        }
        Some(Command::Batch { input }) => {
            commands::batch::main(&solver, &input, json, args.pretty_errors)?
        }
        Some(Command::Arith { op, a, b }) => commands::arith::main(op.into(), a, b, json)?,
        Some(Command::Tokens { words }) => commands::tokens::main(&words.join(" "))?,
        Some(Command::Config { init }) => commands::settings::main(&settings, &args.config, init)?,
        Some(Command::Repl) => {
            shell::start(&solver, &settings, json)?;
            0
        }
        // Shorthand: `eqstep "2x+3=7"`
        None => match args.equation_pos {
            Some(equation) => {
                commands::solve::main_with_opts(&solver, &equation, None, json, args.pretty_errors)?
            }
            None => {
                shell::start(&solver, &settings, json)?;
                0
            }
        },
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
