use clap::Parser;
use roshambo::*;
use std::io::IsTerminal;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.level(), args.log_dir.as_deref())?;
    let interactive = std::io::stdin().is_terminal();
    if args.no_color || !interactive {
        colored::control::set_override(false);
    }
    let opponent = args.opponent();
    match interactive {
        true => Session::new(opponent, Terminal).play()?,
        false => {
            let console = Stream::new(std::io::stdin().lock(), std::io::stdout());
            Session::new(opponent, console).play()?
        }
    };
    Ok(())
}
