use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Report, SampleParser, TimelineRenderer};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, is_stdin};
use std::fs::File;
use std::io::{self, BufReader, Write};

/// Handle the `show` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        file,
        label,
        strict,
    } = cmd
    {
        let parser = SampleParser::new();
        let forecast = if is_stdin(file) {
            parser.parse(io::stdin().lock())?
        } else {
            let f = File::open(expand_tilde(file))?;
            parser.parse(BufReader::new(f))?
        };

        for diag in &forecast.diagnostics {
            warning(diag);
        }

        let chart = TimelineRenderer::render(&forecast.samples);
        let report = Report::from_config(cfg, label.as_deref());

        let mut out = io::stdout().lock();
        out.write_all(report.render(&chart).as_bytes())?;
        out.flush()?;

        if *strict && !forecast.is_clean() {
            return Err(AppError::InvalidInput(format!(
                "{} problem(s) found",
                forecast.diagnostics.len()
            )));
        }
    }
    Ok(())
}
