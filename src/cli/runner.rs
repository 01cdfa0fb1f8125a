use std::io::Write;

use crate::{
    cli::Args,
    constants::STDIO_INDICATOR,
    engine::{Expansion, Registry, SystemHost},
    error::{Error, Result},
    ioutils::{open_output, read_input},
    matching::{match_io, IoPair},
};

/// Main CLI runner: pairs inputs with outputs and expands each document.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete expansion workflow.
    ///
    /// Each document gets a fresh expansion context; only the directive
    /// registry is shared across documents. A failed input read aborts the
    /// run — results already written for earlier documents stay written.
    pub fn run(self) -> Result<()> {
        let registry = Registry::standard();

        let mut inputs = self.args.inputs.clone();
        if inputs.is_empty() {
            inputs.push(STDIO_INDICATOR.to_string());
        }
        let mut outputs = self.args.outputs.clone();
        if outputs.is_empty() {
            outputs.push(STDIO_INDICATOR.to_string());
        }

        for pair in match_io(&inputs, &outputs) {
            self.expand_document(&pair, &registry)?;
        }
        Ok(())
    }

    /// Reads one document, expands it, and appends the result plus a
    /// trailing newline to the destination.
    fn expand_document(&self, pair: &IoPair, registry: &Registry) -> Result<()> {
        let source = read_input(&pair.input)?;
        log::info!("Executing {}", pair.input);

        let mut host = SystemHost;
        let expanded = Expansion::new(source, registry, &mut host).run();

        let mut dest = open_output(&pair.output)?;
        dest.write_all(expanded.as_bytes())
            .and_then(|()| dest.write_all(b"\n"))
            .map_err(|source| Error::OutputWriteError {
                path: pair.output.clone(),
                source,
            })?;

        log::info!("wrote {} bytes to {}", expanded.len() + 1, pair.output);
        Ok(())
    }
}

/// Main entry point for CLI execution.
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}
