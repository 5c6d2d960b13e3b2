//!
//! bionic -- two-line brand lockups in the shell
//!

#[macro_use] extern crate clap;
             extern crate bionic;
#[macro_use] extern crate enum_derive;
             extern crate env_logger;
             extern crate exitcode;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
#[macro_use] extern crate macro_attr;
             extern crate serde_json;

#[cfg(test)] #[macro_use] extern crate spectral;


mod args;
mod logging;


use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

use args::ArgsError;


lazy_static! {
    /// Application / package name, as filled out by Cargo.
    static ref NAME: &'static str = option_env!("CARGO_PKG_NAME").unwrap_or("bionic");

    /// Application version, as filled out by Cargo.
    static ref VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
}


fn main() {
    let opts = args::parse().unwrap_or_else(|e| {
        print_args_error(e).unwrap();
        exit(exitcode::USAGE);
    });

    logging::init(opts.verbosity).unwrap();
    if cfg!(debug_assertions) {
        warn!("Debug mode! The program will likely be much slower.");
    }
    for (i, arg) in env::args().enumerate() {
        debug!("argv[{}] = {:?}", i, arg);
    }
    trace!("Options parsed from argv:\n{:#?}", opts);

    let engine = bionic::EngineBuilder::new()
        .font_directory(&opts.font_dir)
        .build().unwrap_or_else(|e| {
            error!("Failed to set up the rendering engine: {}", e);
            exit(exitcode::CONFIG);
        });

    info!("Synthesizing HD master...");
    let output = engine.render(opts.lockup).unwrap_or_else(|e| {
        error!("Error while rendering lockup: {}", e);
        exit(exitcode::UNAVAILABLE);
    });

    let path = opts.output_path.clone()
        .unwrap_or_else(|| PathBuf::from(output.suggested_filename()));
    write_output(&output, &path).unwrap_or_else(|e| {
        error!("Failed to write output file {}: {}", path.display(), e);
        exit(exitcode::CANTCREAT);
    });
    info!("Asset saved to {}", path.display());
}

/// Print an error that may occur while parsing arguments.
fn print_args_error(e: ArgsError) -> io::Result<()> {
    match e {
        ArgsError::Parse(ref e) =>
            // In case of generic parse error,
            // message provided by the clap library will be the usage string.
            writeln!(&mut io::stderr(), "{}", e.message),
        e => {
            writeln!(&mut io::stderr(), "Failed to parse arguments: {}", e)
        },
    }
}

/// Write the rendered image under given path.
fn write_output(output: &bionic::RenderOutput, path: &PathBuf) -> io::Result<()> {
    trace!("Writing {} bytes to {}...", output.len(), path.display());
    let mut file = fs::OpenOptions::new()
        .create(true).write(true).truncate(true)
        .open(path)?;
    file.write_all(output.bytes())
}
