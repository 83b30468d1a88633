//! pyexports CLI
//!
//! # Usage
//!
//! ```bash
//! # Read the module from stdin
//! pyexports < module.py
//!
//! # Read the module from a file
//! pyexports module.py
//!
//! # JavaScript wrapper / .d.ts declarations instead of JSON
//! pyexports --emit js lighting.py
//! pyexports --emit dts lighting.py
//!
//! # Settings from a YAML file
//! pyexports --config pyexports.yaml module.py
//! ```
//!
//! Errors (reading, arguments, configuration, extraction) are always printed
//! to stdout as `{"error": ...}`, whatever `--emit` asks for, and the process
//! exits normally.

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};

use pyexports::{
    render_javascript, render_type_definitions, ExportsError, ExtractConfig, ExtractionResult,
    Extractor, ModuleInfo,
};

#[derive(Parser)]
#[command(name = "pyexports")]
#[command(version)]
#[command(about = "Print the functions a Python module exports via __all__, as JSON", long_about = None)]
struct Cli {
    /// Python source file (stdin when omitted)
    file: Option<PathBuf>,

    /// Output to produce
    #[arg(long, value_enum, default_value_t = Emit::Json)]
    emit: Emit,

    /// Module name for --emit js/dts (defaults to the file stem)
    #[arg(long)]
    module_name: Option<String>,

    /// Package that provides PythonApiClient, for --emit js/dts
    #[arg(long)]
    client_package: Option<String>,

    /// YAML settings file (`version: 1`)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// `{"functions": [...]}`
    Json,
    /// JavaScript wrapper module
    Js,
    /// TypeScript declarations
    Dts,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            print_error(&Extractor::new(), first_line(&err.to_string()));
            return;
        }
    };

    let extractor = match load_extractor(cli.config.as_deref()) {
        Ok(extractor) => extractor,
        Err(err) => {
            print_error(&Extractor::new(), err.to_string());
            return;
        }
    };

    let source = match read_source(cli.file.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            print_error(&extractor, err.to_string());
            return;
        }
    };

    let result = extractor.run(&source);
    let functions = match (&result, cli.emit) {
        (ExtractionResult::Functions(functions), Emit::Js | Emit::Dts) => functions,
        _ => {
            println!("{}", extractor.render(&result));
            return;
        }
    };

    let module = module_info(&cli);
    match cli.emit {
        Emit::Js => match render_javascript(&module, &source, functions) {
            Ok(js) => print!("{js}"),
            Err(err) => print_error(&extractor, err.to_string()),
        },
        _ => print!("{}", render_type_definitions(&module, functions)),
    }
}

fn load_extractor(config: Option<&Path>) -> Result<Extractor, ExportsError> {
    let Some(path) = config else {
        return Ok(Extractor::new());
    };
    let config = ExtractConfig::from_yaml(path)?;
    Ok(Extractor::new().with_config(config)?)
}

fn module_info(cli: &Cli) -> ModuleInfo {
    let module = match (&cli.module_name, &cli.file) {
        (Some(name), _) => ModuleInfo::new(name),
        (None, Some(path)) => ModuleInfo::from_path(path),
        (None, None) => ModuleInfo::default(),
    };
    match &cli.client_package {
        Some(package) => module.with_client_package(package.as_str()),
        None => module,
    }
}

fn read_source(path: Option<&Path>) -> Result<String, ExportsError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            ExportsError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        }),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn print_error(extractor: &Extractor, message: String) {
    println!("{}", extractor.render(&ExtractionResult::Error(message)));
}

/// clap errors carry usage text after the first line
fn first_line(message: &str) -> String {
    message
        .lines()
        .next()
        .unwrap_or("invalid arguments")
        .trim_start_matches("error: ")
        .to_string()
}
