mod cli;
mod loader;

use std::{error::Error as _, process::ExitCode};

use clap::Parser;
use dt_wsdl::{Definitions, Indentation, NamespaceTracking, Serializer, WsdlError};
use loader::{DocumentLoader, FileLoader, HttpLoader, LoadError};
use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Wsdl(#[from] WsdlError),
    #[error("the request data is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("could not read the request data from stdin")]
    Stdin(#[source] std::io::Error),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn parse(text: &str, allow_dtd: bool) -> Result<roxmltree::Document<'_>, WsdlError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd,
        ..Default::default()
    };
    Ok(roxmltree::Document::parse_with_options(text, options)?)
}

fn read_request(data: Option<&std::path::Path>) -> Result<Value, Error> {
    let text = match data {
        Some(path) => {
            let location = path.to_string_lossy();
            FileLoader.load(&location)?
        }
        None => std::io::read_to_string(std::io::stdin()).map_err(Error::Stdin)?,
    };
    Ok(serde_json::from_str(&text)?)
}

fn run(cli: cli::Cli) -> Result<(), Error> {
    let loaders = [
        Box::new(HttpLoader::new()?) as Box<dyn DocumentLoader>,
        Box::new(FileLoader),
    ];

    match cli.command {
        cli::Command::Operations { source } => {
            let wsdl = loader::load(&loaders, &source)?;
            let document = parse(&wsdl, cli.allow_dtd)?;
            let definitions = Definitions::new(&document)?;
            for name in definitions.list_operations()? {
                println!("{name}");
            }
        }
        cli::Command::Describe { source, operation } => {
            let wsdl = loader::load(&loaders, &source)?;
            let document = parse(&wsdl, cli.allow_dtd)?;
            let definitions = Definitions::new(&document)?;
            let operation = definitions.resolve_operation(&operation)?;
            println!("{}", serde_json::to_string_pretty(&operation)?);
        }
        cli::Command::Encode {
            source,
            operation,
            data,
            no_namespaces,
            indent,
            indent_width,
        } => {
            let wsdl = loader::load(&loaders, &source)?;
            let document = parse(&wsdl, cli.allow_dtd)?;
            let definitions = Definitions::new(&document)?;
            let operation = definitions.resolve_operation(&operation)?;
            let request = read_request(data.as_deref())?;

            let tracking = if no_namespaces {
                NamespaceTracking::Disabled
            } else {
                NamespaceTracking::Enabled
            };
            let indentation = match indent {
                cli::IndentStyle::Tab => Indentation::Tab,
                cli::IndentStyle::Spaces => Indentation::Spaces(indent_width),
            };
            let envelope = Serializer::new(tracking)
                .with_indentation(indentation)
                .render_envelope(
                    &definitions,
                    &operation.name,
                    &operation.request,
                    &request,
                );
            println!("{envelope}");
        }
        cli::Command::Decode {
            source,
            operation,
            response,
        } => {
            let wsdl = loader::load(&loaders, &source)?;
            let document = parse(&wsdl, cli.allow_dtd)?;
            let definitions = Definitions::new(&document)?;
            let operation = definitions.resolve_operation(&operation)?;
            let response = loader::load(&loaders, &response)?;
            let value = definitions.decode_response(&operation, &response)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        cli::Command::Flatten { source } => {
            let xml = loader::load(&loaders, &source)?;
            let document = parse(&xml, cli.allow_dtd)?;
            let value = dt_wsdl::flatten(document.root_element())?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
