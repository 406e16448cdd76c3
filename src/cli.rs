use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum IndentStyle {
    Tab,
    Spaces,
}

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Allow a XML Document Type Definition (DTD) to occur"
    )]
    pub allow_dtd: bool,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Log more details to stderr (repeat for more); RUST_LOG takes precedence"
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lists the operations offered by the service
    Operations {
        #[arg(help = "The WSDL file or URL")]
        source: String,
    },
    /// Prints the resolved request and response structure of an operation as JSON
    Describe {
        #[arg(help = "The WSDL file or URL")]
        source: String,
        operation: String,
    },
    /// Builds the request envelope of an operation from a JSON object
    Encode {
        #[arg(help = "The WSDL file or URL")]
        source: String,
        operation: String,

        #[arg(long, help = "JSON file with the request data; read from stdin if omitted")]
        data: Option<PathBuf>,

        #[arg(long, help = "Do not declare the namespace prefixes used in the body")]
        no_namespaces: bool,

        #[arg(long, value_enum, default_value = "tab")]
        indent: IndentStyle,

        #[arg(long, default_value_t = 4, help = "Width of one level with --indent spaces")]
        indent_width: usize,
    },
    /// Reads a response envelope of an operation into JSON
    Decode {
        #[arg(help = "The WSDL file or URL")]
        source: String,
        operation: String,
        #[arg(help = "The response envelope file or URL")]
        response: String,
    },
    /// Converts any XML document into JSON without a schema
    Flatten {
        #[arg(help = "The XML file or URL")]
        source: String,
    },
}
