//! Portwire CLI
//!
//! Usage:
//!   portwire [OPTIONS] [FILE]
//!
//! Options:
//!   -s, --stylesheet <FILE>  Stylesheet file for color palette (TOML format)
//!   -f, --format             Show the diagram document format reference
//!   -d, --debug              Trace routing decisions to stderr
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use portwire::{render_with_config, RenderConfig, Stylesheet};

#[derive(Parser)]
#[command(name = "portwire")]
#[command(about = "Connector routing and rendering for port-based block diagrams")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Stylesheet file for color palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Debug mode: trace routing decisions to stderr
    #[arg(short, long)]
    debug: bool,

    /// Show the diagram document format reference
    #[arg(short, long)]
    format: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.format {
        print_format();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let config = RenderConfig::new()
        .with_stylesheet(stylesheet)
        .with_debug(cli.debug);
    match render_with_config(&source, config) {
        Ok(svg) => {
            println!("{}", svg);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Portwire - connector routing for port-based block diagrams

USAGE:
    portwire [OPTIONS] [FILE]
    cat diagram.toml | portwire

OPTIONS:
    -f, --format       Show the diagram document format reference
    -s, --stylesheet   Custom color palette (TOML file)
    -d, --debug        Trace routing decisions to stderr
    -h, --help         Print help

QUICK START:
    portwire diagram.toml > output.svg

The input is a TOML document describing nodes, ports, relations and
links. Run --format for the full document reference."#
    );
}

fn print_format() {
    println!(
        r#"PORTWIRE DOCUMENT FORMAT
========================

The input is a TOML document with four element kinds.

NODES
-----
[[node]]
id = "source"          Unique node id
x = 0                  Position and size on the canvas (y grows downward)
y = 0
width = 40
height = 40
label = "Source"       Optional centered label

PORTS
-----
[[port]]
id = "out"             Port id, unique within its node
node = "source"        Owning node
output = true          input / output / both (bidirectional)
multiport = false      Multiports fan several wires out along the edge
direction_deg = 90     Optional explicit outward direction in degrees;
                       defaults: input faces west, output faces east,
                       bidirectional faces south

RELATIONS
---------
[[relation]]
id = "r1"
bend_points = "10,10;20,20"   Optional persisted bend points
marker = "head={{...}}, ..."    Modification marker recording the endpoint
                              state the bend points were computed for;
                              wires follow the bend points only while the
                              marker still matches

[[relation.vertex]]           Optional waypoints links may attach to
id = "w1"
x = 50
y = 50

LINKS
-----
[[link]]
relation = "r1"
head = "source.out"    node.port reference or vertex id
tail = "sink.in"
label = "stream"       Optional wire label
head_inside = false    Attach on the inner face of a composite node's port

ROUTING
-------
Wires leave each port along its outward direction, bend at right angles,
and fan out along the edge when several wires share one multiport.
Relations with valid bend points are drawn through them with rounded
corners; stale bend points fall back to plain orthogonal routing."#
    );
}
