extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;
extern crate dinitz;
extern crate env_logger;

use dinitz::bipartite::maximum_matching_size;
use dinitz::{Engine, FlowNetwork, GraphError, GraphInput, MatchedPair, Stats};
use std::env;
use std::fmt;

const USAGE: &str = "Usage: graph2matching <input path> [--json] [--verify]";

#[derive(Debug)]
enum Error {
    Usage(String),
    Io(std::io::Error),
    Graph(GraphError),
    Json(serde_json::Error),
    /// The engine and the reference matcher disagree on the matching size
    Verification { engine: usize, reference: usize },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<GraphError> for Error {
    fn from(error: GraphError) -> Self {
        Self::Graph(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{}\n{}", msg, USAGE),
            Self::Io(e) => write!(f, "cannot read input: {}", e),
            Self::Graph(e) => write!(f, "malformed input: {}", e),
            Self::Json(e) => write!(f, "cannot write JSON: {}", e),
            Self::Verification { engine, reference } => write!(
                f,
                "engine found {} matches but the reference matcher found {}",
                engine, reference
            ),
        }
    }
}

#[derive(Debug, Default)]
struct Options {
    input_path: String,
    json: bool,
    verify: bool,
}

impl Options {
    fn from_args<I: Iterator<Item = String>>(args: I) -> Result<Self, Error> {
        let mut options = Options::default();
        let mut input_path = None;
        for arg in args {
            match arg.as_str() {
                "--json" => options.json = true,
                "--verify" => options.verify = true,
                flag if flag.starts_with("--") => {
                    return Err(Error::Usage(format!("Unknown option {}", flag)));
                }
                _ if input_path.is_some() => {
                    return Err(Error::Usage(format!("Unexpected argument {}", arg)));
                }
                _ => input_path = Some(arg),
            }
        }
        options.input_path =
            input_path.ok_or_else(|| Error::Usage("Expected an input path".to_string()))?;
        Ok(options)
    }
}

/// JSON output, written with `--json`
#[derive(Debug, Serialize)]
struct Output<'a> {
    matches: &'a [MatchedPair],
    total: usize,
    stats: Stats,
}

/// Runs the engine on `input` and returns the text or JSON report
fn render(options: &Options, input: &GraphInput) -> Result<String, Error> {
    info!(
        "Building flow network for {} vertices and {} edges",
        input.vertex_count(),
        input.edges.len()
    );
    let mut network = FlowNetwork::from_input(input)?;
    let stats = Engine::new(&mut network).run();
    let matching = network.matching();
    if options.verify {
        let reference = maximum_matching_size(input);
        if reference != matching.len() {
            return Err(Error::Verification {
                engine: matching.len(),
                reference,
            });
        }
        info!("Verified {} matches against the reference matcher", reference);
    }
    if options.json {
        let output = Output {
            matches: &matching,
            total: matching.len(),
            stats,
        };
        Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
    } else {
        Ok(matching.to_string())
    }
}

fn run(options: &Options) -> Result<(), Error> {
    info!("Loading graph @ {}", options.input_path);
    let text = std::fs::read_to_string(&options.input_path)?;
    let input: GraphInput = text.parse()?;
    print!("{}", render(options, &input)?);
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let result = Options::from_args(env::args().skip(1)).and_then(|options| run(&options));
    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}
