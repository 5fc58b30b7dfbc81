//! hs-rdf CLI: inspect and convert resource metadata documents.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};

use hs_rdf::io::{self, Syntax};
use hs_rdf::mapping::Serializer;
use hs_rdf::{Mapper, MapperConfig, SchemaRegistry, TripleGraph};

#[derive(Parser)]
#[command(name = "hs-rdf", version, about = "Resource metadata RDF mapper")]
struct Cli {
    /// TOML file with mapper settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which record type a document describes and summarize it.
    Inspect {
        /// Document to read.
        file: PathBuf,

        /// Input syntax; guessed from the extension when omitted.
        #[arg(long)]
        from: Option<SyntaxArg>,
    },

    /// Parse a document into its record and write it back out.
    Convert {
        /// Document to read.
        file: PathBuf,

        /// Input syntax; guessed from the extension when omitted.
        #[arg(long)]
        from: Option<SyntaxArg>,

        /// Output syntax; the configured default when omitted.
        #[arg(long)]
        to: Option<SyntaxArg>,

        /// Write to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List the registered discriminator classes.
    Schemas,

    /// Print the effective configuration as TOML.
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum SyntaxArg {
    Turtle,
    RdfXml,
    NTriples,
}

impl From<SyntaxArg> for Syntax {
    fn from(arg: SyntaxArg) -> Self {
        match arg {
            SyntaxArg::Turtle => Syntax::Turtle,
            SyntaxArg::RdfXml => Syntax::RdfXml,
            SyntaxArg::NTriples => Syntax::NTriples,
        }
    }
}

fn read(path: &Path, from: Option<SyntaxArg>) -> Result<TripleGraph> {
    Ok(io::read_file(path, from.map(Syntax::from))?)
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => MapperConfig::load(path)?,
        None => MapperConfig::default(),
    };
    let mapper = Mapper::new(config);

    match cli.command {
        Commands::Inspect { file, from } => {
            let graph = read(&file, from)?;
            let metadata = mapper.load(&graph)?;
            println!("File:     {}", file.display());
            println!("Triples:  {}", graph.len());
            println!("Kind:     {}", metadata.kind().schema_name());
            println!("Subject:  {}", metadata.subject());
            println!("Title:    {}", metadata.title());
        }

        Commands::Convert {
            file,
            from,
            to,
            output,
        } => {
            let graph = read(&file, from)?;
            let metadata = mapper.load(&graph)?;

            let config = mapper.config();
            let mut out = TripleGraph::new();
            let mut serializer = Serializer::new(&mut out, config.max_depth, config.class_labels);
            metadata.serialize(&mut serializer)?;

            let syntax = to.map(Syntax::from).unwrap_or(config.format);
            let text = io::write_graph(&out, syntax)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, text).into_diagnostic()?;
                    eprintln!(
                        "Wrote {} ({} triples, {}) to {}",
                        metadata.kind().schema_name(),
                        out.len(),
                        syntax.name(),
                        path.display()
                    );
                }
                None => print!("{text}"),
            }
        }

        Commands::Schemas => {
            let registry = SchemaRegistry::global()?;
            for (class, kind) in registry.entries() {
                println!("{:<32} {}", kind.schema_name(), class.as_str());
            }
        }

        Commands::Config => {
            print!("{}", mapper.config().to_toml_string()?);
        }
    }

    Ok(())
}
