//! Swagger Client Generator CLI
//!
//! Command-line interface for generating JavaScript API clients from
//! Swagger 1.x and 2.0 specifications.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use swagger_client_generator_generator::{CodeGenerator, GenerateOptions, TemplateOverride};
use swagger_client_generator_parser::{build_document, detect_version, DocumentOptions, SpecVersion};

#[derive(Parser)]
#[command(name = "swagger-client-generator")]
#[command(version, about = "Generate JavaScript API clients from Swagger specifications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a spec file and display the normalized client model
    #[command(after_help = "EXAMPLES:\n  \
        # Inspect a Swagger 2.0 spec\n  \
        swagger-client-generator parse --spec petstore.json\n\n  \
        # Inspect with an explicit class name\n  \
        swagger-client-generator parse --spec petstore.json --class PetStore")]
    Parse {
        /// Path to the spec file (Swagger 1.x or 2.0 JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Module name attached to the model
        #[arg(long, default_value = "client")]
        module: String,

        /// Class name attached to the model
        #[arg(long, default_value = "Client")]
        class: String,
    },

    /// Generate a JavaScript client from a spec file
    #[command(after_help = "EXAMPLES:\n  \
        # Generate an Angular client\n  \
        swagger-client-generator generate \\\n    \
        --spec petstore.json \\\n    \
        --module petstore \\\n    \
        --class PetStore \\\n    \
        --flavor angular \\\n    \
        --output petstore.js\n\n  \
        # Generate from custom templates\n  \
        swagger-client-generator generate \\\n    \
        --spec petstore.json \\\n    \
        --module petstore \\\n    \
        --class PetStore \\\n    \
        --flavor custom \\\n    \
        --class-template class.tera \\\n    \
        --method-template method.tera \\\n    \
        --request-template request.tera")]
    Generate {
        /// Path to the spec file (Swagger 1.x or 2.0 JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Module name for the generated client
        #[arg(long)]
        module: String,

        /// Class name for the generated client
        #[arg(long)]
        class: String,

        /// Output flavor
        #[arg(short, long, default_value = "angular")]
        flavor: OutputFlavor,

        /// Class template file (custom flavor only)
        #[arg(long)]
        class_template: Option<PathBuf>,

        /// Method template file (custom flavor only)
        #[arg(long)]
        method_template: Option<PathBuf>,

        /// Request template file (custom flavor only)
        #[arg(long)]
        request_template: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFlavor {
    /// Angular module/factory client
    Angular,
    /// Node http client
    Node,
    /// Caller-supplied templates
    Custom,
}

impl std::fmt::Display for OutputFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFlavor::Angular => write!(f, "Angular"),
            OutputFlavor::Node => write!(f, "Node"),
            OutputFlavor::Custom => write!(f, "Custom"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            spec,
            module,
            class,
        } => {
            parse_command(spec.as_path(), &module, &class, cli.verbose)?;
        }
        Commands::Generate {
            spec,
            module,
            class,
            flavor,
            class_template,
            method_template,
            request_template,
            output,
        } => {
            generate_command(GenerateConfig {
                spec_path: spec.as_path(),
                module: &module,
                class: &class,
                flavor,
                class_template: class_template.as_deref(),
                method_template: method_template.as_deref(),
                request_template: request_template.as_deref(),
                output: output.as_deref(),
                verbose: cli.verbose,
            })?;
        }
    }

    Ok(())
}

fn load_spec(path: &Path) -> Result<serde_json::Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse spec file {}", path.display()))
}

fn parse_command(spec_path: &Path, module: &str, class: &str, verbose: bool) -> Result<()> {
    println!("{} Parsing spec file: {}", "→".cyan(), spec_path.display());

    let swagger = load_spec(spec_path)?;
    let version = detect_version(&swagger).context("Failed to detect spec version")?;
    println!(
        "{} Detected dialect: {}",
        "→".cyan(),
        match version {
            SpecVersion::V1 => "Swagger 1.x".yellow(),
            SpecVersion::V2 => "Swagger 2.0".yellow(),
        }
    );

    let document = build_document(
        &swagger,
        &DocumentOptions {
            module_name: module.to_string(),
            class_name: class.to_string(),
            is_node: false,
        },
    )
    .context("Failed to normalize spec")?;

    println!("\n{}", "✓ Parse successful!".green().bold());
    println!("\n{}", "Client model:".bold());
    if let Some(ref description) = document.description {
        println!("  Description: {}", description);
    }
    println!("  Methods: {}", document.methods.len());
    println!("  Models: {}", document.models.len());

    if verbose {
        println!("\n{}", "Methods:".bold());
        for method in &document.methods {
            println!(
                "  • {} {} → {} ({} parameters)",
                method.verb,
                method.path.cyan(),
                method.name.yellow(),
                method.parameters.len()
            );
        }
        if !document.models.is_empty() {
            println!("\n{}", "Models:".bold());
            for model in &document.models {
                println!(
                    "  • {} ({} properties)",
                    model.name.cyan(),
                    model.properties.len()
                );
            }
        }
    }

    Ok(())
}

/// Configuration for the generate command
struct GenerateConfig<'a> {
    spec_path: &'a Path,
    module: &'a str,
    class: &'a str,
    flavor: OutputFlavor,
    class_template: Option<&'a Path>,
    method_template: Option<&'a Path>,
    request_template: Option<&'a Path>,
    output: Option<&'a Path>,
    verbose: bool,
}

fn generate_command(config: GenerateConfig) -> Result<()> {
    println!(
        "{} Generating {} client from: {}",
        "→".cyan(),
        config.flavor.to_string().yellow(),
        config.spec_path.display()
    );

    let swagger = load_spec(config.spec_path)?;

    if config.verbose {
        println!("  Module: {}", config.module);
        println!("  Class: {}", config.class);
    }

    let template = match config.flavor {
        OutputFlavor::Custom => Some(TemplateOverride {
            class: read_template(config.class_template)?,
            method: read_template(config.method_template)?,
            request: read_template(config.request_template)?,
        }),
        _ => None,
    };

    let opts = GenerateOptions {
        swagger,
        module_name: config.module.to_string(),
        class_name: config.class.to_string(),
        lint: false,
        beautify: false,
        template,
    };

    let generator = CodeGenerator::new();
    let source = match config.flavor {
        OutputFlavor::Angular => generator.generate_angular(&opts),
        OutputFlavor::Node => generator.generate_node(&opts),
        OutputFlavor::Custom => generator.generate_custom(&opts),
    }
    .context("Failed to generate client")?;

    match config.output {
        Some(path) => {
            fs::write(path, source)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            println!("\n{}", "✓ Generation complete!".green().bold());
            println!("  📄 {}", path.display());
        }
        None => {
            println!();
            print!("{}", source);
        }
    }

    Ok(())
}

fn read_template(path: Option<&Path>) -> Result<Option<String>> {
    match path {
        Some(path) => {
            let body = fs::read_to_string(path)
                .with_context(|| format!("Failed to read template file {}", path.display()))?;
            Ok(Some(body))
        }
        None => Ok(None),
    }
}
