mod scene;

use std::fs;
use std::path::PathBuf;

use bumpalo::Bump;
use clap::Parser;
use guiaccess::{render_error, render_warnings};
use guiaccess_core::{ControlNode, EmitterOptions, GeneratorOptions, SceneTree, generate_root};
use miette::{IntoDiagnostic, Result, WrapErr, miette};

use crate::scene::SceneDoc;

/// Generate typed GUI accessor classes from a control scene description.
#[derive(Parser, Debug)]
#[command(name = "guiaccess")]
#[command(about = "Generate GUI accessor classes from a control tree", long_about = None)]
struct Args {
    /// Scene description file (JSON)
    scene: PathBuf,

    /// Directory the generated .cs files are written into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Generate only for these root names (default: every root in the scene)
    #[arg(long = "root")]
    roots: Vec<String>,

    /// Print generated units to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Extra namespaces emitted as `using` lines (repeatable)
    #[arg(long = "import")]
    imports: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use GUIACCESS_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("GUIACCESS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let raw = fs::read_to_string(&args.scene)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot read scene file {}", args.scene.display()))?;
    let doc: SceneDoc = serde_json::from_str(&raw)
        .into_diagnostic()
        .wrap_err("scene file is not a valid scene description")?;

    let arena = Bump::new();
    let tree = scene::build_tree(&arena, &doc);
    let selected = select_roots(&tree, &args.roots)?;
    if selected.is_empty() {
        tracing::info!("scene has no roots selected; nothing to generate");
        return Ok(());
    }

    let mut options = GeneratorOptions {
        emitter: EmitterOptions::default(),
    };
    options.emitter.imports.extend(args.imports.iter().cloned());

    for root in selected {
        let generated = match generate_root(&tree, root, &options) {
            Ok(generated) => generated,
            Err(error) => {
                // fatal: nothing written for this or any later root
                render_error(&error);
                std::process::exit(1);
            }
        };
        render_warnings(&generated.warnings);

        if args.stdout {
            println!("{}", generated.text);
        } else {
            let path = args.out_dir.join(&generated.file_name);
            fs::write(&path, &generated.text)
                .into_diagnostic()
                .wrap_err_with(|| format!("cannot write {}", path.display()))?;
            tracing::info!(file = %path.display(), class = %generated.class_name, "wrote accessor");
        }
    }

    Ok(())
}

/// Resolve `--root` names against the scene, keeping selection order; with no
/// filters, every scene root is selected in file order.
fn select_roots<'a>(tree: &SceneTree<'a>, filters: &[String]) -> Result<Vec<&'a ControlNode<'a>>> {
    use guiaccess_core::TreeProvider;

    if filters.is_empty() {
        return Ok(tree.roots().to_vec());
    }
    filters
        .iter()
        .map(|wanted| {
            tree.roots()
                .iter()
                .find(|root| root.name() == wanted.as_str())
                .copied()
                .ok_or_else(|| miette!("no root named '{wanted}' in the scene"))
        })
        .collect()
}
