use std::path::PathBuf;

use alusus_defs_gen::defs::DefinitionSet;
use alusus_defs_gen::profile::{BuildInfo, DirNames};
use alusus_defs_gen::writer::{self, HEADER_FILE_NAME};
use color_eyre::eyre::WrapErr as _;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(clap::Parser)]
#[command(name = "alusus-defs-gen")]
#[command(about = "Generate the AlususDefs.h preprocessor header")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Emit only the installation directory name macros
    Dirs {
        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        dirs: DirArgs,
    },

    /// Emit version, toolchain, platform, and directory name macros
    Full {
        #[command(flatten)]
        output: OutputArgs,

        /// Release version string
        #[arg(long)]
        version: String,

        /// Source revision appended to the version
        #[arg(long)]
        revision: String,

        /// Shared library ABI version
        #[arg(long)]
        shlib_version: String,

        /// Gregorian release date
        #[arg(long)]
        release_date: String,

        /// Hijri release date
        #[arg(long)]
        hijri_release_date: String,

        /// C++ compiler identifier
        #[arg(long)]
        compiler: String,

        /// Build type (Debug enables ALUSUS_USE_LOGS)
        #[arg(long)]
        build_type: String,

        /// Target operating system name
        #[arg(long)]
        system_name: String,

        /// Target processor architecture
        #[arg(long)]
        system_processor: String,

        #[command(flatten)]
        dirs: DirArgs,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Directory to write the header into (created if missing)
    #[arg(value_name = "OUT_DIR")]
    out_dir: PathBuf,

    /// Header file name inside OUT_DIR
    #[arg(long, default_value = HEADER_FILE_NAME)]
    file_name: String,

    /// Print the header to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,
}

#[derive(clap::Args)]
struct DirArgs {
    /// Name of the binaries directory
    #[arg(long, default_value = "bin")]
    bin_dir_name: String,

    /// Name of the libraries directory
    #[arg(long, default_value = "lib")]
    lib_dir_name: String,

    /// Name of the headers directory
    #[arg(long, default_value = "include")]
    include_dir_name: String,
}

impl From<DirArgs> for DirNames {
    fn from(args: DirArgs) -> Self {
        Self {
            bin: args.bin_dir_name,
            lib: args.lib_dir_name,
            include: args.include_dir_name,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit(output: OutputArgs, defs: &DefinitionSet) -> color_eyre::Result<()> {
    let header = defs.render().wrap_err("failed to render header")?;

    if output.dry_run {
        print!("{header}");
        return Ok(());
    }

    let path = output.out_dir.join(&output.file_name);
    writer::write_if_changed(&path, &header)
        .wrap_err_with(|| format!("failed to update {}", path.display()))?;
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    use clap::Parser as _;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Dirs { output, dirs } => {
            let defs = DirNames::from(dirs).definitions()?;
            emit(output, &defs)
        }
        Command::Full {
            output,
            version,
            revision,
            shlib_version,
            release_date,
            hijri_release_date,
            compiler,
            build_type,
            system_name,
            system_processor,
            dirs,
        } => {
            let info = BuildInfo {
                version,
                revision,
                shlib_version,
                release_date,
                hijri_release_date,
                compiler,
                build_type,
                system_name,
                system_processor,
                dirs: dirs.into(),
            };
            tracing::debug!(debug_build = info.is_debug(), "building full header");
            emit(output, &info.definitions()?)
        }
    }
}
