use {
    anyhow::Context,
    clap::Parser,
    log::{info, LevelFilter},
    shs::{Algorithm, Hasher},
    std::{fs::File, io::Read, path::PathBuf},
};

/// Compute the SHA hash of an input.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// The SHA variant: 1, 224, 256, 384, 512, 512224 or 512256.
    #[arg(short, long)]
    algorithm: Algorithm,

    /// Diagnostic verbosity. At 0 only the digest is printed.
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=5))]
    verbosity: u8,

    #[command(flatten)]
    input: Input,
}

#[derive(Debug, clap::Args)]
#[group(required = true, multiple = false)]
struct Input {
    /// Hash the provided text, UTF-8 encoded.
    #[arg(short, long)]
    text: Option<String>,

    /// Hash the contents of the provided file.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Hash the test message "abc".
    #[arg(long)]
    test: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(match args.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let mut hasher = Hasher::new(args.algorithm);
    if args.input.test {
        info!("hashing the test message \"abc\"");
        hasher.update(b"abc");
    } else if let Some(text) = &args.input.text {
        info!("hashing {} bytes of text", text.len());
        hasher.update(text.as_bytes());
    } else if let Some(path) = &args.input.file {
        info!("hashing file {}", path.display());
        let mut file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let mut buf = [0u8; 64 * 1024];
        loop {
            let n = file
                .read(&mut buf)
                .with_context(|| format!("failed to read {}", path.display()))?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
    }

    let digest = hasher.digest()?;
    if args.verbosity == 0 {
        println!("{digest}");
    }
    Ok(())
}
