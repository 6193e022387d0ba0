use anyhow::Result;
use rcarousel::{FeedWriter, VirtualFeedSource};
use std::env;
use tracing_subscriber::EnvFilter;

struct Config {
    count: Option<usize>,
    seed: u64,
    output_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            count: None,
            seed: 42,
            output_file: None,
            use_brotli: false,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-count" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-count requires an argument");
                }
                config.count = Some(args[i].parse()?);
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Banner Feed Generator");
    println!("Usage: carousel-feedgen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -count <N>             Number of banners (default: random 3..8)");
    println!("  -seed <S>              Random seed (default: 42)");
    println!("  -out <FILE>            Output file path (default: banners.json)");
    println!("  -brotli                Write compressed feed using Brotli (output: *.json.br)");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = parse_args()?;

    let output_path = config.output_file.clone().unwrap_or_else(|| {
        if config.use_brotli {
            "banners.json.br".to_string()
        } else {
            "banners.json".to_string()
        }
    });

    // -brotli with an explicit -out still compresses
    let output_path = if config.use_brotli && !output_path.ends_with(".br") {
        format!("{}.br", output_path)
    } else {
        output_path
    };

    let source = match config.count {
        Some(count) => VirtualFeedSource::with_count(config.seed, count),
        None => VirtualFeedSource::with_config(config.seed, 3, 8),
    };
    let feed = source.generate();

    FeedWriter::new(&output_path)?.write(&feed)?;

    println!("{} banners written to: {}", feed.len(), output_path);

    Ok(())
}
